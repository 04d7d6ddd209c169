pub mod form;
pub mod service;
pub mod transfer;
