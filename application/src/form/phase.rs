#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// A creation request is in flight; further submissions are refused.
    Submitting,
    /// Terminal. The widget navigates to `redirect`.
    Submitted { redirect: String },
}
