use crate::entity::User;
use crate::KernelError;

#[async_trait::async_trait]
pub trait SessionQuery: Sync + Send + 'static {
    /// `None` when nobody is signed in.
    async fn current_user(&self) -> error_stack::Result<Option<User>, KernelError>;
}

pub trait DependOnSessionQuery: Sync + Send + 'static {
    type SessionQuery: SessionQuery;
    fn session_query(&self) -> &Self::SessionQuery;
}
