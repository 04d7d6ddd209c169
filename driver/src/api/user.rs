use serde::Deserialize;

use kernel::interface::query::SessionQuery;
use kernel::prelude::entity::{User, UserName};
use kernel::KernelError;

use crate::api::{read_json, HttpBackend};
use crate::error::{ConvertError, DriverError};

#[async_trait::async_trait]
impl SessionQuery for HttpBackend {
    async fn current_user(&self) -> error_stack::Result<Option<User>, KernelError> {
        HttpSessionInternal::current_user(self).await.convert_error()
    }
}

#[derive(Debug, Deserialize)]
struct UserRow {
    name: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        User::new(UserName::new(value.name))
    }
}

pub(in crate::api) struct HttpSessionInternal;

impl HttpSessionInternal {
    /// The backend answers `/profile` with `null` when the cookie is missing
    /// or stale.
    async fn current_user(backend: &HttpBackend) -> Result<Option<User>, DriverError> {
        let response = backend.get("/profile").send().await?;
        let row: Option<UserRow> = read_json(response).await?;
        Ok(row.map(User::from))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::query::SessionQuery;
    use kernel::prelude::entity::{User, UserName};

    use crate::api::mock;

    #[tokio::test]
    async fn anonymous_without_token() {
        let (backend, _) = mock::spawn(false, None).await;
        assert_eq!(backend.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn token_is_sent_as_cookie() {
        let (backend, recorded) = mock::spawn(false, Some("secret")).await;
        let user = backend.current_user().await.unwrap();
        assert_eq!(user, Some(User::new(UserName::new("Ada"))));
        assert_eq!(
            recorded.cookies.lock().unwrap().as_slice(),
            &["token=secret".to_string()]
        );
    }

    #[test_with::env(BOOKING_API_TEST)]
    #[tokio::test]
    async fn live_backend_profile() {
        let backend = crate::api::HttpBackend::from_env().unwrap();
        backend.current_user().await.unwrap();
    }
}
