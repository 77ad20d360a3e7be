use super::{super::error::Error, Credentials, TokenProvider};
use async_trait::async_trait;
use std::fmt::{Debug, Formatter};

/// A token provider, using a repository API token.
///
/// The API expects the token as the user name of a basic authentication, with an empty password.
#[derive(Clone)]
pub struct ApiTokenProvider {
    pub token: String,
}

impl ApiTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl Debug for ApiTokenProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTokenProvider").field("token", &"***").finish()
    }
}

#[async_trait]
impl TokenProvider for ApiTokenProvider {
    async fn provide_access_token(&self) -> Result<Option<Credentials>, Error> {
        if self.token.is_empty() {
            return Err(Error::EmptyToken);
        }
        Ok(Some(Credentials {
            username: self.token.clone(),
            password: None,
        }))
    }
}
