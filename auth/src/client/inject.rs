use super::{error::Error, TokenProvider};
use async_trait::async_trait;
use tracing::instrument;

/// Adds the credentials of a [`TokenProvider`] to an outgoing request.
#[async_trait]
pub trait TokenInjector: Sized + Send + Sync {
    async fn inject_token(self, token_provider: &dyn TokenProvider) -> Result<Self, Error>;
}

#[async_trait]
impl TokenInjector for reqwest::RequestBuilder {
    #[instrument(level = "debug", skip_all, err)]
    async fn inject_token(self, token_provider: &dyn TokenProvider) -> Result<Self, Error> {
        Ok(match token_provider.provide_access_token().await? {
            Some(credentials) => self.basic_auth(credentials.username, credentials.password),
            None => self,
        })
    }
}
