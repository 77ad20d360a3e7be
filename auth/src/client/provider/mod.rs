mod api_token;

pub use self::api_token::*;

use super::error::Error;
use async_trait::async_trait;
use std::fmt::Debug;

/// Basic authentication credentials: user name and optional password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

/// A provider for access credentials.
#[async_trait]
pub trait TokenProvider: Send + Sync + Debug {
    async fn provide_access_token(&self) -> Result<Option<Credentials>, Error>;
}

/// A token provider which does not provide tokens.
#[derive(Debug, Clone, Copy)]
pub struct NoTokenProvider;

#[async_trait]
impl TokenProvider for NoTokenProvider {
    async fn provide_access_token(&self) -> Result<Option<Credentials>, Error> {
        Ok(None)
    }
}

#[async_trait]
impl<T> TokenProvider for Option<T>
where
    T: TokenProvider + Sync,
{
    async fn provide_access_token(&self) -> Result<Option<Credentials>, Error> {
        match self {
            None => Ok(None),
            Some(provider) => provider.provide_access_token().await,
        }
    }
}
