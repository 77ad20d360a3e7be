use crate::Error;
use async_trait::async_trait;
use bytes::Bytes;
use pkgprune_auth::client::{TokenInjector, TokenProvider};
use pkgprune_common::error::ErrorInformation;
use reqwest::Response;
use std::sync::Arc;
use url::Url;

/// The HTTP operations required to talk to the repository API.
///
/// Paths are relative to the service root, as they are returned by the service itself.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Bytes, Error>;

    async fn delete(&self, path: &str) -> Result<(), Error>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn get(&self, path: &str) -> Result<Bytes, Error> {
        self.as_ref().get(path).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        self.as_ref().delete(path).await
    }
}

/// A [`Transport`] using `reqwest`, authenticating every request.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    provider: Box<dyn TokenProvider>,
}

impl HttpTransport {
    pub fn new<P>(client: reqwest::Client, base_url: Url, provider: P) -> Self
    where
        P: TokenProvider + 'static,
    {
        Self {
            client,
            base_url,
            provider: Box::new(provider),
        }
    }

    /// Append a service path to the base URL, keeping any path prefix of the base.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

/// Turn a non-success response into an error, using the error body if the service sent one.
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let message = match serde_json::from_slice::<ErrorInformation>(&body) {
        Ok(info) => info.to_string(),
        Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
    };

    Err(Error::Status { status, message })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Bytes, Error> {
        let response = self
            .client
            .get(self.url(path)?)
            .inject_token(self.provider.as_ref())
            .await?
            .send()
            .await?;

        Ok(check_status(response).await?.bytes().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let response = self
            .client
            .delete(self.url(path)?)
            .inject_token(self.provider.as_ref())
            .await?
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }
}
