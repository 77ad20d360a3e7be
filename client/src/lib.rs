mod transport;

pub use pkgprune_model::*;
pub use transport::*;

use tracing::instrument;

/// Paths of a single repository of an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryUrl {
    user: String,
    repository: String,
}

impl RepositoryUrl {
    pub fn new(user: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            repository: repository.into(),
        }
    }

    pub fn packages_path(&self, package_type: PackageType) -> String {
        format!(
            "/api/v1/repos/{}/{}/packages/{}.json",
            self.user, self.repository, package_type
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(reqwest::Error),
    #[error("request failed with status {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("auth error: {0}")]
    Auth(pkgprune_auth::client::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(inner: reqwest::Error) -> Self {
        Self::Http(inner)
    }
}

impl From<pkgprune_auth::client::Error> for Error {
    fn from(inner: pkgprune_auth::client::Error) -> Self {
        Self::Auth(inner)
    }
}

/// Access to the packages of a single repository.
pub struct RepositoryClient<T: Transport> {
    transport: T,
    url: RepositoryUrl,
}

impl<T: Transport> RepositoryClient<T> {
    pub fn new(transport: T, url: RepositoryUrl) -> Self {
        Self { transport, url }
    }

    /// List all packages of a type, in the order the service returns them.
    #[instrument(skip(self), err)]
    pub async fn list_packages(&self, package_type: PackageType) -> Result<Vec<Package>, Error> {
        let data = self.transport.get(&self.url.packages_path(package_type)).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// List all versions of a package, oldest first.
    #[instrument(skip(self), err)]
    pub async fn list_versions(&self, versions_url: &str) -> Result<Vec<Version>, Error> {
        let data = self.transport.get(versions_url).await?;
        let mut versions: Vec<Version> = serde_json::from_slice(&data)?;
        sort_oldest_first(&mut versions);
        Ok(versions)
    }

    #[instrument(skip_all, fields(destroy_url = %version.destroy_url), err)]
    pub async fn delete_version(&self, version: &Version) -> Result<(), Error> {
        self.transport.delete(&version.destroy_url).await
    }
}
