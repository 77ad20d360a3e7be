use pkgprune_client::PackageType;
use std::fmt::{Debug, Formatter};
use url::Url;

pub const DEFAULT_URL: &str = "https://packagecloud.io";
pub const DEFAULT_USER: &str = "p1";
pub const DEFAULT_REPOSITORY: &str = "perfops";
/// Number of most recent versions which survive pruning.
pub const DEFAULT_RETENTION_LIMIT: usize = 2;

/// Everything a pruning run needs to know.
#[derive(Clone, PartialEq, Eq)]
pub struct PruneConfig {
    pub url: Url,
    pub token: String,
    pub user: String,
    pub repository: String,
    pub retention_limit: usize,
    /// Package types to process, in this order.
    pub package_types: Vec<PackageType>,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("default URL must be valid"),
            token: String::new(),
            user: DEFAULT_USER.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            retention_limit: DEFAULT_RETENTION_LIMIT,
            package_types: PackageType::ALL.to_vec(),
        }
    }
}

impl Debug for PruneConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PruneConfig")
            .field("url", &self.url.as_str())
            .field("token", &"***")
            .field("user", &self.user)
            .field("repository", &self.repository)
            .field("retention_limit", &self.retention_limit)
            .field("package_types", &self.package_types)
            .finish()
    }
}
