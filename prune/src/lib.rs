use std::process::ExitCode;

use anyhow::Context;
use pkgprune_auth::client::{ApiTokenArguments, ApiTokenProvider};
use pkgprune_client::{HttpTransport, PackageType};
use pkgprune_common::reqwest::ClientConfig;
use url::Url;

mod config;
mod pruner;
mod report;

pub use config::*;
pub use pruner::*;
pub use report::*;

/// Delete old package versions, keeping only the most recent ones
#[derive(clap::Args, Debug)]
#[command(about = "Prune old package versions", args_conflicts_with_subcommands = true)]
pub struct Run {
    /// Base URL of the repository service, API paths are appended to it
    #[arg(short = 'u', long = "url", env = "PACKAGECLOUD_URL", default_value = DEFAULT_URL)]
    pub url: Url,

    /// Account owning the repository
    #[arg(long = "user", env = "PACKAGECLOUD_USER", default_value = DEFAULT_USER)]
    pub user: String,

    /// Name of the repository
    #[arg(short = 'r', long = "repository", env = "PACKAGECLOUD_REPOSITORY", default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Number of most recent versions to keep for each package
    #[arg(
        short = 'l',
        long = "limit",
        env = "PRUNE_LIMIT",
        default_value_t = DEFAULT_RETENTION_LIMIT as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: u32,

    /// Package types to prune, in order
    #[arg(
        short = 't',
        long = "package-type",
        env = "PRUNE_PACKAGE_TYPES",
        value_delimiter = ',',
        default_values_t = PackageType::ALL
    )]
    pub package_types: Vec<PackageType>,

    #[command(flatten)]
    pub auth: ApiTokenArguments,

    #[command(flatten)]
    pub client: ClientConfig,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        if let Err(e) = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_timestamp_millis()
            .try_init()
        {
            eprintln!("Error initializing logging: {:?}", e);
        }

        let client = self.client.build_client().context("Failed to create HTTP client")?;
        let config = PruneConfig::from(self);

        let transport = HttpTransport::new(client, config.url.clone(), ApiTokenProvider::new(&config.token));
        let report = Pruner::new(&config, transport).run().await?;

        log::info!("{report}");

        Ok(ExitCode::SUCCESS)
    }
}

impl From<Run> for PruneConfig {
    fn from(run: Run) -> Self {
        Self {
            url: run.url,
            token: run.auth.api_token,
            user: run.user,
            repository: run.repository,
            retention_limit: run.limit as usize,
            package_types: run.package_types,
        }
    }
}
