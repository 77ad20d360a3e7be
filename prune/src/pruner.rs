use crate::{Phase, PruneConfig, Report, ReportBuilder};
use anyhow::Context;
use pkgprune_client::{PackageType, RepositoryClient, RepositoryUrl, Transport, Version};

/// The versions to delete, from a list sorted oldest first: everything but the `limit` newest.
pub fn obsolete(versions: &[Version], limit: usize) -> &[Version] {
    &versions[..versions.len().saturating_sub(limit)]
}

/// Walks all packages of the configured types, deleting old versions.
///
/// All calls are performed one after the other. Failing to list the packages of a type aborts the
/// run, failing to list versions skips the package, and failing to delete a version skips only
/// that version.
pub struct Pruner<T: Transport> {
    client: RepositoryClient<T>,
    retention_limit: usize,
    package_types: Vec<PackageType>,
}

impl<T: Transport> Pruner<T> {
    pub fn new(config: &PruneConfig, transport: T) -> Self {
        Self {
            client: RepositoryClient::new(transport, RepositoryUrl::new(&config.user, &config.repository)),
            retention_limit: config.retention_limit,
            package_types: config.package_types.clone(),
        }
    }

    pub async fn run(&self) -> anyhow::Result<Report> {
        let mut report = ReportBuilder::new();

        for package_type in &self.package_types {
            self.prune_type(*package_type, &mut report).await?;
        }

        Ok(report.build())
    }

    async fn prune_type(&self, package_type: PackageType, report: &mut ReportBuilder) -> anyhow::Result<()> {
        let packages = self
            .client
            .list_packages(package_type)
            .await
            .with_context(|| format!("Failed to list {package_type} packages"))?;

        log::info!("Found {} {package_type} packages", packages.len());

        for package in packages {
            report.tick();

            if !package.exceeds(self.retention_limit) {
                log::debug!(
                    "Keeping {} ({} versions)",
                    package.versions_url,
                    package.versions_count
                );
                continue;
            }

            let versions = match self.client.list_versions(&package.versions_url).await {
                Ok(versions) => versions,
                Err(err) => {
                    log::warn!("Skipping {}: {err}", package.versions_url);
                    report.add_error(Phase::Versions, &package.versions_url, err.to_string());
                    Vec::new()
                }
            };

            self.prune_versions(&versions, report).await;
        }

        Ok(())
    }

    /// Delete the obsolete versions, oldest first. `versions` must be sorted oldest first.
    async fn prune_versions(&self, versions: &[Version], report: &mut ReportBuilder) {
        for version in obsolete(versions, self.retention_limit) {
            log::info!("Deleting {}", version.destroy_url);
            match self.client.delete_version(version).await {
                Ok(()) => report.deleted(),
                Err(err) => {
                    log::error!("ERROR: failed to delete {}: {err}", version.destroy_url);
                    report.add_error(Phase::Delete, &version.destroy_url, err.to_string());
                }
            }
        }
    }
}
