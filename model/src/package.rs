use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The type of package, as used by the repository listing endpoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Deb,
    Rpm,
}

impl PackageType {
    pub const ALL: [PackageType; 2] = [PackageType::Deb, PackageType::Rpm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deb => "deb",
            Self::Rpm => "rpm",
        }
    }
}

impl Display for PackageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown package type: {0}")]
pub struct UnknownPackageType(pub String);

impl FromStr for PackageType {
    type Err = UnknownPackageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "deb" => Ok(Self::Deb),
            "rpm" => Ok(Self::Rpm),
            other => Err(UnknownPackageType(other.to_string())),
        }
    }
}

/// A package hosted in the repository, as returned by the package listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Package {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distro_version: Option<String>,
    pub versions_count: u64,
    /// Path of the version listing, relative to the service root.
    pub versions_url: String,
}

impl Package {
    /// Check if the package holds more versions than it is allowed to keep.
    pub fn exceeds(&self, limit: usize) -> bool {
        self.versions_count > limit as u64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_listing() {
        let packages: Vec<Package> = serde_json::from_str(
            r#"[
  {
    "name": "perfops-cli",
    "distro_version": "ubuntu/xenial",
    "created_at": "2019-01-16T10:20:13.000Z",
    "versions_count": 5,
    "versions_url": "/api/v1/repos/p1/perfops/package/deb/ubuntu/xenial/perfops-cli/amd64/versions.json",
    "repository_html_url": "/p1/perfops",
    "package_url": "/api/v1/repos/p1/perfops/package/deb/ubuntu/xenial/perfops-cli/amd64.json",
    "package_html_url": "/p1/perfops/packages/ubuntu/xenial/perfops-cli"
  }
]"#,
        )
        .unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "perfops-cli");
        assert_eq!(packages[0].distro_version.as_deref(), Some("ubuntu/xenial"));
        assert_eq!(packages[0].versions_count, 5);
        assert!(packages[0].versions_url.ends_with("/versions.json"));
    }

    #[test]
    fn missing_versions_url() {
        let result: Result<Vec<Package>, _> = serde_json::from_str(r#"[{"versions_count": 3}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn exceeds_limit() {
        let package = Package {
            name: "foo".into(),
            distro_version: None,
            versions_count: 2,
            versions_url: "/v".into(),
        };
        assert!(!package.exceeds(2));
        assert!(package.exceeds(1));
    }

    #[test]
    fn package_type() {
        assert_eq!(PackageType::from_str("deb"), Ok(PackageType::Deb));
        assert_eq!(PackageType::from_str(" rpm"), Ok(PackageType::Rpm));
        assert_eq!(
            PackageType::from_str("gem"),
            Err(UnknownPackageType("gem".to_string()))
        );
        assert_eq!(PackageType::Rpm.to_string(), "rpm");
    }
}
