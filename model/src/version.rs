use chrono::{DateTime, Utc};

/// A single uploaded version of a package.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Version {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Path used to delete this version, relative to the service root.
    pub destroy_url: String,
}

/// Sort versions oldest first. Versions created at the same instant keep their listing order.
pub fn sort_oldest_first(versions: &mut [Version]) {
    versions.sort_by_key(|v| v.created_at);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_listing() {
        let versions: Vec<Version> = serde_json::from_str(
            r#"[
  {
    "name": "perfops-cli",
    "distro_version": "el/7",
    "created_at": "2019-02-01T08:00:00.000Z",
    "version": "0.8.1",
    "release": "1",
    "epoch": 0,
    "private": false,
    "type": "rpm",
    "filename": "perfops-cli-0.8.1-1.x86_64.rpm",
    "indexed": true,
    "destroy_url": "/api/v1/repos/p1/perfops/el/7/perfops-cli-0.8.1-1.x86_64.rpm"
  },
  {
    "name": "perfops-cli",
    "created_at": "2019-01-16T10:20:13+01:00",
    "version": "0.8.0",
    "release": null,
    "destroy_url": "/api/v1/repos/p1/perfops/el/7/perfops-cli-0.8.0-1.x86_64.rpm"
  }
]"#,
        )
        .unwrap();

        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].version.as_deref(), Some("0.8.1"));
        assert_eq!(versions[1].release, None);
        assert_eq!(versions[1].created_at.to_rfc3339(), "2019-01-16T09:20:13+00:00");
    }

    #[test]
    fn invalid_timestamp() {
        let result: Result<Vec<Version>, _> =
            serde_json::from_str(r#"[{"created_at": "yesterday", "destroy_url": "/d"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn sort_by_creation() {
        let mut versions: Vec<Version> = serde_json::from_str(
            r#"[
  {"created_at": "2020-03-01T00:00:00Z", "destroy_url": "/c"},
  {"created_at": "2020-01-01T00:00:00Z", "destroy_url": "/a"},
  {"created_at": "2020-02-01T00:00:00Z", "destroy_url": "/b1"},
  {"created_at": "2020-02-01T00:00:00Z", "destroy_url": "/b2"}
]"#,
        )
        .unwrap();

        sort_oldest_first(&mut versions);

        let urls: Vec<_> = versions.iter().map(|v| v.destroy_url.as_str()).collect();
        assert_eq!(urls, vec!["/a", "/b1", "/b2", "/c"]);
    }
}
