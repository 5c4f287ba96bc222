//! Chart and repository models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chart repository reference: repository name plus the namespace it was
/// registered under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub namespace: String,
}

impl Repo {
    /// Create a repository reference.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Chart maintainer contact information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// One immutable release of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartVersion {
    /// Semver string of the chart package itself.
    pub version: String,

    /// Version of the application the chart deploys.
    #[serde(default)]
    pub app_version: String,

    /// Content digest of the chart package.
    #[serde(default)]
    pub digest: String,

    /// When the release was published.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// A packaged application template identified by `repo/name`.
///
/// `chart_versions` is ordered newest-first by the ingestion pipeline;
/// index 0 is by convention the latest release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Composite identifier, `<repo>/<name>`.
    pub id: String,

    pub name: String,

    pub repo: Repo,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub home: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub maintainers: Vec<Maintainer>,

    #[serde(default)]
    pub sources: Vec<String>,

    /// Raw icon bytes as stored by the ingestion pipeline. The API layer
    /// never puts these on the wire; responses carry a derived asset URL
    /// instead.
    #[serde(default)]
    pub raw_icon: Vec<u8>,

    #[serde(default)]
    pub icon_content_type: String,

    #[serde(default)]
    pub chart_versions: Vec<ChartVersion>,
}

impl Chart {
    /// Composite chart ID for a repository and chart name.
    pub fn chart_id(repo: &str, name: &str) -> String {
        format!("{}/{}", repo, name)
    }

    /// The newest release. Index 0 of the version list, which the ingestion
    /// pipeline keeps sorted newest-first.
    pub fn latest_version(&self) -> Option<&ChartVersion> {
        self.chart_versions.first()
    }

    /// Find the release whose version string matches exactly. No semver
    /// range resolution happens here.
    pub fn version(&self, version: &str) -> Option<&ChartVersion> {
        self.chart_versions.iter().find(|cv| cv.version == version)
    }

    /// Whether the chart carries icon bytes.
    pub fn has_icon(&self) -> bool {
        !self.raw_icon.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_with_versions(versions: &[&str]) -> Chart {
        Chart {
            id: "my-repo/my-chart".to_string(),
            name: "my-chart".to_string(),
            repo: Repo::new("my-repo", "default"),
            chart_versions: versions
                .iter()
                .map(|v| ChartVersion {
                    version: v.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_chart_id_format() {
        assert_eq!(Chart::chart_id("stable", "wordpress"), "stable/wordpress");
    }

    #[test]
    fn test_latest_version_is_index_zero() {
        let chart = chart_with_versions(&["1.2.3", "1.2.2", "1.0.0"]);
        assert_eq!(chart.latest_version().unwrap().version, "1.2.3");
    }

    #[test]
    fn test_latest_version_of_empty_chart() {
        let chart = chart_with_versions(&[]);
        assert!(chart.latest_version().is_none());
    }

    #[test]
    fn test_version_exact_match() {
        let chart = chart_with_versions(&["1.2.3", "1.2.2"]);
        assert_eq!(chart.version("1.2.2").unwrap().version, "1.2.2");
        assert!(chart.version("1.2").is_none());
        assert!(chart.version("^1.2.0").is_none());
    }

    #[test]
    fn test_chart_roundtrips_through_json() {
        let mut chart = chart_with_versions(&["0.1.0"]);
        chart.raw_icon = vec![1, 2, 3];
        chart.icon_content_type = "image/svg".to_string();

        let value = serde_json::to_value(&chart).unwrap();
        let decoded: Chart = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, chart);
    }

    #[test]
    fn test_chart_decodes_sparse_document() {
        // Documents written by older ingestion runs omit most fields.
        let decoded: Chart = serde_json::from_str(
            r#"{"id": "stable/dokuwiki", "name": "dokuwiki", "repo": {"name": "stable", "namespace": "default"}}"#,
        )
        .unwrap();
        assert_eq!(decoded.id, "stable/dokuwiki");
        assert!(decoded.chart_versions.is_empty());
        assert!(decoded.raw_icon.is_empty());
    }
}
