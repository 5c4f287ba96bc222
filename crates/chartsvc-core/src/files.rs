//! Per-version chart file bundles: README, values files, and JSON schema.

use serde::{Deserialize, Serialize};

/// Filename assumed when a chart ships no named value files.
pub const DEFAULT_VALUES_NAME: &str = "values.yaml";

/// A named values file within a chart version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFile {
    pub name: String,
    pub content: String,
}

/// The bundle of auxiliary text artifacts for one chart version, keyed by
/// `<chartID>-<version>`.
///
/// An empty `readme` means the chart has none. An empty `schema` means the
/// schema is present but empty, which is not the same as missing. Charts
/// ingested before named value files existed carry a single `values` blob
/// instead of `value_files` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFiles {
    /// Composite identifier, `<chartID>-<version>`.
    pub id: String,

    #[serde(default)]
    pub readme: String,

    /// Legacy single-file values payload.
    #[serde(default)]
    pub values: String,

    #[serde(default)]
    pub value_files: Vec<ValueFile>,

    #[serde(default)]
    pub schema: String,
}

impl ChartFiles {
    /// Composite file-bundle ID for a chart version.
    pub fn files_id(chart_id: &str, version: &str) -> String {
        format!("{}-{}", chart_id, version)
    }

    /// Name of the default values file: the first named entry when any
    /// exist, otherwise `values.yaml`.
    pub fn default_values_name(&self) -> &str {
        self.value_files
            .first()
            .map(|f| f.name.as_str())
            .unwrap_or(DEFAULT_VALUES_NAME)
    }

    /// Resolve the values payload for a requested filename. A named entry
    /// matching exactly wins; otherwise a non-empty legacy `values` blob is
    /// returned regardless of the requested name.
    pub fn values_for(&self, name: &str) -> Option<&str> {
        if let Some(file) = self.value_files.iter().find(|f| f.name == name) {
            return Some(file.content.as_str());
        }
        if !self.values.is_empty() {
            return Some(self.values.as_str());
        }
        None
    }
}
