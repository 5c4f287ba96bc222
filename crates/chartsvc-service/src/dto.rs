//! Data transfer objects for service operations
//!
//! These types sit between the HTTP layer and the catalog engine so that
//! handlers never construct store queries directly.

use chartsvc_core::Chart;

/// Request to list charts within a namespace
#[derive(Debug, Clone)]
pub struct ListChartsRequest {
    /// Namespace the charts were ingested into
    pub namespace: String,
    /// Restrict to a single repository when set
    pub repo: Option<String>,
    /// 1-based page number
    pub page: u32,
    /// Page size; 0 disables pagination
    pub size: u32,
}

impl ListChartsRequest {
    /// Create an unpaginated request covering a whole namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            repo: None,
            page: 1,
            size: 0,
        }
    }

    /// Restrict the listing to a repository
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Request a page window
    pub fn paginate(mut self, page: u32, size: u32) -> Self {
        self.page = page;
        self.size = size;
        self
    }
}

/// Request to find charts by name and version attributes
///
/// Matches a chart when any of its versions carries both the requested
/// chart version and app version.
#[derive(Debug, Clone)]
pub struct ChartFilterRequest {
    /// Namespace the charts were ingested into
    pub namespace: String,
    /// Chart name, matched across repositories
    pub name: String,
    /// Exact chart version string
    pub version: String,
    /// Exact app version string
    pub app_version: String,
    /// Keep one chart per name unless set
    pub show_duplicates: bool,
}

/// One page of charts plus the page count for the whole result set
#[derive(Debug, Clone)]
pub struct ChartPage {
    pub charts: Vec<Chart>,
    pub total_pages: u64,
}
