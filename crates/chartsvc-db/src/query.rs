//! Query parameters for listing charts.

/// Pagination window for a chart list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,

    /// Page size; always greater than zero when pagination is requested
    pub size: u32,
}

impl Pagination {
    /// Create a pagination window. Page numbers below 1 are clamped to 1.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: page.max(1),
            size,
        }
    }

    /// Number of documents to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.size as i64
    }

    /// Total page count for a collection of `total` documents.
    pub fn total_pages(&self, total: i64) -> u64 {
        if self.size == 0 {
            return 1;
        }
        ((total.max(0) as u64) + self.size as u64 - 1) / self.size as u64
    }
}

/// Query parameters for listing charts within a namespace.
///
/// The namespace is mandatory; the routing layer always supplies it.
#[derive(Debug, Clone, Default)]
pub struct ChartQuery {
    /// Namespace scoping key
    pub namespace: String,

    /// Filter by owning repository name
    pub repo: Option<String>,

    /// Filter by chart name (exact match)
    pub name: Option<String>,

    /// Optional pagination window; `None` fetches everything
    pub pagination: Option<Pagination>,
}

impl ChartQuery {
    /// Create a query scoped to a namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Restrict to a single repository.
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Restrict to charts with this exact name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Apply a pagination window.
    pub fn paginate(mut self, page: u32, size: u32) -> Self {
        self.pagination = Some(Pagination::new(page, size));
        self
    }
}
