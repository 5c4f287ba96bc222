//! Catalog service
//!
//! This module provides the read-side operations over the chart store:
//! listing, name/version filtering, and single-chart lookups. It owns the
//! pagination and deduplication behavior so that both the repo-scoped and
//! namespace-wide routes share one code path.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chartsvc_core::{Chart, ChartVersion, DEFAULT_VALUES_NAME};
use chartsvc_db::{ChartFilesRepository, ChartQuery, ChartRepository, Pagination};
use tracing::{debug, instrument, warn};

use crate::dto::{ChartFilterRequest, ChartPage, ListChartsRequest};
use crate::error::{ServiceError, ServiceResult};

/// Trait for catalog read operations
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List charts in a namespace, optionally scoped to one repository
    async fn list_charts(&self, request: ListChartsRequest) -> ServiceResult<ChartPage>;

    /// Find charts whose versions match a name, version, and app version
    async fn list_charts_with_filters(
        &self,
        request: ChartFilterRequest,
    ) -> ServiceResult<Vec<Chart>>;

    /// Get a single chart by its `{repo}/{name}` identifier
    async fn get_chart(&self, namespace: &str, chart_id: &str) -> ServiceResult<Chart>;

    /// Get a chart together with one of its versions
    async fn get_chart_version(
        &self,
        namespace: &str,
        chart_id: &str,
        version: &str,
    ) -> ServiceResult<(Chart, ChartVersion)>;

    /// Resolve the values filename advertised for a chart version
    ///
    /// Falls back to the conventional name when the file bundle is missing
    /// or the store fails; this lookup never blocks rendering a chart.
    async fn values_filename(&self, namespace: &str, files_id: &str) -> String;
}

/// Default implementation of CatalogService
pub struct DefaultCatalogService {
    charts: Arc<dyn ChartRepository>,
    files: Arc<dyn ChartFilesRepository>,
}

impl DefaultCatalogService {
    /// Create a new catalog service
    pub fn new(charts: Arc<dyn ChartRepository>, files: Arc<dyn ChartFilesRepository>) -> Self {
        Self { charts, files }
    }
}

/// Keep the first chart seen for each name, preserving order.
fn unique_by_name(charts: Vec<Chart>) -> Vec<Chart> {
    let mut seen = HashSet::new();
    charts
        .into_iter()
        .filter(|chart| seen.insert(chart.name.clone()))
        .collect()
}

/// Whether any version of the chart carries both requested version strings.
fn matches_versions(chart: &Chart, version: &str, app_version: &str) -> bool {
    chart
        .chart_versions
        .iter()
        .any(|cv| cv.version == version && cv.app_version == app_version)
}

#[async_trait]
impl CatalogService for DefaultCatalogService {
    #[instrument(skip(self))]
    async fn list_charts(&self, request: ListChartsRequest) -> ServiceResult<ChartPage> {
        let mut query = ChartQuery::new(&request.namespace);
        if let Some(repo) = &request.repo {
            query = query.repo(repo);
        }

        if request.size == 0 {
            let charts = self.charts.list(&query).await?;
            debug!(count = charts.len(), "listed charts without pagination");
            return Ok(ChartPage {
                charts,
                total_pages: 1,
            });
        }

        let pagination = Pagination::new(request.page, request.size);
        let total = self.charts.count(&query).await?;
        let charts = self.charts.list(&query.paginate(request.page, request.size)).await?;
        debug!(count = charts.len(), total, "listed chart page");

        Ok(ChartPage {
            charts,
            total_pages: pagination.total_pages(total),
        })
    }

    #[instrument(skip(self))]
    async fn list_charts_with_filters(
        &self,
        request: ChartFilterRequest,
    ) -> ServiceResult<Vec<Chart>> {
        let query = ChartQuery::new(&request.namespace).name(&request.name);
        let charts = self.charts.list(&query).await?;

        let matched: Vec<Chart> = charts
            .into_iter()
            .filter(|chart| matches_versions(chart, &request.version, &request.app_version))
            .collect();

        if request.show_duplicates {
            Ok(matched)
        } else {
            Ok(unique_by_name(matched))
        }
    }

    #[instrument(skip(self))]
    async fn get_chart(&self, namespace: &str, chart_id: &str) -> ServiceResult<Chart> {
        Ok(self.charts.get(namespace, chart_id).await?)
    }

    #[instrument(skip(self))]
    async fn get_chart_version(
        &self,
        namespace: &str,
        chart_id: &str,
        version: &str,
    ) -> ServiceResult<(Chart, ChartVersion)> {
        let chart = self.charts.get(namespace, chart_id).await?;
        let chart_version = chart
            .version(version)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("{}-{}", chart_id, version)))?;
        Ok((chart, chart_version))
    }

    #[instrument(skip(self))]
    async fn values_filename(&self, namespace: &str, files_id: &str) -> String {
        match self.files.get(namespace, files_id).await {
            Ok(files) => files.default_values_name().to_string(),
            Err(err) => {
                if !err.is_not_found() {
                    warn!(files_id, error = %err, "values filename lookup failed");
                }
                DEFAULT_VALUES_NAME.to_string()
            }
        }
    }
}
