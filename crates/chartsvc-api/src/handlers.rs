//! API request handlers
//!
//! This module implements HTTP request handlers for all catalog and asset
//! endpoints.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chartsvc_core::{Chart, ChartFiles, DEFAULT_VALUES_NAME};
use chartsvc_service::{ChartFilterRequest, ListChartsRequest, ServiceRegistry};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    error::{ApiError, ApiResult},
    resources::{chart_resource, chart_version_resource, Resource},
    responses::{ok, paginated, ApiResponse},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service registry
    pub services: Arc<ServiceRegistry>,
}

impl AppState {
    /// Create new application state
    pub fn new(services: ServiceRegistry) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}

/// Query parameters accepted by the chart list endpoints
///
/// Everything arrives as strings; malformed numbers degrade to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub appversion: Option<String>,
    #[serde(rename = "showDuplicates")]
    pub show_duplicates: Option<String>,
}

impl ListParams {
    fn page(&self) -> u32 {
        parse_number(self.page.as_deref()).unwrap_or(1)
    }

    fn size(&self) -> u32 {
        parse_number(self.size.as_deref()).unwrap_or(0)
    }

    fn show_duplicates(&self) -> bool {
        self.show_duplicates
            .as_deref()
            .is_some_and(|value| !value.is_empty())
    }

    /// The filtered lookup runs only when all three filter params are set
    fn filters(&self) -> Option<(&str, &str, &str)> {
        match (&self.name, &self.version, &self.appversion) {
            (Some(name), Some(version), Some(appversion)) => {
                Some((name, version, appversion))
            }
            _ => None,
        }
    }
}

fn parse_number(value: Option<&str>) -> Option<u32> {
    value.and_then(|raw| raw.parse::<u32>().ok()).filter(|n| *n > 0)
}

// ============================================================================
// Chart Catalog Handlers
// ============================================================================

/// List charts in a namespace, or run the filtered lookup when name,
/// version, and appversion are all present
#[instrument(skip(state))]
pub async fn list_charts(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Query(params): Query<ListParams>,
) -> ApiResult<ApiResponse<Vec<Resource>>> {
    if let Some((name, version, appversion)) = params.filters() {
        debug!(namespace, name, "filtered chart lookup");
        let charts = state
            .services
            .catalog()
            .list_charts_with_filters(ChartFilterRequest {
                namespace: namespace.clone(),
                name: name.to_string(),
                version: version.to_string(),
                app_version: appversion.to_string(),
                show_duplicates: params.show_duplicates(),
            })
            .await
            .map_err(ApiError::from)?;

        let resources = chart_list_resources(&state, &namespace, charts).await;
        return Ok(paginated(resources, 1));
    }

    list_chart_page(&state, namespace, None, &params).await
}

/// List one repository's charts
#[instrument(skip(state))]
pub async fn list_repo_charts(
    State(state): State<AppState>,
    Path((namespace, repo)): Path<(String, String)>,
    Query(params): Query<ListParams>,
) -> ApiResult<ApiResponse<Vec<Resource>>> {
    list_chart_page(&state, namespace, Some(repo), &params).await
}

/// Get a single chart
#[instrument(skip(state))]
pub async fn get_chart(
    State(state): State<AppState>,
    Path((namespace, repo, chart_name)): Path<(String, String, String)>,
) -> ApiResult<ApiResponse<Resource>> {
    let chart_id = Chart::chart_id(&repo, &chart_name);
    let chart = state
        .services
        .catalog()
        .get_chart(&namespace, &chart_id)
        .await
        .map_err(ApiError::from)?;

    let values_name = latest_values_name(&state, &namespace, &chart).await;
    Ok(ok(chart_resource(&namespace, &chart, &values_name)))
}

/// List every version of a chart
#[instrument(skip(state))]
pub async fn list_chart_versions(
    State(state): State<AppState>,
    Path((namespace, repo, chart_name)): Path<(String, String, String)>,
) -> ApiResult<ApiResponse<Vec<Resource>>> {
    let chart_id = Chart::chart_id(&repo, &chart_name);
    let chart = state
        .services
        .catalog()
        .get_chart(&namespace, &chart_id)
        .await
        .map_err(ApiError::from)?;

    let mut resources = Vec::with_capacity(chart.chart_versions.len());
    for cv in &chart.chart_versions {
        let files_id = ChartFiles::files_id(&chart.id, &cv.version);
        let values_name = state
            .services
            .catalog()
            .values_filename(&namespace, &files_id)
            .await;
        resources.push(chart_version_resource(&namespace, &chart, cv, &values_name));
    }

    Ok(ok(resources))
}

/// Get one version of a chart
#[instrument(skip(state))]
pub async fn get_chart_version(
    State(state): State<AppState>,
    Path((namespace, repo, chart_name, version)): Path<(String, String, String, String)>,
) -> ApiResult<ApiResponse<Resource>> {
    let chart_id = Chart::chart_id(&repo, &chart_name);
    let (chart, cv) = state
        .services
        .catalog()
        .get_chart_version(&namespace, &chart_id, &version)
        .await
        .map_err(ApiError::from)?;

    let files_id = ChartFiles::files_id(&chart.id, &cv.version);
    let values_name = state
        .services
        .catalog()
        .values_filename(&namespace, &files_id)
        .await;

    Ok(ok(chart_version_resource(&namespace, &chart, &cv, &values_name)))
}

/// Shared path for the paginated list endpoints
async fn list_chart_page(
    state: &AppState,
    namespace: String,
    repo: Option<String>,
    params: &ListParams,
) -> ApiResult<ApiResponse<Vec<Resource>>> {
    let mut request = ListChartsRequest::new(namespace.clone()).paginate(params.page(), params.size());
    if let Some(repo) = repo {
        request = request.repo(repo);
    }

    let page = state
        .services
        .catalog()
        .list_charts(request)
        .await
        .map_err(ApiError::from)?;

    let resources = chart_list_resources(state, &namespace, page.charts).await;
    Ok(paginated(resources, page.total_pages))
}

/// Render a list of charts, resolving each one's values filename
async fn chart_list_resources(
    state: &AppState,
    namespace: &str,
    charts: Vec<Chart>,
) -> Vec<Resource> {
    let mut resources = Vec::with_capacity(charts.len());
    for chart in &charts {
        let values_name = latest_values_name(state, namespace, chart).await;
        resources.push(chart_resource(namespace, chart, &values_name));
    }
    resources
}

/// Values filename for a chart's latest version
async fn latest_values_name(state: &AppState, namespace: &str, chart: &Chart) -> String {
    match chart.latest_version() {
        Some(latest) => {
            let files_id = ChartFiles::files_id(&chart.id, &latest.version);
            state
                .services
                .catalog()
                .values_filename(namespace, &files_id)
                .await
        }
        None => DEFAULT_VALUES_NAME.to_string(),
    }
}

// ============================================================================
// Asset Handlers
// ============================================================================

/// Serve a chart's icon bytes
#[instrument(skip(state))]
pub async fn get_chart_icon(
    State(state): State<AppState>,
    Path((namespace, repo, chart_name)): Path<(String, String, String)>,
) -> ApiResult<Response> {
    let chart_id = Chart::chart_id(&repo, &chart_name);
    let icon = state
        .services
        .assets()
        .icon(&namespace, &chart_id)
        .await
        .map_err(ApiError::from)?;

    Ok(raw_body(icon.content_type, icon.bytes))
}

/// Serve a chart version's README
#[instrument(skip(state))]
pub async fn get_chart_readme(
    State(state): State<AppState>,
    Path((namespace, repo, chart_name, version)): Path<(String, String, String, String)>,
) -> ApiResult<Response> {
    let files_id = ChartFiles::files_id(&Chart::chart_id(&repo, &chart_name), &version);
    let readme = state
        .services
        .assets()
        .readme(&namespace, &files_id)
        .await
        .map_err(ApiError::from)?;

    Ok(raw_body("text/markdown", readme.into_bytes()))
}

/// Serve a named values file for a chart version
///
/// An existing bundle with no matching values file yields an empty 200
/// body.
#[instrument(skip(state))]
pub async fn get_chart_values(
    State(state): State<AppState>,
    Path((namespace, repo, chart_name, version, values_name)): Path<(
        String,
        String,
        String,
        String,
        String,
    )>,
) -> ApiResult<Response> {
    let files_id = ChartFiles::files_id(&Chart::chart_id(&repo, &chart_name), &version);
    let values = state
        .services
        .assets()
        .values(&namespace, &files_id, &values_name)
        .await
        .map_err(ApiError::from)?;

    Ok(raw_body("application/x-yaml", values.into_bytes()))
}

/// Serve the values schema for a chart version, verbatim
#[instrument(skip(state))]
pub async fn get_chart_schema(
    State(state): State<AppState>,
    Path((namespace, repo, chart_name, version)): Path<(String, String, String, String)>,
) -> ApiResult<Response> {
    let files_id = ChartFiles::files_id(&Chart::chart_id(&repo, &chart_name), &version);
    let schema = state
        .services
        .assets()
        .schema(&namespace, &files_id)
        .await
        .map_err(ApiError::from)?;

    Ok(raw_body("application/json", schema.into_bytes()))
}

fn raw_body(content_type: impl AsRef<str>, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type.as_ref().to_string())],
        bytes,
    )
        .into_response()
}

// ============================================================================
// Probe Handlers
// ============================================================================

/// Liveness probe
#[instrument]
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe
#[instrument]
pub async fn ready() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_number_parsing() {
        assert_eq!(parse_number(Some("3")), Some(3));
        assert_eq!(parse_number(Some("0")), None);
        assert_eq!(parse_number(Some("-2")), None);
        assert_eq!(parse_number(Some("foo")), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn test_filters_require_all_three_params() {
        let mut params = ListParams {
            name: Some("wordpress".to_string()),
            version: Some("1.0.0".to_string()),
            ..Default::default()
        };
        assert!(params.filters().is_none());

        params.appversion = Some("5.0".to_string());
        assert!(params.filters().is_some());
    }

    #[test]
    fn test_show_duplicates_set_when_non_empty() {
        let mut params = ListParams::default();
        assert!(!params.show_duplicates());

        params.show_duplicates = Some(String::new());
        assert!(!params.show_duplicates());

        params.show_duplicates = Some("true".to_string());
        assert!(params.show_duplicates());
    }
}
