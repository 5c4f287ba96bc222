//! Asset service
//!
//! Serves the per-chart binary and text assets: icon bytes, README,
//! values files, and the values schema. Each operation performs exactly
//! one store lookup; the distinction between a missing document and a
//! present-but-empty field is what decides the HTTP status upstream.

use std::sync::Arc;

use async_trait::async_trait;
use chartsvc_db::{ChartFilesRepository, ChartRepository};
use tracing::instrument;

use crate::error::{ServiceError, ServiceResult};

/// Fallback when the ingestion pipeline recorded no content type
const DEFAULT_ICON_CONTENT_TYPE: &str = "image/png";

/// Icon bytes together with their content type
#[derive(Debug, Clone)]
pub struct IconAsset {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Trait for chart asset retrieval
#[async_trait]
pub trait AssetService: Send + Sync {
    /// Get a chart's icon; missing when the chart has no icon bytes
    async fn icon(&self, namespace: &str, chart_id: &str) -> ServiceResult<IconAsset>;

    /// Get the README for a chart version; missing when empty
    async fn readme(&self, namespace: &str, files_id: &str) -> ServiceResult<String>;

    /// Get a named values file for a chart version
    ///
    /// Returns an empty string when the bundle exists but carries no
    /// matching values file.
    async fn values(&self, namespace: &str, files_id: &str, filename: &str)
        -> ServiceResult<String>;

    /// Get the values schema for a chart version, verbatim
    ///
    /// Returns an empty string when the bundle exists but has no schema.
    async fn schema(&self, namespace: &str, files_id: &str) -> ServiceResult<String>;
}

/// Default implementation of AssetService
pub struct DefaultAssetService {
    charts: Arc<dyn ChartRepository>,
    files: Arc<dyn ChartFilesRepository>,
}

impl DefaultAssetService {
    /// Create a new asset service
    pub fn new(charts: Arc<dyn ChartRepository>, files: Arc<dyn ChartFilesRepository>) -> Self {
        Self { charts, files }
    }
}

#[async_trait]
impl AssetService for DefaultAssetService {
    #[instrument(skip(self))]
    async fn icon(&self, namespace: &str, chart_id: &str) -> ServiceResult<IconAsset> {
        let chart = self.charts.get(namespace, chart_id).await?;
        if !chart.has_icon() {
            return Err(ServiceError::NotFound(format!("icon for {}", chart_id)));
        }

        let content_type = if chart.icon_content_type.is_empty() {
            DEFAULT_ICON_CONTENT_TYPE.to_string()
        } else {
            chart.icon_content_type
        };

        Ok(IconAsset {
            bytes: chart.raw_icon,
            content_type,
        })
    }

    #[instrument(skip(self))]
    async fn readme(&self, namespace: &str, files_id: &str) -> ServiceResult<String> {
        let files = self.files.get(namespace, files_id).await?;
        if files.readme.is_empty() {
            return Err(ServiceError::NotFound(format!("readme for {}", files_id)));
        }
        Ok(files.readme)
    }

    #[instrument(skip(self))]
    async fn values(
        &self,
        namespace: &str,
        files_id: &str,
        filename: &str,
    ) -> ServiceResult<String> {
        let files = self.files.get(namespace, files_id).await?;
        Ok(files.values_for(filename).unwrap_or_default().to_string())
    }

    #[instrument(skip(self))]
    async fn schema(&self, namespace: &str, files_id: &str) -> ServiceResult<String> {
        let files = self.files.get(namespace, files_id).await?;
        Ok(files.schema)
    }
}
