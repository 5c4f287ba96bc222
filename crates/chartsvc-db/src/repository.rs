//! Typed repository traits over the chart document store.
//!
//! These replace a decode-into-arbitrary-pointer document interface with
//! one trait per entity returning typed results or a `DbError`.
//! Implementations must be thread-safe (Send + Sync) for use in async
//! contexts, and every method performs exactly one store round-trip.

use async_trait::async_trait;
use chartsvc_core::{Chart, ChartFiles};

use crate::error::DbResult;
use crate::query::ChartQuery;

/// Repository for chart metadata documents.
#[async_trait]
pub trait ChartRepository: Send + Sync {
    /// Fetch one chart by namespace and composite `repo/name` ID.
    ///
    /// # Returns
    /// * `Ok(Chart)` - The chart if found
    /// * `Err(DbError::NotFound)` - If no such chart exists
    /// * `Err(DbError)` - For other store errors
    async fn get(&self, namespace: &str, chart_id: &str) -> DbResult<Chart>;

    /// List charts matching the query, ordered by chart name. When the
    /// query carries a pagination window, only that window is returned.
    async fn list(&self, query: &ChartQuery) -> DbResult<Vec<Chart>>;

    /// Count charts matching the query, ignoring any pagination window.
    async fn count(&self, query: &ChartQuery) -> DbResult<i64>;
}

/// Repository for per-version chart file bundles.
#[async_trait]
pub trait ChartFilesRepository: Send + Sync {
    /// Fetch the file bundle for one chart version by namespace and
    /// composite `<chartID>-<version>` ID.
    ///
    /// # Returns
    /// * `Ok(ChartFiles)` - The bundle if found
    /// * `Err(DbError::NotFound)` - If no such bundle exists
    /// * `Err(DbError)` - For other store errors
    async fn get(&self, namespace: &str, files_id: &str) -> DbResult<ChartFiles>;
}
