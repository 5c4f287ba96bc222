//! In-memory store implementation.
//!
//! Implements both repository traits over a process-local map with the same
//! ordering and pagination behavior as the PostgreSQL backend. Used by unit
//! and integration tests; no production code path constructs it.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chartsvc_core::{Chart, ChartFiles};

use crate::error::{DbError, DbResult};
use crate::query::ChartQuery;
use crate::repository::{ChartFilesRepository, ChartRepository};

#[derive(Debug, Default)]
struct MemInner {
    /// Charts keyed by (namespace, chart_id)
    charts: BTreeMap<(String, String), Chart>,

    /// File bundles keyed by (namespace, files_id)
    files: BTreeMap<(String, String), ChartFiles>,
}

/// In-memory chart document store.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    inner: Arc<RwLock<MemInner>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chart under its repository's namespace.
    pub fn insert_chart(&self, chart: Chart) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner
            .charts
            .insert((chart.repo.namespace.clone(), chart.id.clone()), chart);
    }

    /// Insert a file bundle under a namespace.
    pub fn insert_files(&self, namespace: &str, files: ChartFiles) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner
            .files
            .insert((namespace.to_string(), files.id.clone()), files);
    }

    /// Remove everything.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.charts.clear();
        inner.files.clear();
    }

    fn matching_charts(&self, query: &ChartQuery) -> Vec<Chart> {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut charts: Vec<Chart> = inner
            .charts
            .iter()
            .filter(|((namespace, _), chart)| {
                *namespace == query.namespace
                    && query
                        .repo
                        .as_ref()
                        .map_or(true, |repo| chart.repo.name == *repo)
                    && query.name.as_ref().map_or(true, |name| chart.name == *name)
            })
            .map(|(_, chart)| chart.clone())
            .collect();
        charts.sort_by(|a, b| a.name.cmp(&b.name));
        charts
    }
}

#[async_trait]
impl ChartRepository for MemStore {
    async fn get(&self, namespace: &str, chart_id: &str) -> DbResult<Chart> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .charts
            .get(&(namespace.to_string(), chart_id.to_string()))
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("{}/{}", namespace, chart_id)))
    }

    async fn list(&self, query: &ChartQuery) -> DbResult<Vec<Chart>> {
        let charts = self.matching_charts(query);
        match &query.pagination {
            Some(pagination) => {
                let start = (pagination.offset() as usize).min(charts.len());
                let end = (start + pagination.size as usize).min(charts.len());
                Ok(charts[start..end].to_vec())
            }
            None => Ok(charts),
        }
    }

    async fn count(&self, query: &ChartQuery) -> DbResult<i64> {
        Ok(self.matching_charts(query).len() as i64)
    }
}

#[async_trait]
impl ChartFilesRepository for MemStore {
    async fn get(&self, namespace: &str, files_id: &str) -> DbResult<ChartFiles> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .files
            .get(&(namespace.to_string(), files_id.to_string()))
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("{}/{}", namespace, files_id)))
    }
}
