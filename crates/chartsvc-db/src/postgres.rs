//! PostgreSQL implementation of the chart repositories.
//!
//! The ingestion pipeline writes each entity as a JSONB document:
//! `charts(repo_namespace, chart_id, info)` and
//! `files(repo_namespace, chart_files_id, info)`. Reads here decode the
//! `info` payload into the core models.

use async_trait::async_trait;
use chartsvc_core::{Chart, ChartFiles};
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::{DbError, DbResult};
use crate::query::ChartQuery;
use crate::repository::{ChartFilesRepository, ChartRepository};

/// PostgreSQL implementation of ChartRepository
#[derive(Debug, Clone)]
pub struct PostgresChartRepository {
    pool: PgPool,
}

impl PostgresChartRepository {
    /// Create a new PostgreSQL chart repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Build the WHERE clause shared by list and count.
///
/// Returns the SQL fragment; placeholders are numbered `$1` (namespace)
/// onwards in the order namespace, repo, name.
fn chart_filter_sql(query: &ChartQuery) -> String {
    let mut sql = String::from("WHERE repo_namespace = $1");
    let mut placeholder = 2;
    if query.repo.is_some() {
        sql.push_str(&format!(" AND info->'repo'->>'name' = ${}", placeholder));
        placeholder += 1;
    }
    if query.name.is_some() {
        sql.push_str(&format!(" AND info->>'name' = ${}", placeholder));
    }
    sql
}

#[async_trait]
impl ChartRepository for PostgresChartRepository {
    #[instrument(skip(self))]
    async fn get(&self, namespace: &str, chart_id: &str) -> DbResult<Chart> {
        debug!("Fetching chart document");

        let info: JsonValue = sqlx::query_scalar::<_, JsonValue>(
            "SELECT info FROM charts WHERE repo_namespace = $1 AND chart_id = $2",
        )
        .bind(namespace)
        .bind(chart_id)
        .fetch_one(&self.pool)
        .await?;

        serde_json::from_value(info).map_err(DbError::from)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ChartQuery) -> DbResult<Vec<Chart>> {
        debug!("Listing chart documents");

        let mut sql = format!(
            "SELECT info FROM charts {} ORDER BY info->>'name' ASC",
            chart_filter_sql(query)
        );
        if let Some(pagination) = &query.pagination {
            sql.push_str(&format!(
                " LIMIT {} OFFSET {}",
                pagination.size,
                pagination.offset()
            ));
        }

        let mut q = sqlx::query_scalar::<sqlx::Postgres, JsonValue>(&sql).bind(&query.namespace);
        if let Some(repo) = &query.repo {
            q = q.bind(repo);
        }
        if let Some(name) = &query.name {
            q = q.bind(name);
        }

        let rows = q.fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|info| serde_json::from_value(info).map_err(DbError::from))
            .collect()
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &ChartQuery) -> DbResult<i64> {
        debug!("Counting chart documents");

        let sql = format!("SELECT count(*) FROM charts {}", chart_filter_sql(query));

        let mut q = sqlx::query_scalar::<sqlx::Postgres, i64>(&sql).bind(&query.namespace);
        if let Some(repo) = &query.repo {
            q = q.bind(repo);
        }
        if let Some(name) = &query.name {
            q = q.bind(name);
        }

        q.fetch_one(&self.pool).await.map_err(DbError::from)
    }
}

/// PostgreSQL implementation of ChartFilesRepository
#[derive(Debug, Clone)]
pub struct PostgresChartFilesRepository {
    pool: PgPool,
}

impl PostgresChartFilesRepository {
    /// Create a new PostgreSQL chart-files repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChartFilesRepository for PostgresChartFilesRepository {
    #[instrument(skip(self))]
    async fn get(&self, namespace: &str, files_id: &str) -> DbResult<ChartFiles> {
        debug!("Fetching chart files document");

        let info: JsonValue = sqlx::query_scalar::<_, JsonValue>(
            "SELECT info FROM files WHERE repo_namespace = $1 AND chart_files_id = $2",
        )
        .bind(namespace)
        .bind(files_id)
        .fetch_one(&self.pool)
        .await?;

        serde_json::from_value(info).map_err(DbError::from)
    }
}
