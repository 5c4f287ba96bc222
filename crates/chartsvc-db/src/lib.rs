//! Store adapter for the chart catalog service.
//!
//! This crate provides read-only access to the chart document store:
//! - Typed repository traits for charts and chart file bundles
//! - A query builder with namespace scoping and pagination
//! - A PostgreSQL implementation storing entities as JSONB documents
//! - An in-memory implementation used by tests
//! - Connection pool management
//!
//! The store is populated and migrated by the external ingestion pipeline;
//! nothing in this crate writes to it.
//!
//! # Example
//!
//! ```rust,no_run
//! use chartsvc_db::{create_pool, ChartQuery, ChartRepository, PoolConfig, PostgresChartRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PoolConfig::new("postgres://localhost/charts").max_connections(10);
//! let pool = create_pool(&config).await?;
//!
//! let repo = PostgresChartRepository::new(pool);
//! let charts = repo.list(&ChartQuery::new("default")).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mem;
pub mod pool;
pub mod postgres;
pub mod query;
pub mod repository;

// Re-export main types for convenience
pub use error::{DbError, DbResult};
pub use mem::MemStore;
pub use pool::{create_pool, PoolConfig};
pub use postgres::{PostgresChartFilesRepository, PostgresChartRepository};
pub use query::{ChartQuery, Pagination};
pub use repository::{ChartFilesRepository, ChartRepository};
