//! Service layer for the chart catalog
//!
//! This crate sits between the HTTP layer and the document store. The
//! catalog is read-only; the two services here cover its operations:
//!
//! - **CatalogService**: chart listing, filtering, and version lookups
//! - **AssetService**: icon, README, values, and schema retrieval
//!
//! # Example
//!
//! ```rust,no_run
//! use chartsvc_service::ServiceRegistry;
//! use std::sync::Arc;
//!
//! # fn example(
//! #     charts: Arc<dyn chartsvc_db::ChartRepository>,
//! #     files: Arc<dyn chartsvc_db::ChartFilesRepository>,
//! # ) {
//! let services = ServiceRegistry::new(charts, files);
//! # }
//! ```

pub mod assets;
pub mod catalog;
pub mod dto;
pub mod error;

pub use dto::*;
pub use error::{ServiceError, ServiceResult};

pub use assets::{AssetService, DefaultAssetService, IconAsset};
pub use catalog::{CatalogService, DefaultCatalogService};

use chartsvc_db::{ChartFilesRepository, ChartRepository};
use std::sync::Arc;

/// Service registry that holds all service instances
///
/// One registry is built at startup and shared with every handler.
#[derive(Clone)]
pub struct ServiceRegistry {
    /// Catalog service
    pub catalog: Arc<dyn CatalogService>,
    /// Asset service
    pub assets: Arc<dyn AssetService>,
}

impl ServiceRegistry {
    /// Create a new service registry with default implementations
    pub fn new(
        charts: Arc<dyn ChartRepository>,
        files: Arc<dyn ChartFilesRepository>,
    ) -> Self {
        let catalog = Arc::new(DefaultCatalogService::new(charts.clone(), files.clone()));
        let assets = Arc::new(DefaultAssetService::new(charts, files));

        Self { catalog, assets }
    }

    /// Get the catalog service
    pub fn catalog(&self) -> &Arc<dyn CatalogService> {
        &self.catalog
    }

    /// Get the asset service
    pub fn assets(&self) -> &Arc<dyn AssetService> {
        &self.assets
    }
}
