//! Kohalabel Label Printing Server
//!
//! A small internal service that reads an externally owned Koha catalog
//! (bibliographic records, branches, items) and produces printable barcode
//! and spine label records over a REST JSON API. The catalog is never
//! written to; the service's own database holds only application tables.

use std::sync::Arc;

pub mod api;
pub mod barcode;
pub mod callnumber;
pub mod config;
pub mod error;
pub mod marc;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
