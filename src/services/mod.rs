//! Business logic services

pub mod labels;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub labels: labels::LabelService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            labels: labels::LabelService::new(repository),
        }
    }
}
