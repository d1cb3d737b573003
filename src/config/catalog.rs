//! Lead catalog configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Catalog configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON dataset file. When absent, the seed dataset
    /// embedded in the binary is used.
    pub dataset_path: Option<String>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.dataset_path {
            if path.trim().is_empty() {
                return Err(ValidationError::EmptyDatasetPath);
            }
        }
        Ok(())
    }
}
