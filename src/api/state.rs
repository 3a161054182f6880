use std::sync::Arc;

use crate::services::providers::{MovieCatalog, RecommendationModel};

/// Shared application state
///
/// Holds the two injected provider handles. Both are read-only after startup;
/// per-request data never lives here.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn MovieCatalog>,
    pub model: Arc<dyn RecommendationModel>,
}

impl AppState {
    /// Creates application state around the given providers
    pub fn new(catalog: Arc<dyn MovieCatalog>, model: Arc<dyn RecommendationModel>) -> Self {
        Self { catalog, model }
    }
}
