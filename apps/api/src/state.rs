use std::sync::Arc;

use crate::catalog::products::Catalog;
use crate::style::classifier::VibeClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable vibe classifier. Default: GeminiVibeClassifier.
    pub classifier: Arc<dyn VibeClassifier>,
    /// Read-only product catalog, built once at startup.
    pub catalog: Arc<Catalog>,
}
