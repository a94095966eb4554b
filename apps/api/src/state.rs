use crate::generation::generator::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the provider behind `Arc<dyn TextCompletion>`; cheap to clone per request.
    pub generator: ContentGenerator,
}
