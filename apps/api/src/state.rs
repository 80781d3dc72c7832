use crate::config::Config;
use crate::generation::service::ContentGenerationService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request or per-user data; every request carries its full input.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generation: ContentGenerationService,
}
