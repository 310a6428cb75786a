use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::retrieval::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both capabilities are built once by `main` and shared read-only across
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Knowledge-base search. Default: `PgVectorStore`.
    pub store: Arc<dyn DocumentStore>,
    /// Tag generation. Default: the OpenAI-backed `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
