use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::editor::session::EditorSession;
use crate::scoring::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single editing session. Handlers hold the lock across the whole
    /// mutate -> persist -> rescore step.
    pub session: Arc<Mutex<EditorSession>>,
    /// Pluggable scorer. Default: RuleBasedScorer over the canonical rules.
    pub scorer: Arc<dyn ResumeScorer>,
    pub config: Config,
}
