use axum::{extract::State, Json};

use crate::presentation::{compact_view, detailed_view, CompactView, DetailedView};
use crate::scoring::guidance::{document_guidance, DocumentGuidance};
use crate::scoring::rules::RuleInfo;
use crate::scoring::ScoreResult;
use crate::state::AppState;

/// GET /api/v1/score
pub async fn handle_score(State(state): State<AppState>) -> Json<ScoreResult> {
    Json(state.session.lock().await.score())
}

/// GET /api/v1/score/compact
pub async fn handle_score_compact(State(state): State<AppState>) -> Json<CompactView> {
    let result = state.session.lock().await.score();
    Json(compact_view(&result))
}

/// GET /api/v1/score/detailed
pub async fn handle_score_detailed(State(state): State<AppState>) -> Json<DetailedView> {
    let result = state.session.lock().await.score();
    Json(detailed_view(&result))
}

/// GET /api/v1/score/rules
pub async fn handle_rules(State(state): State<AppState>) -> Json<Vec<RuleInfo>> {
    Json(state.scorer.rules())
}

/// GET /api/v1/resume/guidance
pub async fn handle_guidance(State(state): State<AppState>) -> Json<DocumentGuidance> {
    let session = state.session.lock().await;
    Json(document_guidance(session.document()))
}
