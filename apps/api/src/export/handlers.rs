use axum::{extract::State, http::header, response::IntoResponse, Json};

use crate::export::readiness::{check_export_readiness, ExportReadiness};
use crate::export::text::to_plain_text;
use crate::state::AppState;

/// GET /api/v1/export/text
pub async fn handle_export_text(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.lock().await;
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        to_plain_text(session.document()),
    )
}

/// GET /api/v1/export/check
pub async fn handle_export_check(State(state): State<AppState>) -> Json<ExportReadiness> {
    let session = state.session.lock().await;
    Json(check_export_readiness(session.document()))
}
