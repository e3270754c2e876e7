use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::render::render_resume_html;
use crate::state::AppState;

/// GET /api/v1/preview
pub async fn handle_preview(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let session = state.session.lock().await;
    Ok(Html(render_resume_html(session.document(), session.preferences())?))
}
