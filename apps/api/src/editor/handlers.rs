use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::editor::fields::FieldPath;
use crate::editor::session::SessionSnapshot;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::preferences::Preferences;
use crate::models::resume::{ListKind, SkillCategory};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub path: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesUpdate {
    pub template: Option<String>,
    pub accent: Option<String>,
}

#[derive(Serialize)]
pub struct EntryAdded {
    pub index: usize,
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
}

fn list_kind(raw: &str) -> Result<ListKind, AppError> {
    ListKind::parse(raw).ok_or_else(|| AppError::NotFound(format!("Unknown list '{raw}'")))
}

fn skill_category(raw: &str) -> Result<SkillCategory, AppError> {
    SkillCategory::parse(raw)
        .ok_or_else(|| AppError::NotFound(format!("Unknown skill category '{raw}'")))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}

/// PUT /api/v1/resume
pub async fn handle_import(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    let score = session.import(&body).await;
    Json(session.snapshot_with(score))
}

/// DELETE /api/v1/resume
pub async fn handle_reset(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    let score = session.reset().await;
    Json(session.snapshot_with(score))
}

/// POST /api/v1/resume/sample
pub async fn handle_load_sample(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    let score = session.load_sample().await;
    Json(session.snapshot_with(score))
}

/// PATCH /api/v1/resume/fields
pub async fn handle_update_field(
    State(state): State<AppState>,
    AppJson(req): AppJson<FieldUpdate>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let path: FieldPath = req.path.parse()?;
    let mut session = state.session.lock().await;
    let score = session.update_field(&path, &req.value).await?;
    Ok(Json(session.snapshot_with(score)))
}

/// POST /api/v1/resume/:kind
pub async fn handle_add_entry(
    State(state): State<AppState>,
    AppPath(kind): AppPath<String>,
) -> Result<Json<EntryAdded>, AppError> {
    let kind = list_kind(&kind)?;
    let mut session = state.session.lock().await;
    let (index, score) = session.add_list_entry(kind).await;
    Ok(Json(EntryAdded {
        index,
        snapshot: session.snapshot_with(score),
    }))
}

/// DELETE /api/v1/resume/:kind/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    AppPath((kind, index)): AppPath<(String, usize)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let kind = list_kind(&kind)?;
    let mut session = state.session.lock().await;
    let score = session.remove_list_entry(kind, index).await?;
    Ok(Json(session.snapshot_with(score)))
}

/// POST /api/v1/resume/skills/:category
pub async fn handle_add_skill(
    State(state): State<AppState>,
    AppPath(category): AppPath<String>,
    AppJson(req): AppJson<SkillRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let category = skill_category(&category)?;
    let mut session = state.session.lock().await;
    let score = session.add_skill(category, &req.name).await;
    Ok(Json(session.snapshot_with(score)))
}

/// DELETE /api/v1/resume/skills/:category/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    AppPath((category, index)): AppPath<(String, usize)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let category = skill_category(&category)?;
    let mut session = state.session.lock().await;
    let score = session.remove_skill(category, index).await?;
    Ok(Json(session.snapshot_with(score)))
}

/// PUT /api/v1/preferences
pub async fn handle_set_preferences(
    State(state): State<AppState>,
    AppJson(req): AppJson<PreferencesUpdate>,
) -> Result<Json<Preferences>, AppError> {
    let mut session = state.session.lock().await;
    let prefs = session
        .set_preferences(req.template.as_deref(), req.accent.as_deref())
        .await?;
    Ok(Json(prefs))
}
