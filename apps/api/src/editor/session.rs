//! The editing session: sole owner of the resume document.
//!
//! Every mutation runs persist -> rescore before returning. A failed save is
//! logged and does not roll back the in-memory change; the next successful
//! save carries it.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::editor::fields::FieldPath;
use crate::editor::migration::{parse_persisted, upgrade};
use crate::editor::sample::sample_resume;
use crate::errors::AppError;
use crate::models::preferences::{Preferences, Template};
use crate::models::resume::{ListKind, ResumeDocument, SkillCategory};
use crate::scoring::{ResumeScorer, ScoreResult};
use crate::store::{KeyValueStore, ACCENT_KEY, DOCUMENT_KEY, TEMPLATE_KEY};

const MAX_ACCENT_LEN: usize = 32;

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub document: ResumeDocument,
    pub preferences: Preferences,
    pub score: ScoreResult,
}

pub struct EditorSession {
    document: ResumeDocument,
    preferences: Preferences,
    store: Arc<dyn KeyValueStore>,
    scorer: Arc<dyn ResumeScorer>,
}

impl EditorSession {
    /// Empty session, nothing read from the store.
    pub fn new(store: Arc<dyn KeyValueStore>, scorer: Arc<dyn ResumeScorer>) -> Self {
        Self {
            document: ResumeDocument::default(),
            preferences: Preferences::default(),
            store,
            scorer,
        }
    }

    /// Hydrates a session from the store. Missing, unreadable or malformed
    /// state falls back to defaults.
    pub async fn load(store: Arc<dyn KeyValueStore>, scorer: Arc<dyn ResumeScorer>) -> Self {
        let mut session = Self::new(store, scorer);

        match session.store.get(DOCUMENT_KEY).await {
            Ok(Some(raw)) => {
                session.document = parse_persisted(&raw);
                info!("Loaded persisted resume");
            }
            Ok(None) => info!("No persisted resume found; starting empty"),
            Err(e) => warn!("Could not read persisted resume, starting empty: {e}"),
        }

        match session.store.get(TEMPLATE_KEY).await {
            Ok(Some(raw)) => match Template::parse(&raw) {
                Some(template) => session.preferences.template = template,
                None => warn!("Unknown stored template '{raw}', using default"),
            },
            Ok(None) => {}
            Err(e) => warn!("Could not read template preference: {e}"),
        }

        match session.store.get(ACCENT_KEY).await {
            Ok(Some(raw)) => match validate_accent(&raw) {
                Ok(accent) => session.preferences.accent = accent,
                Err(_) => warn!("Ignoring invalid stored accent '{raw}'"),
            },
            Ok(None) => {}
            Err(e) => warn!("Could not read accent preference: {e}"),
        }

        session
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn score(&self) -> ScoreResult {
        self.scorer.score(&self.document)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_with(self.score())
    }

    /// Snapshot around a score the caller already holds from a mutation.
    pub fn snapshot_with(&self, score: ScoreResult) -> SessionSnapshot {
        SessionSnapshot {
            document: self.document.clone(),
            preferences: self.preferences.clone(),
            score,
        }
    }

    pub async fn update_field(
        &mut self,
        path: &FieldPath,
        value: &str,
    ) -> Result<ScoreResult, AppError> {
        path.apply(&mut self.document, value)?;
        debug!("Updated field {path}");
        Ok(self.commit().await)
    }

    /// Appends an empty entry; returns its index with the new score.
    pub async fn add_list_entry(&mut self, kind: ListKind) -> (usize, ScoreResult) {
        let index = self.document.add_entry(kind);
        debug!("Added {} entry at {index}", kind.as_str());
        (index, self.commit().await)
    }

    pub async fn remove_list_entry(
        &mut self,
        kind: ListKind,
        index: usize,
    ) -> Result<ScoreResult, AppError> {
        if !self.document.remove_entry(kind, index) {
            return Err(AppError::NotFound(format!(
                "No {} entry at index {index}",
                kind.as_str()
            )));
        }
        debug!("Removed {} entry at {index}", kind.as_str());
        Ok(self.commit().await)
    }

    /// Duplicate and empty names are accepted and ignored.
    pub async fn add_skill(&mut self, category: SkillCategory, name: &str) -> ScoreResult {
        if !self.document.skills.add(category, name) {
            debug!("Skill '{name}' not added to {} (empty or duplicate)", category.as_str());
        }
        self.commit().await
    }

    pub async fn remove_skill(
        &mut self,
        category: SkillCategory,
        index: usize,
    ) -> Result<ScoreResult, AppError> {
        self.document
            .skills
            .remove(category, index)
            .ok_or_else(|| {
                AppError::NotFound(format!("No {} skill at index {index}", category.as_str()))
            })?;
        Ok(self.commit().await)
    }

    pub async fn load_sample(&mut self) -> ScoreResult {
        self.document = sample_resume();
        info!("Loaded sample resume");
        self.commit().await
    }

    /// Replaces the document with an imported one, upgrading legacy shapes.
    pub async fn import(&mut self, value: &serde_json::Value) -> ScoreResult {
        self.document = upgrade(value);
        info!("Imported resume document");
        self.commit().await
    }

    /// Clears the document and drops the persisted copy, so the next load
    /// starts empty.
    pub async fn reset(&mut self) -> ScoreResult {
        self.document = ResumeDocument::default();
        if let Err(e) = self.store.delete(DOCUMENT_KEY).await {
            error!("Failed to clear persisted resume: {e}");
        }
        info!("Reset resume to empty document");
        let result = self.score();
        debug!("Rescored resume: {}", result.score);
        result
    }

    /// Updates presentation preferences. The score is unaffected.
    pub async fn set_preferences(
        &mut self,
        template: Option<&str>,
        accent: Option<&str>,
    ) -> Result<Preferences, AppError> {
        let template = template
            .map(|raw| {
                Template::parse(raw)
                    .ok_or_else(|| AppError::Validation(format!("Unknown template '{raw}'")))
            })
            .transpose()?;
        let accent = accent.map(validate_accent).transpose()?;

        if let Some(template) = template {
            self.preferences.template = template;
            if let Err(e) = self.store.set(TEMPLATE_KEY, template.as_str()).await {
                error!("Failed to persist template preference: {e}");
            }
        }
        if let Some(accent) = accent {
            if let Err(e) = self.store.set(ACCENT_KEY, &accent).await {
                error!("Failed to persist accent preference: {e}");
            }
            self.preferences.accent = accent;
        }
        Ok(self.preferences.clone())
    }

    async fn commit(&mut self) -> ScoreResult {
        if let Err(e) = self.persist().await {
            error!("Failed to persist resume: {e}");
        }
        let result = self.score();
        debug!("Rescored resume: {}", result.score);
        result
    }

    async fn persist(&self) -> Result<(), AppError> {
        let raw = serde_json::to_string(&self.document)?;
        self.store.set(DOCUMENT_KEY, &raw).await
    }
}

/// Accepts hex, named and functional CSS colors; rejects anything that could
/// break out of a style attribute.
fn validate_accent(raw: &str) -> Result<String, AppError> {
    let accent = raw.trim();
    let allowed = |c: char| c.is_ascii_alphanumeric() || "#(),.% ".contains(c);
    if accent.is_empty() || accent.len() > MAX_ACCENT_LEN || !accent.chars().all(allowed) {
        return Err(AppError::Validation(format!("Invalid accent color '{raw}'")));
    }
    Ok(accent.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ProjectEntry;
    use crate::scoring::RuleBasedScorer;
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    fn stores() -> (Arc<MemoryStore>, Arc<dyn ResumeScorer>) {
        (
            Arc::new(MemoryStore::default()),
            Arc::new(RuleBasedScorer::default()),
        )
    }

    async fn stored_document(store: &MemoryStore) -> ResumeDocument {
        let raw = store.get(DOCUMENT_KEY).await.unwrap().expect("document persisted");
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let (store, scorer) = stores();
        let session = EditorSession::load(store, scorer).await;
        assert_eq!(session.document(), &ResumeDocument::default());
        assert_eq!(session.score().score, 0);
        assert_eq!(session.preferences(), &Preferences::default());
    }

    #[tokio::test]
    async fn test_load_migrates_legacy_and_saves_upgraded_shape() {
        let (store, scorer) = stores();
        store
            .set(DOCUMENT_KEY, r#"{"skills":"React, Node, Git","projects":[{"title":"T"}]}"#)
            .await
            .unwrap();
        let mut session = EditorSession::load(store.clone(), scorer).await;
        assert_eq!(session.document().skills.technical, vec!["React", "Node", "Git"]);

        session.add_skill(SkillCategory::Soft, "Mentoring").await;
        let raw = store.get(DOCUMENT_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["skills"].is_object());
        assert_eq!(value["projects"][0]["techStack"], serde_json::json!([]));
        assert_eq!(value["projects"][0]["liveUrl"], "");
    }

    #[tokio::test]
    async fn test_load_malformed_document_starts_empty() {
        let (store, scorer) = stores();
        store.set(DOCUMENT_KEY, "{{{").await.unwrap();
        let session = EditorSession::load(store, scorer).await;
        assert_eq!(session.document(), &ResumeDocument::default());
    }

    #[tokio::test]
    async fn test_load_preferences() {
        let (store, scorer) = stores();
        store.set(TEMPLATE_KEY, "minimal").await.unwrap();
        store.set(ACCENT_KEY, "#123456").await.unwrap();
        let session = EditorSession::load(store, scorer).await;
        assert_eq!(session.preferences().template, Template::Minimal);
        assert_eq!(session.preferences().accent, "#123456");
    }

    #[tokio::test]
    async fn test_load_ignores_bad_preferences() {
        let (store, scorer) = stores();
        store.set(TEMPLATE_KEY, "baroque").await.unwrap();
        store.set(ACCENT_KEY, "red;}</style>").await.unwrap();
        let session = EditorSession::load(store, scorer).await;
        assert_eq!(session.preferences(), &Preferences::default());
    }

    #[tokio::test]
    async fn test_update_field_persists_and_rescores() {
        let (store, scorer) = stores();
        let mut session = EditorSession::load(store.clone(), scorer).await;
        let result = session
            .update_field(&"personal.name".parse().unwrap(), "A")
            .await
            .unwrap();
        assert_eq!(result.score, 10);
        assert_eq!(stored_document(&store).await.personal.name, "A");
    }

    #[tokio::test]
    async fn test_update_missing_entry_is_not_found() {
        let (store, scorer) = stores();
        let mut session = EditorSession::load(store.clone(), scorer).await;
        let err = session
            .update_field(&"experience.0.desc".parse().unwrap(), "x")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.get(DOCUMENT_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_and_remove_entries() {
        let (store, scorer) = stores();
        let mut session = EditorSession::load(store.clone(), scorer).await;
        let (index, result) = session.add_list_entry(ListKind::Projects).await;
        assert_eq!(index, 0);
        assert_eq!(result.score, 10);
        assert_eq!(stored_document(&store).await.projects, vec![ProjectEntry::default()]);

        assert!(matches!(
            session.remove_list_entry(ListKind::Projects, 5).await,
            Err(AppError::NotFound(_))
        ));
        let result = session.remove_list_entry(ListKind::Projects, 0).await.unwrap();
        assert_eq!(result.score, 0);
        assert!(stored_document(&store).await.projects.is_empty());
    }

    #[tokio::test]
    async fn test_skills_add_remove() {
        let (store, scorer) = stores();
        let mut session = EditorSession::load(store, scorer).await;
        for name in ["Rust", "Go", "Rust", "  ", "SQL", "Docker", "Git"] {
            session.add_skill(SkillCategory::Technical, name).await;
        }
        assert_eq!(session.document().skills.technical.len(), 5);
        assert_eq!(session.score().score, 10);

        let result = session.remove_skill(SkillCategory::Technical, 0).await.unwrap();
        assert_eq!(result.score, 0);
        assert!(matches!(
            session.remove_skill(SkillCategory::Tools, 0).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_sample_import_reset() {
        let (store, scorer) = stores();
        let mut session = EditorSession::load(store.clone(), scorer).await;
        assert_eq!(session.load_sample().await.score, 100);
        assert_eq!(stored_document(&store).await, sample_resume());

        let result = session
            .import(&serde_json::json!({ "personal": { "name": "A", "email": "a@b.com" } }))
            .await;
        assert_eq!(result.score, 20);

        assert_eq!(session.reset().await.suggestions.len(), 11);
        assert_eq!(session.document(), &ResumeDocument::default());
        assert_eq!(store.get(DOCUMENT_KEY).await.unwrap(), None);

        let reloaded = EditorSession::load(store, Arc::new(RuleBasedScorer::default())).await;
        assert_eq!(reloaded.document(), &ResumeDocument::default());
    }

    #[tokio::test]
    async fn test_snapshot_with_reuses_mutation_score() {
        let (store, scorer) = stores();
        let mut session = EditorSession::load(store, scorer).await;
        let result = session.load_sample().await;
        let snapshot = session.snapshot_with(result.clone());
        assert_eq!(snapshot.score, result);
        assert_eq!(snapshot.score, session.snapshot().score);
        assert_eq!(snapshot.document, sample_resume());
    }

    #[tokio::test]
    async fn test_set_preferences() {
        let (store, scorer) = stores();
        let mut session = EditorSession::load(store.clone(), scorer).await;
        let prefs = session
            .set_preferences(Some("Modern"), Some(" #ff0000 "))
            .await
            .unwrap();
        assert_eq!(prefs.template, Template::Modern);
        assert_eq!(prefs.accent, "#ff0000");
        assert_eq!(store.get(TEMPLATE_KEY).await.unwrap().as_deref(), Some("modern"));
        assert_eq!(store.get(ACCENT_KEY).await.unwrap().as_deref(), Some("#ff0000"));

        assert!(matches!(
            session.set_preferences(Some("baroque"), Some("#000")).await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(session.preferences().accent, "#ff0000");
    }

    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::Storage("offline".to_string()))
        }
        async fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::Storage("offline".to_string()))
        }
        async fn delete(&self, _key: &str) -> Result<(), AppError> {
            Err(AppError::Storage("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_failures_do_not_block_editing() {
        let scorer: Arc<dyn ResumeScorer> = Arc::new(RuleBasedScorer::default());
        let mut session = EditorSession::load(Arc::new(FailingStore), scorer).await;
        let result = session
            .update_field(&"personal.email".parse().unwrap(), "a@b.com")
            .await
            .unwrap();
        assert_eq!(result.score, 10);
        assert_eq!(session.document().personal.email, "a@b.com");

        let result = session.reset().await;
        assert_eq!(result.score, 0);
        assert_eq!(session.document(), &ResumeDocument::default());
    }

    #[test]
    fn test_validate_accent() {
        assert!(validate_accent("#0f766e").is_ok());
        assert!(validate_accent("hsl(168, 60%, 40%)").is_ok());
        assert!(validate_accent("").is_err());
        assert!(validate_accent("red\"; x").is_err());
        assert!(validate_accent(&"a".repeat(40)).is_err());
    }
}
