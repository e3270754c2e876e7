pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::render::handlers as render;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Editor
        .route(
            "/api/v1/resume",
            get(editor::handle_get_resume)
                .put(editor::handle_import)
                .delete(editor::handle_reset),
        )
        .route("/api/v1/resume/sample", post(editor::handle_load_sample))
        .route("/api/v1/resume/fields", patch(editor::handle_update_field))
        .route("/api/v1/resume/guidance", get(scoring::handle_guidance))
        .route(
            "/api/v1/resume/skills/:category",
            post(editor::handle_add_skill),
        )
        .route(
            "/api/v1/resume/skills/:category/:index",
            delete(editor::handle_remove_skill),
        )
        .route("/api/v1/resume/:kind", post(editor::handle_add_entry))
        .route(
            "/api/v1/resume/:kind/:index",
            delete(editor::handle_remove_entry),
        )
        .route("/api/v1/preferences", put(editor::handle_set_preferences))
        // Scoring
        .route("/api/v1/score", get(scoring::handle_score))
        .route("/api/v1/score/compact", get(scoring::handle_score_compact))
        .route("/api/v1/score/detailed", get(scoring::handle_score_detailed))
        .route("/api/v1/score/rules", get(scoring::handle_rules))
        // Preview and export
        .route("/api/v1/preview", get(render::handle_preview))
        .route("/api/v1/export/text", get(export::handle_export_text))
        .route("/api/v1/export/check", get(export::handle_export_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, StoreBackend};
    use crate::editor::session::EditorSession;
    use crate::scoring::{ResumeScorer, RuleBasedScorer};
    use crate::store::{KeyValueStore, MemoryStore, DOCUMENT_KEY};

    fn test_config() -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            store_backend: StoreBackend::Memory,
            redis_url: None,
            data_dir: PathBuf::from("unused"),
        }
    }

    async fn app_with_store(store: Arc<MemoryStore>) -> Router {
        let scorer: Arc<dyn ResumeScorer> = Arc::new(RuleBasedScorer::default());
        let session = EditorSession::load(store, scorer.clone()).await;
        build_router(AppState {
            session: Arc::new(Mutex::new(session)),
            scorer,
            config: test_config(),
        })
    }

    async fn app() -> Router {
        app_with_store(Arc::new(MemoryStore::default())).await
    }

    async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        send_request(app, request).await
    }

    async fn send_json(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        let (status, bytes) = send_request(app, request).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send_json(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "memory");
    }

    #[tokio::test]
    async fn test_empty_resume_scores_zero() {
        let app = app().await;
        let (status, body) = send_json(&app, Method::GET, "/api/v1/score", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_field_updates_flow_into_score() {
        let store = Arc::new(MemoryStore::default());
        let app = app_with_store(store.clone()).await;
        for (path, value) in [("personal.name", "A"), ("personal.email", "a@b.com")] {
            let (status, _) = send_json(
                &app,
                Method::PATCH,
                "/api/v1/resume/fields",
                Some(json!({ "path": path, "value": value })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, body) = send_json(&app, Method::GET, "/api/v1/score/compact", None).await;
        assert_eq!(body["score"], 20);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
        assert_eq!(body["suggestions"][0]["text"], "Add your phone number");

        let (_, body) = send_json(&app, Method::GET, "/api/v1/score/detailed", None).await;
        assert_eq!(body["level_label"], "Needs Work");
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 9);

        let stored = store.get(DOCUMENT_KEY).await.unwrap().unwrap();
        assert!(stored.contains("a@b.com"));
    }

    #[tokio::test]
    async fn test_unknown_field_path_is_bad_request() {
        let app = app().await;
        let (status, body) = send_json(
            &app,
            Method::PATCH,
            "/api/v1/resume/fields",
            Some(json!({ "path": "personal.age", "value": "30" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_requests_use_error_envelope() {
        let store = Arc::new(MemoryStore::default());
        let app = app_with_store(store.clone()).await;

        let (status, body) = send_raw(&app, Method::PUT, "/api/v1/resume", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
        assert!(body["error"]["message"].is_string());

        let (status, body) = send_raw(
            &app,
            Method::PATCH,
            "/api/v1/resume/fields",
            r#"{"path":"education.0.year","value":2020}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_BODY");

        let (status, body) =
            send_json(&app, Method::DELETE, "/api/v1/resume/experience/-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_PATH");

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/resume/skills/technical")
            .body(Body::from(r#"{"name":"Rust"}"#))
            .unwrap();
        let (status, bytes) = send_request(&app, request).await;
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "INVALID_BODY");

        assert_eq!(store.get(DOCUMENT_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_entries_add_update_remove() {
        let app = app().await;
        let (status, body) = send_json(&app, Method::POST, "/api/v1/resume/experience", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["index"], 0);
        assert_eq!(body["document"]["experience"][0]["desc"], "");

        let (_, body) = send_json(
            &app,
            Method::PATCH,
            "/api/v1/resume/fields",
            Some(json!({ "path": "experience.0.desc", "value": "Built the billing pipeline" })),
        )
        .await;
        assert_eq!(body["score"]["score"], 15);

        let (status, _) =
            send_json(&app, Method::DELETE, "/api/v1/resume/experience/3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) =
            send_json(&app, Method::DELETE, "/api/v1/resume/experience/0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"]["score"], 0);

        let (status, _) = send_json(&app, Method::POST, "/api/v1/resume/hobbies", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_skills_endpoints() {
        let app = app().await;
        for name in ["Rust", "Rust", "Go"] {
            send_json(
                &app,
                Method::POST,
                "/api/v1/resume/skills/technical",
                Some(json!({ "name": name })),
            )
            .await;
        }
        let (_, body) = send_json(&app, Method::GET, "/api/v1/resume", None).await;
        assert_eq!(body["document"]["skills"]["technical"], json!(["Rust", "Go"]));

        let (status, body) =
            send_json(&app, Method::DELETE, "/api/v1/resume/skills/technical/0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document"]["skills"]["technical"], json!(["Go"]));

        let (status, _) = send_json(
            &app,
            Method::POST,
            "/api/v1/resume/skills/hobbies",
            Some(json!({ "name": "Chess" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_import_legacy_document() {
        let app = app().await;
        let (status, body) = send_json(
            &app,
            Method::PUT,
            "/api/v1/resume",
            Some(json!({ "skills": "React, Node, Git", "projects": [{ "title": "T" }] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["document"]["skills"],
            json!({ "technical": ["React", "Node", "Git"], "soft": [], "tools": [] })
        );
        assert_eq!(body["document"]["projects"][0]["githubUrl"], "");
        assert_eq!(body["score"]["score"], 10);
    }

    #[tokio::test]
    async fn test_sample_then_reset() {
        let app = app().await;
        let (_, body) = send_json(&app, Method::POST, "/api/v1/resume/sample", None).await;
        assert_eq!(body["score"]["score"], 100);

        let (_, body) = send_json(&app, Method::GET, "/api/v1/score/detailed", None).await;
        assert_eq!(body["level_label"], "Strong Resume");
        assert!(body["success_message"].is_string());

        let (_, body) = send_json(&app, Method::GET, "/api/v1/export/check", None).await;
        assert_eq!(body["has_name"], true);
        assert_eq!(body["has_content"], true);

        let (_, body) = send_json(&app, Method::DELETE, "/api/v1/resume", None).await;
        assert_eq!(body["score"]["score"], 0);
        assert_eq!(body["document"]["experience"], json!([]));
    }

    #[tokio::test]
    async fn test_export_text_and_preview() {
        let app = app().await;
        send_json(&app, Method::POST, "/api/v1/resume/sample", None).await;

        let (status, bytes) = send(&app, Method::GET, "/api/v1/export/text", None).await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Zain Ul Abideen"));

        send_json(
            &app,
            Method::PUT,
            "/api/v1/preferences",
            Some(json!({ "template": "minimal" })),
        )
        .await;
        let (status, bytes) = send(&app, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains("template-minimal"));
    }

    #[tokio::test]
    async fn test_invalid_preferences_rejected() {
        let app = app().await;
        let (status, _) = send_json(
            &app,
            Method::PUT,
            "/api/v1/preferences",
            Some(json!({ "accent": "red\"><script>" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_guidance_and_rules() {
        let app = app().await;
        send_json(&app, Method::POST, "/api/v1/resume/projects", None).await;
        send_json(
            &app,
            Method::PATCH,
            "/api/v1/resume/fields",
            Some(json!({ "path": "projects.0.desc", "value": "A todo app" })),
        )
        .await;
        let (_, body) = send_json(&app, Method::GET, "/api/v1/resume/guidance", None).await;
        assert_eq!(body["entries"][0]["kind"], "projects");
        assert_eq!(body["entries"][0]["hints"].as_array().unwrap().len(), 2);

        let (_, body) = send_json(&app, Method::GET, "/api/v1/score/rules", None).await;
        assert_eq!(body.as_array().unwrap().len(), 11);
        assert_eq!(body[0]["id"], "name");
    }
}
