pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ping", get(health::ping_handler))
        // Generation API
        .route("/api/generate", post(generation::handle_generate))
        .route("/api/generate/resume", post(generation::handle_generate_resume))
        .route(
            "/api/generate/cover-letter",
            post(generation::handle_generate_cover_letter),
        )
        // Download API
        .route("/api/download/pdf", post(render::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::generation::service::ContentGenerationService;

    fn app() -> Router {
        let config = Config {
            ping_message: "pong".to_string(),
            generation_latency: Duration::ZERO,
            ..Config::default()
        };
        build_router(AppState {
            config,
            generation: ContentGenerationService::with_templates(Duration::ZERO),
        })
    }

    fn jane() -> Value {
        json!({
            "personal": { "fullName": "Jane Doe", "email": "jane@example.com" },
            "skills": { "technical": ["Go"], "soft": [] },
            "jobRole": { "title": "Backend Engineer" }
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = app().oneshot(req).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, bytes.to_vec())
    }

    async fn send_json(req: Request<Body>) -> (StatusCode, Value) {
        let (status, _, bytes) = send(req).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_and_ping() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send_json(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let req = Request::builder().uri("/api/ping").body(Body::empty()).unwrap();
        let (status, body) = send_json(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "pong" }));
    }

    #[tokio::test]
    async fn test_generate_both() {
        let (status, body) = send_json(post_json("/api/generate", &jane())).await;
        assert_eq!(status, StatusCode::OK);

        let summary = body["resume"]["summary"].as_str().unwrap();
        assert!(summary.starts_with("Dynamic Backend Engineer with expertise in Go."));
        assert_eq!(body["resume"]["enhancedExperience"], json!([]));
        assert_eq!(body["coverLetter"]["bodyParagraphs"].as_array().unwrap().len(), 3);
        assert!(body["coverLetter"]["content"]
            .as_str()
            .unwrap()
            .ends_with("Sincerely,\nJane Doe"));
    }

    #[tokio::test]
    async fn test_generate_resume_only_omits_cover_letter() {
        let mut profile = jane();
        profile["jobRole"]["title"] = json!("");
        let (status, body) = send_json(post_json("/api/generate/resume", &profile)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("resume").is_some());
        assert!(body.get("coverLetter").is_none());
    }

    #[tokio::test]
    async fn test_generate_cover_letter_only() {
        let (status, body) = send_json(post_json("/api/generate/cover-letter", &jane())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("resume").is_none());
        assert!(body["coverLetter"]["content"].is_string());
    }

    #[tokio::test]
    async fn test_generate_missing_title_is_400() {
        let mut profile = jane();
        profile["jobRole"]["title"] = json!("   ");
        let (status, body) = send_json(post_json("/api/generate", &profile)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Missing required fields: personal.fullName and jobRole.title are required"
        );
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_missing_full_name_is_400() {
        let mut profile = jane();
        profile["personal"] = json!({});
        let (status, body) = send_json(post_json("/api/generate", &profile)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("fullName"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send_json(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn test_download_resume_headers_and_body() {
        let body = json!({ "type": "resume", "data": jane() });
        let (status, headers, bytes) = send(post_json("/api/download/pdf", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe_Resume.html\"; \
             filename*=UTF-8''Jane_Doe_Resume.html"
        );

        let html = String::from_utf8(bytes).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Jane Doe"));
        assert!(!html.contains("Work Experience"));
    }

    #[tokio::test]
    async fn test_download_accented_name_keeps_utf8_filename() {
        let mut data = jane();
        data["personal"]["fullName"] = json!("José Núñez");
        let body = json!({ "type": "resume", "data": data });
        let (status, headers, _) = send(post_json("/api/download/pdf", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jos_Nez_Resume.html\"; \
             filename*=UTF-8''Jos%C3%A9_N%C3%BA%C3%B1ez_Resume.html"
        );
    }

    #[tokio::test]
    async fn test_download_cover_letter_without_title_is_400() {
        let mut data = jane();
        data["jobRole"]["title"] = json!("");
        let body = json!({ "type": "cover-letter", "data": data });
        let (status, body) = send_json(post_json("/api/download/pdf", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Missing required field: jobRole.title is required for cover letter"
        );
    }

    #[tokio::test]
    async fn test_download_invalid_type_is_400() {
        let body = json!({ "type": "pdf", "data": jane() });
        let (status, body) = send_json(post_json("/api/download/pdf", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Invalid type. Must be one of: resume, cover-letter, both"
        );
    }

    #[tokio::test]
    async fn test_download_missing_name_checked_first() {
        let body = json!({ "type": "pdf", "data": { "personal": { "fullName": "" } } });
        let (status, body) = send_json(post_json("/api/download/pdf", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Missing required field: personal.fullName is required"
        );
    }

    #[tokio::test]
    async fn test_generate_then_download_cover_letter() {
        let (_, generated) = send_json(post_json("/api/generate", &jane())).await;
        let body = json!({ "type": "cover-letter", "data": jane(), "aiContent": generated });
        let (status, headers, bytes) = send(post_json("/api/download/pdf", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe_Cover_Letter.html\"; \
             filename*=UTF-8''Jane_Doe_Cover_Letter.html"
        );

        let html = String::from_utf8(bytes).unwrap();
        assert!(html.contains("<div class=\"generated\">Dear Hiring Manager,"));
        assert!(html.contains("[Company Name]"));
    }
}
