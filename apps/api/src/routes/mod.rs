pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Slack on top of the file ceiling for multipart framing and extra fields.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        .route("/api/v1/resumes/upload", post(handlers::handle_upload))
        .route("/api/v1/resumes/jd-match", post(handlers::handle_jd_match))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "resume-api-test-boundary";

    fn router() -> Router {
        build_router(AppState::new(Config::default()))
    }

    fn small_upload_router(max_upload_bytes: usize) -> Router {
        build_router(AppState::new(Config {
            max_upload_bytes,
            ..Config::default()
        }))
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn multipart_request(field: &str, content_type: &str, payload: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"resume\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_analyze_returns_document_and_scoring() {
        let response = router()
            .oneshot(json_request(
                "/api/v1/resumes/analyze",
                json!({ "text": "EXPERIENCE\nBuilt systems\nEDUCATION\nBS Computer Science" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        let sections = payload["document"]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0]["title"], "EXPERIENCE");
        assert_eq!(sections[0]["content"], "Built systems\n");
        assert_eq!(payload["scoring"]["breakdown"]["section_score"], 20);
        assert!(payload["scoring"]["improvements"].as_array().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_analyze_accepts_empty_text() {
        let response = router()
            .oneshot(json_request("/api/v1/resumes/analyze", json!({ "text": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["scoring"]["score"], 5);
    }

    #[tokio::test]
    async fn test_jd_match_reports_coverage() {
        let response = router()
            .oneshot(json_request(
                "/api/v1/resumes/jd-match",
                json!({
                    "resume_text": "SKILLS\nReact, JavaScript",
                    "jd_text": "React, TypeScript and Python"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let result = &read_json(response).await["match_result"];
        assert_eq!(result["matched_keywords"], json!(["react"]));
        assert_eq!(result["missing_keywords"], json!(["python", "typescript"]));
        assert_eq!(result["score"], 33);
        assert_eq!(result["coverage"], 0.33);
        assert_eq!(result["verdict"], "Weak Match");
    }

    #[tokio::test]
    async fn test_jd_match_with_empty_jd_is_not_an_error() {
        let response = router()
            .oneshot(json_request(
                "/api/v1/resumes/jd-match",
                json!({ "resume_text": "Rust", "jd_text": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let result = &read_json(response).await["match_result"];
        assert_eq!(result["score"], 0);
        assert_eq!(result["verdict"], "Weak Match");
        assert_eq!(result["total_keywords_found"], 0);
    }

    #[tokio::test]
    async fn test_upload_plain_text() {
        let response = router()
            .oneshot(multipart_request(
                "file",
                "text/plain",
                b"jane@example.com\nSKILLS\nRust, Go\n",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["document"]["email"], "jane@example.com");
        assert_eq!(payload["document"]["sections"][0]["title"], "SKILLS");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type_is_415() {
        let response = router()
            .oneshot(multipart_request("file", "image/png", b"\x89PNG"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let payload = read_json(response).await;
        assert_eq!(payload["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_blank_text_is_422() {
        let response = router()
            .oneshot(multipart_request("file", "text/plain", b"   "))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_400() {
        let response = router()
            .oneshot(multipart_request("attachment", "text/plain", b"SKILLS\nRust"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json(response).await;
        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_413() {
        let response = small_upload_router(16)
            .oneshot(multipart_request("file", "text/plain", &[b'a'; 64]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
