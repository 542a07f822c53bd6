//! HTTP server and routing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use glassdesk_core::events;

use crate::errors::ProxyError;
use crate::handlers;
use crate::state::ProxyState;

/// Create the router. Anything not matched by an API route is served from
/// the public directory.
pub fn create_router(state: Arc<ProxyState>) -> Router {
    let public_dir = state.config.public_dir();

    Router::new()
        .route("/api/tdk", get(handlers::lookup_word))
        .route("/api/generate-wallpaper", post(handlers::generate_wallpaper))
        .route("/health", get(handlers::health_check))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(state: Arc<ProxyState>) -> Result<(), ProxyError> {
    let addr = state.config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ProxyError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        event = "proxy.server.listening",
        addr = %addr,
        public_dir = %state.config.public_dir().display(),
        image_key_configured = state.api_key.is_some()
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ProxyError::Serve { source })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        events::log_app_error(&e);
    }
    events::log_app_shutdown();
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use glassdesk_core::config::ProxyConfig;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::handlers::WALLPAPER_PROMPT;

    fn test_state(
        upstream: &str,
        public_dir: &std::path::Path,
        api_key: Option<&str>,
    ) -> Arc<ProxyState> {
        let config = ProxyConfig {
            dictionary_url: Some(format!("{}/gts", upstream)),
            image_api_url: Some(upstream.to_string()),
            public_dir: Some(public_dir.to_path_buf()),
            user_agent: Some("glassdesk-test".to_string()),
            ..Default::default()
        };
        Arc::new(ProxyState::new(config, api_key.map(str::to_string)).unwrap())
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state("http://127.0.0.1:9", temp.path(), None));

        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_lookup_requires_query() {
        let temp = tempfile::tempdir().unwrap();
        let state = test_state("http://127.0.0.1:9", temp.path(), None);

        for uri in ["/api/tdk", "/api/tdk?q="] {
            let (status, body) = get_json(create_router(state.clone()), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Word parameter 'q' is required" }));
        }
    }

    #[tokio::test]
    async fn test_lookup_relays_upstream_body() {
        let upstream = MockServer::start().await;
        let entries = json!([{ "madde_id": "1", "madde": "kalem", "anlamlarListe": [] }]);
        Mock::given(method("GET"))
            .and(path("/gts"))
            .and(query_param("ara", "kalem"))
            .and(header("user-agent", "glassdesk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(entries.clone()))
            .expect(1)
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state(&upstream.uri(), temp.path(), None));

        let (status, body) = get_json(router, "/api/tdk?q=kalem").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, entries);
    }

    #[tokio::test]
    async fn test_lookup_relays_not_found_object() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gts"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "error": "Sonuç bulunamadı" })),
            )
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state(&upstream.uri(), temp.path(), None));

        let (status, body) = get_json(router, "/api/tdk?q=zzzz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Sonuç bulunamadı" }));
    }

    #[tokio::test]
    async fn test_lookup_encodes_non_ascii_word() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gts"))
            .and(query_param("ara", "göz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state(&upstream.uri(), temp.path(), None));

        let (status, body) = get_json(router, "/api/tdk?q=g%C3%B6z").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_lookup_upstream_failure_is_500() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gts"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state(&upstream.uri(), temp.path(), None));

        let (status, body) = get_json(router, "/api/tdk?q=kalem").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch from TDK API" }));
    }

    #[tokio::test]
    async fn test_lookup_non_json_upstream_is_500() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state(&upstream.uri(), temp.path(), None));

        let (status, body) = get_json(router, "/api/tdk?q=kalem").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch from TDK API" }));
    }

    #[tokio::test]
    async fn test_wallpaper_requires_api_key() {
        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state("http://127.0.0.1:9", temp.path(), None));

        let (status, body) = post_json(router, "/api/generate-wallpaper").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "API Key not configured" }));
    }

    #[tokio::test]
    async fn test_wallpaper_is_generated_saved_and_served() {
        let upstream = MockServer::start().await;
        let image = b"\x89PNG fake image";
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash-image:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": WALLPAPER_PROMPT }] }],
                "generationConfig": { "imageConfig": { "aspectRatio": "9:16" } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "parts": [
                            { "text": "done" },
                            { "inlineData": { "mimeType": "image/png", "data": BASE64.encode(image) } }
                        ]
                    }
                }]
            })))
            .expect(1)
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let public_dir = temp.path().join("public");
        let state = test_state(&upstream.uri(), &public_dir, Some("test-key"));

        let (status, body) =
            post_json(create_router(state.clone()), "/api/generate-wallpaper").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "path": "/lockscreen-bg.png" }));
        assert_eq!(
            std::fs::read(public_dir.join("lockscreen-bg.png")).unwrap(),
            image
        );

        let request = Request::builder()
            .uri("/lockscreen-bg.png")
            .body(Body::empty())
            .unwrap();
        let (status, served) = send(create_router(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(served, image);
    }

    #[tokio::test]
    async fn test_wallpaper_without_image_part() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "I cannot do that" }] } }]
            })))
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state(&upstream.uri(), temp.path(), Some("test-key")));

        let (status, body) = post_json(router, "/api/generate-wallpaper").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "No image data found" }));
        assert!(!temp.path().join("lockscreen-bg.png").exists());
    }

    #[tokio::test]
    async fn test_wallpaper_upstream_error_reports_details() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED" }
            })))
            .mount(&upstream)
            .await;

        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state(&upstream.uri(), temp.path(), Some("test-key")));

        let (status, body) = post_json(router, "/api/generate-wallpaper").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Generation failed", "details": "Quota exceeded" })
        );
    }

    #[tokio::test]
    async fn test_unknown_static_file_is_404() {
        let temp = tempfile::tempdir().unwrap();
        let router = create_router(test_state("http://127.0.0.1:9", temp.path(), None));

        let request = Request::builder()
            .uri("/missing.png")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(router, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
