use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use glassdesk_core::errors::GlassdeskError;

/// Failures of the proxy routes and server.
///
/// The `Display` text is what gets logged. Clients only ever see the fixed
/// JSON bodies produced by [`IntoResponse`], so upstream details do not leak
/// except for wallpaper generation, which reports them under `details`.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Word parameter 'q' is required")]
    MissingQuery,

    #[error("Dictionary upstream failed: {message}")]
    DictionaryUpstream { message: String },

    #[error("API Key not configured")]
    ApiKeyMissing,

    #[error("No image data found")]
    NoImageData,

    #[error("Generation failed: {details}")]
    GenerationFailed { details: String },

    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MissingQuery => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body returned to the client.
    pub fn body(&self) -> serde_json::Value {
        match self {
            ProxyError::MissingQuery => json!({ "error": "Word parameter 'q' is required" }),
            ProxyError::DictionaryUpstream { .. } => {
                json!({ "error": "Failed to fetch from TDK API" })
            }
            ProxyError::ApiKeyMissing => json!({ "error": "API Key not configured" }),
            ProxyError::NoImageData => json!({ "error": "No image data found" }),
            ProxyError::GenerationFailed { details } => {
                json!({ "error": "Generation failed", "details": details })
            }
            ProxyError::Client { .. } | ProxyError::Bind { .. } | ProxyError::Serve { .. } => {
                json!({ "error": "Internal server error" })
            }
        }
    }
}

impl GlassdeskError for ProxyError {
    fn error_code(&self) -> &'static str {
        match self {
            ProxyError::MissingQuery => "PROXY_MISSING_QUERY",
            ProxyError::DictionaryUpstream { .. } => "PROXY_DICTIONARY_UPSTREAM",
            ProxyError::ApiKeyMissing => "PROXY_API_KEY_MISSING",
            ProxyError::NoImageData => "PROXY_NO_IMAGE_DATA",
            ProxyError::GenerationFailed { .. } => "PROXY_GENERATION_FAILED",
            ProxyError::Client { .. } => "PROXY_CLIENT_BUILD_FAILED",
            ProxyError::Bind { .. } => "PROXY_BIND_FAILED",
            ProxyError::Serve { .. } => "PROXY_SERVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProxyError::MissingQuery)
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
