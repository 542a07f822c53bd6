//! Route handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::errors::ProxyError;
use crate::gemini::{self, GenerateContentRequest};
use crate::state::ProxyState;

pub const WALLPAPER_FILE: &str = "lockscreen-bg.png";
pub const WALLPAPER_ASPECT_RATIO: &str = "9:16";

pub const WALLPAPER_PROMPT: &str = "A futuristic iOS 26 concept wallpaper designed for dual Lock Screen and AOD use. The central subject is a complex, flowing sculpture made of hyper-realistic \"Liquid Glass.\" This glass entity is viscous, highly refractive, with chromatic aberration and iridescent caustics casting subtle light patterns. It has a biomorphic, fluid shape, like mercury suspended in zero gravity.

Crucially, this liquid glass sculpture is isolated against a pure, pitch-black void background (#000000 hexadecimal). There is zero ambient light in the background; only the central glass object is illuminated by dramatic, cool-toned rim lighting.

The composition is centered, leaving substantial negative, dark space at the top for the UI clock and widgets. The overall aesthetic is minimalist luxury, ray-tracing render, 8k resolution, highly detailed macro photography, deep contrast.";

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub q: Option<String>,
}

/// Body of a successful wallpaper generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperResponse {
    pub success: bool,
    pub path: String,
}

/// `GET /health`
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/tdk?q=<word>`
///
/// Forwards the word to the dictionary service and relays its JSON body
/// unchanged, including its own "not found" error objects.
pub async fn lookup_word(
    State(state): State<Arc<ProxyState>>,
    Query(params): Query<LookupParams>,
) -> Result<Json<Value>, ProxyError> {
    let word = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(ProxyError::MissingQuery)?;

    info!(event = "proxy.lookup.started", word = %word);

    match fetch_entries(&state, &word).await {
        Ok(body) => {
            info!(event = "proxy.lookup.completed", word = %word);
            Ok(Json(body))
        }
        Err(e) => {
            warn!(event = "proxy.lookup.failed", word = %word, error = %e);
            Err(e)
        }
    }
}

async fn fetch_entries(state: &ProxyState, word: &str) -> Result<Value, ProxyError> {
    let upstream = |e: reqwest::Error| ProxyError::DictionaryUpstream {
        message: e.to_string(),
    };

    let response = state
        .client
        .get(state.config.dictionary_url())
        .query(&[("ara", word)])
        .header(USER_AGENT, state.config.user_agent())
        .send()
        .await
        .map_err(upstream)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProxyError::DictionaryUpstream {
            message: format!("responded with {}", status.as_u16()),
        });
    }

    response.json::<Value>().await.map_err(upstream)
}

/// `POST /api/generate-wallpaper`
///
/// Generates a lock screen wallpaper and stores it as
/// `<public_dir>/lockscreen-bg.png`, where the static file route serves it.
pub async fn generate_wallpaper(
    State(state): State<Arc<ProxyState>>,
) -> Result<Json<WallpaperResponse>, ProxyError> {
    let api_key = state.api_key.as_deref().ok_or_else(|| {
        error!(event = "proxy.wallpaper.api_key_missing");
        ProxyError::ApiKeyMissing
    })?;

    let model = state.config.image_model();
    info!(event = "proxy.wallpaper.generation_started", model = model);

    let result = generate_and_save(&state, api_key).await;
    match &result {
        Ok(path) => info!(
            event = "proxy.wallpaper.generation_completed",
            path = %path.display()
        ),
        Err(e) => error!(event = "proxy.wallpaper.generation_failed", error = %e),
    }
    result?;

    Ok(Json(WallpaperResponse {
        success: true,
        path: format!("/{}", WALLPAPER_FILE),
    }))
}

async fn generate_and_save(state: &ProxyState, api_key: &str) -> Result<PathBuf, ProxyError> {
    let request = GenerateContentRequest::image(WALLPAPER_PROMPT, WALLPAPER_ASPECT_RATIO);
    let response = gemini::generate_content(
        &state.client,
        state.config.image_api_url(),
        state.config.image_model(),
        api_key,
        &request,
    )
    .await?;

    let image = response
        .first_inline_data()
        .ok_or(ProxyError::NoImageData)?;

    let bytes = BASE64
        .decode(image.data.as_bytes())
        .map_err(|e| ProxyError::GenerationFailed {
            details: format!("Invalid image data: {}", e),
        })?;

    save_wallpaper(&state.config.public_dir(), &bytes).await
}

/// Write the image into `dir`, creating the directory if needed.
pub async fn save_wallpaper(dir: &Path, bytes: &[u8]) -> Result<PathBuf, ProxyError> {
    let io_failed = |e: std::io::Error| ProxyError::GenerationFailed {
        details: e.to_string(),
    };

    tokio::fs::create_dir_all(dir).await.map_err(io_failed)?;
    let path = dir.join(WALLPAPER_FILE);
    tokio::fs::write(&path, bytes).await.map_err(io_failed)?;
    Ok(path)
}
