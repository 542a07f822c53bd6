//! Blocking HTTP client for the glassdesk proxy.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use glassdesk_core::dictionary::{LookupError, WordEntry, parse_lookup_response};

/// Result of a wallpaper generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum WallpaperOutcome {
    /// Saved; `path` is the URL path the proxy serves it at.
    Saved { path: String },
    Failed { status: u16, body: String },
}

#[derive(Debug, Deserialize)]
struct WallpaperSaved {
    path: String,
}

pub struct ProxyClient {
    base_url: String,
    http: Client,
}

impl ProxyClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/tdk?q=<word>`, interpreted the way the desktop does.
    pub fn lookup(&self, word: &str) -> Result<Vec<WordEntry>, LookupError> {
        let url = format!("{}/api/tdk", self.base_url);
        debug!(event = "cli.client.lookup_requested", url = %url, word = word);

        let transport = |e: reqwest::Error| LookupError::Transport {
            message: e.to_string(),
        };

        let response = self
            .http
            .get(&url)
            .query(&[("q", word)])
            .send()
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport)?;

        parse_lookup_response(status, &body)
    }

    /// `POST /api/generate-wallpaper`. Non-success answers are returned as
    /// [`WallpaperOutcome::Failed`] rather than as errors.
    pub fn generate_wallpaper(&self) -> Result<WallpaperOutcome, Box<dyn std::error::Error>> {
        let url = format!("{}/api/generate-wallpaper", self.base_url);
        debug!(event = "cli.client.wallpaper_requested", url = %url);

        let response = self.http.post(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Ok(WallpaperOutcome::Failed {
                status: status.as_u16(),
                body,
            });
        }

        let saved: WallpaperSaved = serde_json::from_str(&body)?;
        Ok(WallpaperOutcome::Saved { path: saved.path })
    }
}
