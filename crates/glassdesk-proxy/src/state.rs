use reqwest::Client;

use glassdesk_core::config::ProxyConfig;

use crate::errors::ProxyError;

/// Shared, immutable state handed to every route.
#[derive(Debug, Clone)]
pub struct ProxyState {
    pub client: Client,
    pub config: ProxyConfig,
    /// Image generation key. Checked per request so the server still starts
    /// and serves lookups without one.
    pub api_key: Option<String>,
}

impl ProxyState {
    pub fn new(config: ProxyConfig, api_key: Option<String>) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|source| ProxyError::Client { source })?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }
}

/// Read the image API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
pub fn api_key_from_env() -> Option<String> {
    resolve_api_key(
        std::env::var("GEMINI_API_KEY").ok(),
        std::env::var("API_KEY").ok(),
    )
}

/// Pick the first non-empty key.
pub fn resolve_api_key(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|key| !key.is_empty())
        .or(fallback.filter(|key| !key.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_prefers_primary() {
        assert_eq!(
            resolve_api_key(Some("gemini".into()), Some("generic".into())).as_deref(),
            Some("gemini")
        );
    }

    #[test]
    fn test_resolve_api_key_skips_empty_primary() {
        assert_eq!(
            resolve_api_key(Some(String::new()), Some("generic".into())).as_deref(),
            Some("generic")
        );
        assert_eq!(resolve_api_key(None, Some(String::new())), None);
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn test_state_uses_configured_timeout() {
        let config = ProxyConfig {
            request_timeout_secs: Some(5),
            ..Default::default()
        };
        let state = ProxyState::new(config, None).unwrap();
        assert_eq!(state.config.request_timeout().as_secs(), 5);
        assert!(state.api_key.is_none());
    }
}
