use crate::errors::GlassdeskError;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Search term is empty")]
    EmptyQuery,

    #[error("No entry found")]
    NotFound,

    #[error("Dictionary service reported an error: {message}")]
    Upstream { message: String },

    #[error("Dictionary request failed with status {status}{}", message_suffix(.message))]
    Http {
        status: u16,
        /// The `error` field of the proxy's JSON body, when it sent one.
        message: Option<String>,
    },

    #[error("Malformed dictionary response: {message}")]
    Malformed { message: String },

    #[error("Dictionary request could not be sent: {message}")]
    Transport { message: String },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl LookupError {
    /// Text shown to the user in the search panel.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyQuery => "Arama terimi boş olamaz.".to_string(),
            LookupError::NotFound => "Kelime bulunamadı.".to_string(),
            LookupError::Upstream { message } => message.clone(),
            LookupError::Http { .. }
            | LookupError::Malformed { .. }
            | LookupError::Transport { .. } => "Bir hata oluştu.".to_string(),
        }
    }
}

impl GlassdeskError for LookupError {
    fn error_code(&self) -> &'static str {
        match self {
            LookupError::EmptyQuery => "LOOKUP_EMPTY_QUERY",
            LookupError::NotFound => "LOOKUP_NOT_FOUND",
            LookupError::Upstream { .. } => "LOOKUP_UPSTREAM_ERROR",
            LookupError::Http { .. } => "LOOKUP_HTTP_ERROR",
            LookupError::Malformed { .. } => "LOOKUP_MALFORMED_RESPONSE",
            LookupError::Transport { .. } => "LOOKUP_TRANSPORT_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, LookupError::EmptyQuery | LookupError::NotFound)
    }
}
