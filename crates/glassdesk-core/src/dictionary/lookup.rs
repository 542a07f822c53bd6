//! Interpretation of dictionary lookup responses.
//!
//! The proxy passes the upstream body through verbatim: a JSON array of
//! entries on success, or an object with an `error` field. These helpers turn
//! that into a typed result without doing any I/O, so every client (CLI,
//! tests, future front ends) shares one reading of the contract.

use serde_json::Value;
use tracing::debug;

use crate::dictionary::errors::LookupError;
use crate::dictionary::types::WordEntry;

/// Trim a query, rejecting blank input.
pub fn validate_query(query: &str) -> Result<&str, LookupError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(LookupError::EmptyQuery);
    }
    Ok(trimmed)
}

/// Parse a lookup response given its HTTP status and body.
pub fn parse_lookup_response(status: u16, body: &str) -> Result<Vec<WordEntry>, LookupError> {
    if !(200..300).contains(&status) {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => map
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        };
        debug!(
            event = "core.dictionary.lookup_http_error",
            status = status,
            message = ?message
        );
        return Err(LookupError::Http { status, message });
    }

    let value: Value = serde_json::from_str(body).map_err(|e| LookupError::Malformed {
        message: e.to_string(),
    })?;

    match value {
        Value::Object(map) => match map.get("error") {
            Some(Value::String(message)) => Err(LookupError::Upstream {
                message: message.clone(),
            }),
            Some(other) => Err(LookupError::Upstream {
                message: other.to_string(),
            }),
            None => Err(LookupError::NotFound),
        },
        Value::Array(items) if items.is_empty() => Err(LookupError::NotFound),
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value::<WordEntry>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LookupError::Malformed {
                message: e.to_string(),
            }),
        _ => Err(LookupError::NotFound),
    }
}
