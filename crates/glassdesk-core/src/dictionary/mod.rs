//! Dictionary entries and the lookup response contract.

pub mod errors;
pub mod lookup;
pub mod types;

pub use errors::LookupError;
pub use lookup::{parse_lookup_response, validate_query};
pub use types::{Author, Example, Meaning, WordEntry};
