//! Value objects representing immutable domain concepts.

pub mod auth_headers;
pub mod recipient;

// Re-export commonly used types
pub use auth_headers::{AuthHeaders, FORM_CONTENT_TYPE};
pub use recipient::Recipient;
