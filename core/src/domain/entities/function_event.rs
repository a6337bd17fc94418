//! Inbound function event

use serde::{Deserialize, Serialize};

/// Event handed to the function by its host
///
/// `body` is the raw request body, expected to be a JSON document of the
/// form `{"To": "...", "Code": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionEvent {
    pub body: String,
}

impl FunctionEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
