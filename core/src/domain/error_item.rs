use serde::{Deserialize, Serialize};

/// A single field-level error, e.g. one failed validation rule.
///
/// Items keep the order in which they were discovered and are never
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(rename = "Message")]
    pub message: String,
}

impl ErrorItem {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&str> for ErrorItem {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorItem {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
