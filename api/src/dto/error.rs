use serde::{Deserialize, Serialize};

use jb_core::ErrorItem;

/// Error body returned by every failing API call.
///
/// All fields are always serialized; absent values are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorMessage {
    /// Technical detail, only filled for callers allowed to see it
    pub tech_details: String,
    /// Localized message for the user
    pub message: String,
    pub error_items: Vec<ErrorItem>,
    /// Symbolic name of the message resource, e.g. `InvalidUserId`
    pub resource_key: String,
}
