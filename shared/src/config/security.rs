//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// Settings key holding the tenant id whose users may see technical error details
pub const ORG_ROOT_ID_KEY: &str = "security.org_root_id";

/// Root tenant id used when `security.org_root_id` is not configured
pub const DEFAULT_ORG_ROOT_ID: i64 = 2;

/// Session token verification settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// HS256 secret used to verify session tokens.
    /// When absent every authenticated route rejects its callers.
    #[serde(default)]
    pub jwt_secret: Option<String>,
}
