//! Cross-origin request configuration

use serde::{Deserialize, Serialize};

/// Origins allowed to call the API from a browser
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Exact origins accepted outside development, e.g. `https://jobs.example.com`
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Preflight cache lifetime in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Configured origins, trimmed, blanks skipped
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
    }
}

fn default_max_age() -> usize {
    3600
}
