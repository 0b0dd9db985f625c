//! Client configuration

/// Default location of the tracking service
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Where the tracking service lives.
///
/// The base location is fixed at build time; this client has no CLI or
/// environment surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the tracking service
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
