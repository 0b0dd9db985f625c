//! Error types for talking to the tracking service

/// Errors that can occur while calling the tracking service
#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Tracking service returned status {status}")]
    Api { status: u16, detail: Option<String> },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackingError {
    /// Display-ready message for the view that issued the call.
    ///
    /// Prefers the service-supplied `detail` field; anything else falls
    /// back to the caller's generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            TrackingError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for tracking operations
pub type Result<T> = std::result::Result<T, TrackingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_service_detail() {
        let error = TrackingError::Api {
            status: 422,
            detail: Some("Invalid URL".to_string()),
        };
        assert_eq!(error.user_message("generic"), "Invalid URL");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let error = TrackingError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(error.user_message("generic"), "generic");
    }

    #[test]
    fn user_message_falls_back_for_transport_errors() {
        let error = TrackingError::Http("connection refused".to_string());
        assert_eq!(error.user_message("generic"), "generic");
    }
}
