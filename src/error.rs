use thiserror::Error;

/// Failures raised while fetching from the DWD API.
#[derive(Debug, Error)]
pub enum DwdError {
    /// Upstream answered with a non-success status.
    #[error("DWD API error: {status} {reason}")]
    Http { status: u16, reason: String },

    /// Connection or transport failure before a full response arrived.
    #[error("DWD API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream body was not valid JSON.
    #[error("DWD API returned invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_and_reason() {
        let err = DwdError::Http {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "DWD API error: 404 Not Found");
    }
}
