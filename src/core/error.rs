use thiserror::Error;

/// Classified failure causes inside the extraction pipeline. These never
/// reach end users directly; `AnalysisError` collapses them at the boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no Gemini API key configured (dealscout.json or GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("target url is blank")]
    BlankTarget,

    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("inference endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response payload did not match the report schema: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The single user-facing error kind. Its message is fixed and safe to show
/// verbatim; the classified cause stays reachable through `source()` for
/// operator logs, never through `Display`.
#[derive(Debug, Error)]
#[error("failed to analyze the website; check the URL and try again")]
pub struct AnalysisError {
    #[from]
    source: ProviderError,
}

impl AnalysisError {
    /// The classified cause, for diagnostics.
    pub fn cause(&self) -> &ProviderError {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn boundary_error_display_is_fixed() {
        let err = AnalysisError::from(ProviderError::BlankTarget);
        assert_eq!(
            err.to_string(),
            "failed to analyze the website; check the URL and try again"
        );
        // The cause never leaks into Display but stays reachable for logs.
        assert!(err.source().is_some());
        assert!(matches!(err.cause(), ProviderError::BlankTarget));
    }

    #[test]
    fn payload_cause_collapses_to_the_same_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = AnalysisError::from(ProviderError::Payload(parse_err));
        assert_eq!(
            err.to_string(),
            "failed to analyze the website; check the URL and try again"
        );
    }
}
