/// Shared serializable output types.
///
/// These types are what gets written to stdout/stderr — the extracted
/// answer and the structured error envelope. They are decoupled from the
/// wire-level request/response types in `api`.
use serde::{Deserialize, Serialize};

/// The extracted answer for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutput {
    /// The first choice's message content.
    pub answer: String,
    /// Citation URLs, in the order the API returned them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
    /// Related follow-up questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_questions: Vec<String>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code (for API errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorOutput {
    /// Construct from a `PplxError`.
    #[must_use]
    pub fn from_pplx_error(err: &crate::api::PplxError) -> Self {
        use crate::api::PplxError;
        let (code, status) = match err {
            PplxError::MissingApiKey => ("missing_api_key", None),
            PplxError::Network(_) => ("network_error", None),
            PplxError::Api { status, .. } => ("api_error", Some(*status)),
            PplxError::MalformedResponse { .. } => ("malformed_response", None),
            PplxError::Io { .. } => ("io_error", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                status,
            },
        }
    }
}
