/// Errors from the API layer.
use thiserror::Error;

/// Errors that can occur between parsing the flags and printing the answer.
#[derive(Debug, Error)]
pub enum PplxError {
    /// No API key resolvable from the flag or the environment.
    #[error(
        "Perplexity API key is required. Set the PERPLEXITY_API_KEY environment variable or pass --api-key"
    )]
    MissingApiKey,

    /// Connection failure or timeout before a response arrived.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed API response: {detail}")]
    MalformedResponse {
        /// What failed to parse.
        detail: String,
    },

    /// Writing the output file failed.
    #[error("failed to write '{path}': {source}")]
    Io {
        /// Path of the file that could not be written.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Exit code mapping for `PplxError` variants.
impl PplxError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingApiKey => 2,
            Self::Network(_) => 3,
            Self::Api { .. } => 4,
            Self::MalformedResponse { .. } | Self::Io { .. } => 1,
        }
    }
}
