/// Perplexity API layer: payload construction, HTTP invocation, extraction.
pub mod client;
pub mod errors;
pub mod request;
pub mod response;

pub use client::{DEFAULT_BASE_URL, PerplexityClient};
pub use errors::PplxError;
pub use request::{ChatRequest, Query, RecencyFilter};
pub use response::extract;
