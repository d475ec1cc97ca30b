/// Chat-completions payload construction.
use clap::ValueEnum;
use serde::Serialize;

// Fixed sampling parameters the API expects alongside the user-tunable ones.
const TOP_P: f64 = 0.9;
const TOP_K: u32 = 0;
const PRESENCE_PENALTY: f64 = 0.0;
const FREQUENCY_PENALTY: f64 = 1.0;

/// Time window for the search recency filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyFilter {
    Hour,
    Day,
    Week,
    Month,
}

/// Everything that shapes one chat-completions request.
///
/// Decoupled from the clap `Cli` struct so the payload builder can be
/// exercised without parsing argv.
#[derive(Debug, Clone)]
pub struct Query {
    pub question: String,
    /// Optional system prompt prepended to the conversation.
    pub system: Option<String>,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: f64,
    pub citations: bool,
    pub images: bool,
    pub related_questions: bool,
    /// Domains the search is restricted to. Empty means unrestricted.
    pub domain_filter: Vec<String>,
    pub recency: Option<RecencyFilter>,
}

/// One message in the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

/// Wire payload for POST /chat/completions.
///
/// Optional fields are skipped entirely so the body never carries nulls.
#[derive(Debug, Clone, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub stream: bool,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub return_citations: bool,
    pub return_images: bool,
    pub return_related_questions: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_domain_filter: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_recency_filter: Option<RecencyFilter>,
}

impl ChatRequest {
    /// Map a `Query` onto the wire payload.
    #[must_use]
    pub fn build(query: &Query) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &query.system {
            messages.push(Message {
                role: "system",
                content: system.clone(),
            });
        }
        messages.push(Message {
            role: "user",
            content: query.question.clone(),
        });

        Self {
            model: query.model.clone(),
            messages,
            max_tokens: query.max_tokens,
            temperature: query.temperature,
            top_p: TOP_P,
            top_k: TOP_K,
            stream: false,
            presence_penalty: PRESENCE_PENALTY,
            frequency_penalty: FREQUENCY_PENALTY,
            return_citations: query.citations,
            return_images: query.images,
            return_related_questions: query.related_questions,
            search_domain_filter: query.domain_filter.clone(),
            search_recency_filter: query.recency,
        }
    }
}
