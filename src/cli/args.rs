/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::api::{DEFAULT_BASE_URL, RecencyFilter};

/// pplx: ask Perplexity AI questions from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "pplx",
    about = "Ask Perplexity AI questions from the CLI, with citations and related questions",
    version,
    arg_required_else_help = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Question to ask.
    pub question: String,

    /// Perplexity API key. Falls back to the `PERPLEXITY_API_KEY` environment variable.
    #[arg(long, value_name = "KEY", env = "PERPLEXITY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model to use.
    #[arg(long, value_name = "MODEL", default_value = "sonar")]
    pub model: String,

    /// Maximum tokens in the response (default: no limit).
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    #[arg(long, value_name = "T", default_value_t = 0.2)]
    pub temperature: f64,

    /// Include citations in the answer (default).
    #[arg(long, default_value_t = true, conflicts_with = "no_citations")]
    pub citations: bool,

    /// Exclude citations from the request and the rendered output.
    #[arg(long)]
    pub no_citations: bool,

    /// Ask the API to include images in the response.
    #[arg(long)]
    pub images: bool,

    /// Include related follow-up questions.
    #[arg(long)]
    pub related_questions: bool,

    /// Restrict search to these domains. Repeatable, or comma-separated.
    #[arg(long, value_name = "DOMAIN", value_delimiter = ',')]
    pub domain_filter: Vec<String>,

    /// Restrict search results to a time window.
    #[arg(long, value_name = "WINDOW")]
    pub recency: Option<RecencyFilter>,

    /// System prompt prepended to the conversation.
    #[arg(long, value_name = "PROMPT")]
    pub system: Option<String>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Save the rendered output to a file (in addition to printing it).
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// API base URL. Useful behind proxies.
    #[arg(long, value_name = "URL", env = "PPLX_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Print request phase timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Rendered answer with optional citations / related-questions sections.
    #[default]
    Text,
    /// Raw API response body (pretty-printed).
    Json,
    /// Raw API response body (compact single line).
    Compact,
}
