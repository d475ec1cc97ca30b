/// Output rendering: text and raw-JSON modes, file saving, debug timing.
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use super::args::{Cli, OutputFormat};
use crate::api::PplxError;
use crate::types::AnswerOutput;

/// Resolve the effective output format, handling the `--json` shorthand.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to the renderer.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// Render the citations section when the body carries citations.
    pub citations: bool,
    /// Render the related-questions section when the body carries any.
    pub related_questions: bool,
    /// When true, print phase timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: resolve_format(cli.output, cli.json),
            citations: cli.citations && !cli.no_citations,
            related_questions: cli.related_questions,
            debug: cli.debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Reproduce the raw API body (pretty or compact).
///
/// The JSON modes echo the body verbatim, whatever its shape; only text
/// mode requires the chat-completions structure.
#[must_use]
pub fn render_raw(raw: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Compact => serde_json::to_string(raw).unwrap_or_default(),
        _ => serde_json::to_string_pretty(raw).unwrap_or_default(),
    }
}

/// Format the extracted answer with optional citations / related-questions
/// sections.
#[must_use]
pub fn render_text(answer: &AnswerOutput, ctx: &OutputCtx) -> String {
    let mut parts = vec![answer.answer.clone()];

    if ctx.citations && !answer.citations.is_empty() {
        parts.push("\nCitations:".to_owned());
        for (i, url) in answer.citations.iter().enumerate() {
            parts.push(format!("{}. {url}", i + 1));
        }
    }

    if ctx.related_questions && !answer.related_questions.is_empty() {
        parts.push("\nRelated Questions:".to_owned());
        for question in &answer.related_questions {
            parts.push(format!("• {question}"));
        }
    }

    parts.join("\n")
}

/// Write the rendered output to `path`.
///
/// # Errors
///
/// Returns `PplxError::Io` when the file cannot be written.
pub fn save(path: &Path, rendered: &str) -> Result<(), PplxError> {
    std::fs::write(path, rendered).map_err(|source| PplxError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(status) = err.error.status {
                let _ = writeln!(out, "  Status Code: {status}");
            }
        }
    }
}

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answer() -> AnswerOutput {
        AnswerOutput {
            answer: "Rust is a systems language.".to_owned(),
            citations: vec![
                "https://rust-lang.org".to_owned(),
                "https://doc.rust-lang.org".to_owned(),
            ],
            related_questions: vec!["What is borrow checking?".to_owned()],
        }
    }

    fn ctx(format: OutputFormat, citations: bool, related_questions: bool) -> OutputCtx {
        OutputCtx {
            format,
            citations,
            related_questions,
            debug: false,
        }
    }

    #[test]
    fn test_text_with_citations() {
        let rendered = render_text(&answer(), &ctx(OutputFormat::Text, true, false));
        assert!(rendered.starts_with("Rust is a systems language."));
        assert!(rendered.contains("\nCitations:\n1. https://rust-lang.org"));
        assert!(rendered.contains("2. https://doc.rust-lang.org"));
        assert!(!rendered.contains("Related Questions:"));
    }

    #[test]
    fn test_text_no_citations_suppresses_section() {
        let rendered = render_text(&answer(), &ctx(OutputFormat::Text, false, false));
        assert_eq!(rendered, "Rust is a systems language.");
    }

    #[test]
    fn test_text_related_questions() {
        let rendered = render_text(&answer(), &ctx(OutputFormat::Text, false, true));
        assert!(rendered.contains("\nRelated Questions:\n• What is borrow checking?"));
    }

    #[test]
    fn test_json_reproduces_raw_body() {
        let raw = json!({"id": "abc", "choices": []});
        let rendered = render_raw(&raw, OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_compact_is_single_line() {
        let raw = json!({"id": "abc", "choices": []});
        let rendered = render_raw(&raw, OutputFormat::Compact);
        assert!(!rendered.contains('\n'));
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_raw_render_ignores_body_shape() {
        // A 2xx body without choices still renders verbatim.
        let raw = json!({"status": "ok"});
        let rendered = render_raw(&raw, OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, raw);
    }

    #[test]
    fn test_empty_sections_omitted_even_when_requested() {
        let bare = AnswerOutput {
            answer: "42".to_owned(),
            citations: vec![],
            related_questions: vec![],
        };
        let rendered = render_text(&bare, &ctx(OutputFormat::Text, true, true));
        assert_eq!(rendered, "42");
    }
}
