/// Typed extraction from the chat-completions response body.
use serde::Deserialize;
use serde_json::Value;

use super::errors::PplxError;
use crate::types::AnswerOutput;

/// The slice of the response body this tool cares about. Everything else
/// (usage, timestamps, ids) stays in the raw value for `--json` output.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    citations: Vec<String>,
    #[serde(default)]
    related_questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Extract the first choice's answer plus citation / related-question lists.
///
/// # Errors
///
/// Returns `PplxError::MalformedResponse` when the body does not match the
/// chat-completions shape or carries no choices.
pub fn extract(raw: &Value) -> Result<AnswerOutput, PplxError> {
    let parsed: ChatResponse =
        serde_json::from_value(raw.clone()).map_err(|e| PplxError::MalformedResponse {
            detail: e.to_string(),
        })?;

    let answer = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PplxError::MalformedResponse {
            detail: "response has no choices".to_owned(),
        })?
        .message
        .content;

    Ok(AnswerOutput {
        answer,
        citations: parsed.citations,
        related_questions: parsed.related_questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_first_choice() {
        let raw = json!({
            "id": "resp-1",
            "choices": [
                {"message": {"role": "assistant", "content": "First."}},
                {"message": {"role": "assistant", "content": "Second."}}
            ],
            "citations": ["https://example.com"],
            "related_questions": ["And then?"]
        });
        let out = extract(&raw).unwrap();
        assert_eq!(out.answer, "First.");
        assert_eq!(out.citations, vec!["https://example.com"]);
        assert_eq!(out.related_questions, vec!["And then?"]);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let raw = json!({
            "choices": [{"message": {"role": "assistant", "content": "Answer."}}]
        });
        let out = extract(&raw).unwrap();
        assert!(out.citations.is_empty());
        assert!(out.related_questions.is_empty());
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let raw = json!({"choices": []});
        let err = extract(&raw).unwrap_err();
        assert!(matches!(err, PplxError::MalformedResponse { .. }));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let raw = json!({"choices": [{"text": "no message field"}]});
        let err = extract(&raw).unwrap_err();
        assert!(matches!(err, PplxError::MalformedResponse { .. }));
    }
}
