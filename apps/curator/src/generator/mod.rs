//! Text generation seam — the single point through which curation obtains
//! model output.
//!
//! ARCHITECTURAL RULE: no other module may produce "model" text directly.
//! Everything goes through a `TextGenerator`, so swapping the shipped mock
//! for a live inference client later touches nothing but the seam.
//!
//! Only `MockGenerator` is shipped. The seam is deliberately synchronous:
//! no backend here performs I/O, so there is nothing to await.

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod mock;

pub use mock::MockGenerator;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("generator returned empty content")]
    EmptyContent,

    #[error("malformed model response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// A text-generation backend: prompt in, opaque reply out.
///
/// Implementations must be deterministic per input where possible — the
/// curation pipeline makes no retry attempts.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str, system: &str) -> Result<String, GeneratorError>;
}

/// Parses a model reply as JSON into `T`.
///
/// The reply must be instructed (via the prompt's output contract) to be a
/// single JSON object; markdown code fences are tolerated and stripped
/// since models wrap JSON in them anyway.
pub fn parse_json<T: DeserializeOwned>(reply: &str) -> Result<T, GeneratorError> {
    let text = strip_json_fences(reply);
    if text.is_empty() {
        return Err(GeneratorError::EmptyContent);
    }
    serde_json::from_str(text).map_err(GeneratorError::MalformedResponse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        key: String,
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_json_plain_object() {
        let probe: Probe = parse_json("{\"key\": \"value\"}").unwrap();
        assert_eq!(probe.key, "value");
    }

    #[test]
    fn test_parse_json_fenced_object() {
        let probe: Probe = parse_json("```json\n{\"key\": \"value\"}\n```").unwrap();
        assert_eq!(probe.key, "value");
    }

    #[test]
    fn test_parse_json_prose_is_malformed_response() {
        let result: Result<Probe, _> = parse_json("Here is your JSON: {\"key\": \"value\"}");
        assert!(matches!(result, Err(GeneratorError::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_json_blank_reply_is_empty_content() {
        let result: Result<Probe, _> = parse_json("   \n  ");
        assert!(matches!(result, Err(GeneratorError::EmptyContent)));
    }
}
