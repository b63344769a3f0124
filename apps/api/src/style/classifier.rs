//! Vibe Classifier: turns survey answers into a one-word style vibe and a celebrity match.
//!
//! The Gemini-backed classifier never fails: transport errors, timeouts, unexpected
//! response shapes and unparsable text all degrade to [`ClassificationResult::fallback`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::style::preferences::PreferenceSequence;
use crate::style::prompts::VIBE_PROMPT_TEMPLATE;

pub const FALLBACK_VIBE: &str = "elegant";
pub const FALLBACK_CELEBRITY: &str = "Zendaya";

/// Style vibe plus the celebrity whose jewelry matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub vibe: String,
    pub celebrity: String,
}

impl ClassificationResult {
    pub fn fallback() -> Self {
        Self {
            vibe: FALLBACK_VIBE.to_string(),
            celebrity: FALLBACK_CELEBRITY.to_string(),
        }
    }
}

/// Carried in `AppState` as `Arc<dyn VibeClassifier>`.
///
/// `Err` is reserved for faults that prevent any classification from being produced;
/// a bad answer from the model is not one of them.
#[async_trait]
pub trait VibeClassifier: Send + Sync {
    async fn classify(
        &self,
        preferences: &PreferenceSequence,
    ) -> Result<ClassificationResult, AppError>;
}

/// Classifier backed by a single text-generation call per request.
pub struct GeminiVibeClassifier {
    llm: LlmClient,
}

impl GeminiVibeClassifier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl VibeClassifier for GeminiVibeClassifier {
    async fn classify(
        &self,
        preferences: &PreferenceSequence,
    ) -> Result<ClassificationResult, AppError> {
        debug!(preferences = ?preferences.answers(), "Received user preferences");

        let prompt = build_prompt(preferences);

        let text = match self.llm.call_text(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Vibe classification call failed, using fallback: {e}");
                return Ok(ClassificationResult::fallback());
            }
        };
        debug!("Raw classification text: {text}");

        match parse_classification(&text) {
            Some(result) => {
                info!(vibe = %result.vibe, celebrity = %result.celebrity, "Classified style vibe");
                Ok(result)
            }
            None => {
                warn!(raw = %text, "Unparsable classification, using fallback");
                Ok(ClassificationResult::fallback())
            }
        }
    }
}

/// Builds the classification prompt: one `question: answer` line per preference, in order.
pub fn build_prompt(preferences: &PreferenceSequence) -> String {
    let user_answers = preferences
        .answers()
        .iter()
        .map(|p| format!("{}: {}", p.question, p.answer))
        .collect::<Vec<_>>()
        .join("\n");
    VIBE_PROMPT_TEMPLATE.replace("{user_answers}", &user_answers)
}

/// Best-effort extraction of `{vibe, celebrity}` from free-form model output.
///
/// Strips code fences, then falls back to the outermost `{...}` span when the model
/// wraps the object in prose. Blank fields count as a parse failure.
pub fn parse_classification(text: &str) -> Option<ClassificationResult> {
    let cleaned = strip_json_fences(text);

    let parsed = serde_json::from_str::<ClassificationResult>(cleaned)
        .ok()
        .or_else(|| {
            let start = cleaned.find('{')?;
            let end = cleaned.rfind('}')?;
            if end <= start {
                return None;
            }
            serde_json::from_str(&cleaned[start..=end]).ok()
        })?;

    if parsed.vibe.trim().is_empty() || parsed.celebrity.trim().is_empty() {
        return None;
    }
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::llm_client::LlmConfig;
    use crate::style::preferences::PreferenceCollector;
    use serde_json::json;

    const PATH: &str = "/models/gemini-2.0-flash:generateContent";

    fn preferences() -> PreferenceSequence {
        PreferenceCollector::from_answers(["Bold", "Party", "₹30k+"])
            .unwrap()
            .to_sequence()
            .unwrap()
    }

    fn classifier_for(base_url: String) -> GeminiVibeClassifier {
        let llm = LlmClient::new(LlmConfig {
            api_key: "test-key".to_string(),
            base_url,
            model: "gemini-2.0-flash".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        GeminiVibeClassifier::new(llm)
    }

    fn gemini_body(text: &str) -> String {
        json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}).to_string()
    }

    #[test]
    fn test_prompt_contains_every_pair_in_order() {
        let prompt = build_prompt(&preferences());
        let expected = "What's your jewelry style?: Bold\n\
                        What occasion are you shopping for?: Party\n\
                        Your budget range?: ₹30k+";
        assert!(prompt.contains(expected));
        assert!(prompt.contains("\"celebrity\": \"Celebrity Name\""));
        assert!(!prompt.contains("{user_answers}"));
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "```json\n{\"vibe\": \"bold\", \"celebrity\": \"Rihanna\"}\n```";
        let parsed = parse_classification(text).unwrap();
        assert_eq!(parsed.vibe, "bold");
        assert_eq!(parsed.celebrity, "Rihanna");
    }

    #[test]
    fn test_parse_object_wrapped_in_prose() {
        let text = "Sure! Here you go: {\"vibe\": \"minimal\", \"celebrity\": \"Zoë Kravitz\"} Enjoy.";
        let parsed = parse_classification(text).unwrap();
        assert_eq!(parsed.vibe, "minimal");
        assert_eq!(parsed.celebrity, "Zoë Kravitz");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let text = r#"{"vibe": "classic", "celebrity": "Audrey Hepburn", "reason": "pearls"}"#;
        assert_eq!(parse_classification(text).unwrap().vibe, "classic");
    }

    #[test]
    fn test_parse_rejects_missing_or_blank_fields() {
        assert!(parse_classification(r#"{"vibe": "bold"}"#).is_none());
        assert!(parse_classification(r#"{"vibe": " ", "celebrity": "Rihanna"}"#).is_none());
        assert!(parse_classification(r#"{"vibe": 3, "celebrity": "Rihanna"}"#).is_none());
        assert!(parse_classification("I think you are bold.").is_none());
        assert!(parse_classification("} backwards {").is_none());
    }

    #[tokio::test]
    async fn test_classify_returns_model_values() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(gemini_body(
                "```json\n{\"vibe\": \"glamorous\", \"celebrity\": \"Deepika Padukone\"}\n```",
            ))
            .create_async()
            .await;

        let result = classifier_for(server.url())
            .classify(&preferences())
            .await
            .unwrap();

        assert_eq!(result.vibe, "glamorous");
        assert_eq!(result.celebrity, "Deepika Padukone");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_classify_unparsable_text_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(gemini_body("You have a lovely, elegant style!"))
            .create_async()
            .await;

        let result = classifier_for(server.url())
            .classify(&preferences())
            .await
            .unwrap();
        assert_eq!(result, ClassificationResult::fallback());
    }

    #[tokio::test]
    async fn test_classify_error_status_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(500)
            .with_body("upstream broke")
            .create_async()
            .await;

        let result = classifier_for(server.url())
            .classify(&preferences())
            .await
            .unwrap();
        assert_eq!(result, ClassificationResult::fallback());
    }

    #[tokio::test]
    async fn test_classify_malformed_structure_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)
            .create_async()
            .await;

        let result = classifier_for(server.url())
            .classify(&preferences())
            .await
            .unwrap();
        assert_eq!(result, ClassificationResult::fallback());
    }

    #[tokio::test]
    async fn test_classify_unreachable_service_falls_back() {
        let result = classifier_for("http://127.0.0.1:1".to_string())
            .classify(&preferences())
            .await
            .unwrap();
        assert_eq!(result.vibe, FALLBACK_VIBE);
        assert_eq!(result.celebrity, FALLBACK_CELEBRITY);
    }

    #[tokio::test]
    async fn test_classify_timeout_falls_back() {
        // Accepts connections and never answers, so only the client timeout ends the call.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let llm = LlmClient::new(LlmConfig {
            api_key: "test-key".to_string(),
            base_url: format!("http://{addr}"),
            model: "gemini-2.0-flash".to_string(),
            timeout: Duration::from_millis(300),
        })
        .unwrap();

        let started = std::time::Instant::now();
        let result = GeminiVibeClassifier::new(llm)
            .classify(&preferences())
            .await
            .unwrap();

        assert_eq!(result, ClassificationResult::fallback());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
