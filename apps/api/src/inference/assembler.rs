//! Prompt Assembler — builds the single generation prompt and makes the one
//! call to the text generator.

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::inference::prompts::TAG_INFERENCE_PROMPT_TEMPLATE;
use crate::llm_client::{LlmError, TextGenerator};

/// Fills `{profile}`, `{context}` and `{tags}` in one pass over the template.
/// Substituted text is never rescanned, so placeholder-like text inside the
/// profile or the documents is passed through verbatim.
pub fn build_prompt(profile_text: &str, context_text: &str, tags: &[&str]) -> String {
    let tag_list = tags.join(", ");
    let slots = [
        ("{profile}", profile_text),
        ("{context}", context_text),
        ("{tags}", tag_list.as_str()),
    ];

    let extra: usize = slots.iter().map(|(_, value)| value.len()).sum();
    let mut prompt = String::with_capacity(TAG_INFERENCE_PROMPT_TEMPLATE.len() + extra);
    let mut rest = TAG_INFERENCE_PROMPT_TEMPLATE;
    while let Some(open) = rest.find('{') {
        prompt.push_str(&rest[..open]);
        rest = &rest[open..];
        match slots.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                prompt.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                prompt.push('{');
                rest = &rest[1..];
            }
        }
    }
    prompt.push_str(rest);
    prompt
}

/// Invokes the generator once, without retry.
///
/// A missing API key is a configuration fault and is returned as an error.
/// Any other failure is logged and reported as `Ok(None)`.
pub async fn generate_tag_text(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    match generator.generate(prompt).await {
        Ok(Some(text)) => {
            info!("Generator returned {} chars", text.chars().count());
            Ok(Some(text))
        }
        Ok(None) => {
            warn!("Generator returned no usable content");
            Ok(None)
        }
        Err(LlmError::MissingApiKey) => {
            error!("Generator is not configured: OPENAI_API_KEY is not set");
            Err(AppError::Configuration(LlmError::MissingApiKey.to_string()))
        }
        Err(e) => {
            error!("Generator call failed: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::tags::CANONICAL_TAGS;
    use crate::test_support::{StubGenerator, StubReply};

    #[test]
    fn test_prompt_embeds_profile_context_and_tags() {
        let prompt = build_prompt("PROFILE-BLOCK", "CONTEXT-BLOCK", CANONICAL_TAGS);
        assert!(prompt.contains("--- 인재 프로필 시작 ---\nPROFILE-BLOCK\n--- 인재 프로필 끝 ---"));
        assert!(prompt.contains("CONTEXT-BLOCK"));
        assert!(prompt.contains(&format!("경험 태그 목록: {}", CANONICAL_TAGS.join(", "))));
        assert!(!prompt.contains("{profile}"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{tags}"));
    }

    #[test]
    fn test_placeholder_text_in_inputs_is_not_expanded() {
        let profile = "summary mentions {tags} and {context}";
        let context = "자료 1 출처: news: {tags} {profile}";
        let prompt = build_prompt(profile, context, &["IPO", "M&A 경험"]);

        assert!(prompt.contains(
            "--- 인재 프로필 시작 ---\nsummary mentions {tags} and {context}\n--- 인재 프로필 끝 ---"
        ));
        assert!(prompt.contains("자료 1 출처: news: {tags} {profile}"));
        assert!(prompt.contains("경험 태그 목록: IPO, M&A 경험"));
        assert_eq!(prompt.matches("{tags}").count(), 2);
    }

    #[test]
    fn test_prompt_carries_output_rules() {
        let prompt = build_prompt("p", "c", &["IPO"]);
        assert!(prompt.contains("\"- 경험 태그명 (근거)\""));
        assert!(prompt.contains("쉼표로 연결 금지"));
        assert!(prompt.contains("\"상위권 대학교\" 태그 규칙"));
        assert!(prompt.contains("\"IPO\", \"M&A 경험\", \"신규 투자 유치 경험\""));
    }

    #[tokio::test]
    async fn test_generator_text_is_passed_through() {
        let generator = StubGenerator::replying("- IPO (x)");
        let text = generate_tag_text(&generator, "prompt").await.unwrap();
        assert_eq!(text.as_deref(), Some("- IPO (x)"));
        assert_eq!(generator.prompts(), vec!["prompt".to_string()]);
    }

    #[tokio::test]
    async fn test_generator_failure_becomes_none() {
        let generator = StubGenerator::new(StubReply::Fail);
        assert!(generate_tag_text(&generator, "prompt").await.unwrap().is_none());
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_generator_empty_reply_is_none() {
        let generator = StubGenerator::new(StubReply::Nothing);
        assert!(generate_tag_text(&generator, "prompt").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_a_configuration_error() {
        let generator = StubGenerator::new(StubReply::MissingKey);
        let err = generate_tag_text(&generator, "prompt").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
