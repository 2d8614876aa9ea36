//! Professional summary generation — 2-4 sentences tailored to a job offer.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{NO_CURRENT_INFO, SUMMARY_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{
    fill_template, language_instruction, resolve_language, NO_FABRICATION_INSTRUCTION,
};
use crate::llm_client::TextGenerator;

/// Request body for `POST /api/generate-summary`.
///
/// `current_info` is free-form: a string is used as-is, any other JSON value is
/// embedded as pretty-printed JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    pub job_offer: Option<String>,
    pub current_info: Option<Value>,
    pub language: Option<String>,
}

impl SummaryRequest {
    pub fn current_info_text(&self) -> Option<String> {
        match self.current_info.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => serde_json::to_string_pretty(other).ok(),
        }
    }
}

/// Builds the summary prompt. A missing or blank `current_info` is marked as not provided.
pub fn build_summary_prompt(
    current_info: Option<&str>,
    job_offer: &str,
    language: &str,
) -> String {
    let language_rule = language_instruction(language);
    let current_info = current_info
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_CURRENT_INFO);

    fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("current_info", current_info),
            ("job_offer", job_offer.trim()),
            ("no_fabrication", NO_FABRICATION_INSTRUCTION),
            ("language_instruction", language_rule.as_str()),
        ],
    )
}

/// Generates a professional summary. The caller has already checked that
/// `job_offer` is non-empty.
pub async fn generate_summary(
    llm: &dyn TextGenerator,
    current_info: Option<&str>,
    job_offer: &str,
    language: Option<&str>,
) -> Result<String, AppError> {
    let language = resolve_language(language);
    let prompt = build_summary_prompt(current_info, job_offer, language);

    let summary = llm.generate(&prompt).await?;
    info!("Generated summary ({} chars, language={language})", summary.len());

    Ok(summary.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::llm_client::LlmError;

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok("\n  Seasoned Rust engineer with five years of backend work.  \n".to_string())
        }
    }

    #[test]
    fn test_prompt_embeds_both_texts_and_language() {
        let prompt = build_summary_prompt(
            Some("5 years Rust, built payment APIs"),
            "Senior Backend Engineer at a fintech",
            "Spanish",
        );
        assert!(prompt.contains("5 years Rust, built payment APIs"));
        assert!(prompt.contains("Senior Backend Engineer at a fintech"));
        assert!(prompt.contains("in Spanish"));
        assert!(!prompt.contains("{job_offer}"));
    }

    #[test]
    fn test_prompt_marks_missing_current_info() {
        let prompt = build_summary_prompt(None, "Data engineer", "English");
        assert!(prompt.contains(NO_CURRENT_INFO));

        let prompt = build_summary_prompt(Some("   "), "Data engineer", "English");
        assert!(prompt.contains(NO_CURRENT_INFO));
    }

    #[tokio::test]
    async fn test_generate_summary_trims_response() {
        let summary = generate_summary(&Echo, Some("info"), "job", None).await.unwrap();
        assert_eq!(summary, "Seasoned Rust engineer with five years of backend work.");
    }

    #[test]
    fn test_current_info_accepts_any_json_value() {
        let request: SummaryRequest =
            serde_json::from_str(r#"{"job_offer": "SRE", "current_info": ["Rust", "Go"]}"#)
                .unwrap();
        let text = request.current_info_text().unwrap();
        assert!(text.contains("\"Rust\""));
        assert!(text.contains("\"Go\""));

        let request: SummaryRequest =
            serde_json::from_str(r#"{"current_info": "5 years Rust"}"#).unwrap();
        assert_eq!(request.current_info_text().as_deref(), Some("5 years Rust"));

        let request: SummaryRequest = serde_json::from_str(r#"{"current_info": null}"#).unwrap();
        assert!(request.current_info_text().is_none());
    }

    #[test]
    fn test_summary_request_fields_are_optional() {
        let request: SummaryRequest = serde_json::from_str("{}").unwrap();
        assert!(request.job_offer.is_none());
        assert!(request.current_info.is_none());
        assert!(request.language.is_none());
    }
}
