//! LaTeX CV generation.
//!
//! Flow: load template (disk or bundled) → build prompt (template + user JSON + rules) →
//!       LLM generate → strip code fences → LaTeX source.
//!
//! The "no fabrication" and "start with \documentclass" contracts are prompt-level
//! instructions. The only local check is a warning when the output looks wrong.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::CV_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{
    fill_template, language_instruction, resolve_language, NO_FABRICATION_INSTRUCTION,
};
use crate::llm_client::{strip_code_fences, TextGenerator};

/// Template compiled into the binary, used when no template path is configured.
pub const BUNDLED_TEMPLATE: &str = include_str!("../../templates/cv_template.tex");

/// Sections the template has a placeholder for. Any of these that is absent or
/// blank in the request is named explicitly in the prompt as one to omit.
pub const KNOWN_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "projects",
    "skills",
    "certifications",
    "languages",
];

/// Request body for `POST /api/generate-cv`: any JSON object, plus an optional
/// output `language`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CvRequest {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// True for values that carry no content: null, blank strings, and arrays or
/// objects whose members are all blank.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.iter().all(is_blank),
        Value::Object(map) => map.values().all(is_blank),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Known sections with no usable data in `fields`, in `KNOWN_SECTIONS` order.
pub fn missing_sections(fields: &Map<String, Value>) -> Vec<&'static str> {
    KNOWN_SECTIONS
        .iter()
        .copied()
        .filter(|section| fields.get(*section).map_or(true, is_blank))
        .collect()
}

fn omission_instruction(missing: &[&str]) -> String {
    if missing.is_empty() {
        return "Every standard section has data in the input.".to_string();
    }
    format!(
        "The user data contains NO information for these sections: {}. \
        Remove each of them entirely (heading, placeholder and list environment). \
        Do NOT create any entry for them.",
        missing.join(", ")
    )
}

/// Reads the LaTeX template. Read on every request so edits apply without a restart.
pub async fn load_template(path: &Path) -> Result<String, AppError> {
    let template = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read CV template {}", path.display()))?;
    Ok(template)
}

/// Builds the full CV prompt for `request` around `template`.
pub fn build_cv_prompt(template: &str, request: &CvRequest) -> Result<String, AppError> {
    let user_data = serde_json::to_string_pretty(&request.fields)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize CV data: {e}")))?;

    let language = resolve_language(request.language.as_deref());
    let language_rule = language_instruction(language);
    let omission_rule = omission_instruction(&missing_sections(&request.fields));

    Ok(fill_template(
        CV_PROMPT_TEMPLATE,
        &[
            ("template", template),
            ("user_data", user_data.as_str()),
            ("omission_instruction", omission_rule.as_str()),
            ("no_fabrication", NO_FABRICATION_INSTRUCTION),
            ("language_instruction", language_rule.as_str()),
        ],
    ))
}

/// Generates the LaTeX source of a CV from the template at `template_path`, or
/// from `BUNDLED_TEMPLATE` when no path is given.
pub async fn generate_cv_latex(
    llm: &dyn TextGenerator,
    template_path: Option<&Path>,
    request: &CvRequest,
) -> Result<String, AppError> {
    let template = match template_path {
        Some(path) => load_template(path).await?,
        None => BUNDLED_TEMPLATE.to_string(),
    };
    let prompt = build_cv_prompt(&template, request)?;

    let missing = missing_sections(&request.fields);
    if !missing.is_empty() {
        info!("CV request has no data for: {}", missing.join(", "));
    }

    let response = llm.generate(&prompt).await?;
    let latex = strip_code_fences(&response).to_string();

    if !latex.starts_with("\\documentclass") {
        warn!(
            "Generated LaTeX does not start with \\documentclass: {:?}",
            latex.chars().take(60).collect::<String>()
        );
    }

    info!("Generated CV LaTeX ({} chars)", latex.len());
    Ok(latex)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
