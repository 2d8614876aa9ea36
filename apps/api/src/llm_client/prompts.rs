// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Output language used when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Common instruction appended to every generation prompt.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: Use ONLY facts present in the user's data. \
    Do NOT invent employers, job titles, dates, degrees, projects, certifications, \
    metrics or any other detail that the data does not support. \
    If something is missing, leave it out.";

/// Returns the requested language, or `DEFAULT_LANGUAGE` when absent or blank.
pub fn resolve_language(language: Option<&str>) -> &str {
    language
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Sentence fixing the output language of a generation prompt.
pub fn language_instruction(language: &str) -> String {
    format!(
        "Write the entire output in {language}, translating the user's content where needed. \
        Keep proper nouns, company names and technology names unchanged."
    )
}

/// Substitutes `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text containing `{...}`
/// (LaTeX is full of it) comes through verbatim. Unknown braces are kept.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
