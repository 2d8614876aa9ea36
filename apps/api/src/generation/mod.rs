// CV generation: professional summaries and full LaTeX documents.
// Language is a first-class optional parameter on both paths (default: English).
// All LLM calls go through llm_client::TextGenerator — no direct Gemini calls here.

pub mod cv;
pub mod handlers;
pub mod prompts;
pub mod summary;
