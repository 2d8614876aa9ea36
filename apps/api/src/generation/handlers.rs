//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::cv::{generate_cv_latex, CvRequest};
use crate::generation::summary::{generate_summary, SummaryRequest};
use crate::render::RenderedDocument;
use crate::state::AppState;

pub const PDF_FILENAME: &str = "cv.pdf";

const COMPILER_UNAVAILABLE_WARNING: &str =
    "PDF generation failed (pdflatex might be missing). Here is the LaTeX code.";
const COMPILATION_FAILED_WARNING: &str =
    "PDF generation failed (the LaTeX did not compile). Here is the LaTeX code.";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Returned instead of a PDF when compilation is unavailable or fails.
#[derive(Debug, Serialize)]
pub struct LatexFallbackResponse {
    pub warning: String,
    pub latex_code: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-summary
///
/// Returns a 2-4 sentence professional summary tailored to `job_offer`.
/// A missing or blank `job_offer` is rejected before any LLM call.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Json(request) = payload?;
    let job_offer = request
        .job_offer
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Job offer/Objective is required".to_string()))?;

    let current_info = request.current_info_text();
    let summary = generate_summary(
        state.llm.as_ref(),
        current_info.as_deref(),
        job_offer,
        request.language.as_deref(),
    )
    .await?;

    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/generate-cv
///
/// Generates LaTeX from the CV fields and compiles it. Responds with the PDF as
/// an attachment, or with `{warning, latex_code}` when no PDF could be produced.
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    payload: Result<Json<CvRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let span = tracing::info_span!("generate_cv", request_id = %Uuid::new_v4());
    generate_cv_response(state, request).instrument(span).await
}

async fn generate_cv_response(state: AppState, request: CvRequest) -> Result<Response, AppError> {
    let latex = generate_cv_latex(
        state.llm.as_ref(),
        state.config.cv_template_path.as_deref(),
        &request,
    )
    .await?;

    let compiled = state.compiler.compile(&latex).await;
    match compiled {
        Ok(document) => Ok(pdf_attachment(document)),
        Err(e) => {
            warn!("Returning LaTeX source instead of PDF: {e}");
            let warning = if e.is_unavailable() {
                COMPILER_UNAVAILABLE_WARNING
            } else {
                COMPILATION_FAILED_WARNING
            };
            Ok(Json(LatexFallbackResponse {
                warning: warning.to_string(),
                latex_code: latex,
            })
            .into_response())
        }
    }
}

fn pdf_attachment(document: RenderedDocument) -> Response {
    info!("Sending {PDF_FILENAME} ({} bytes)", document.pdf.len());
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        document.pdf,
    )
        .into_response()
}
