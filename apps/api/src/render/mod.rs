// LaTeX → PDF rendering.
// Each compilation runs in its own scratch directory; the PDF is returned by value
// so concurrent requests never share an output file.

pub mod pdflatex;
pub mod resolve;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use pdflatex::PdfLatexCompiler;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No LaTeX compiler found: {0}")]
    CompilerNotFound(String),

    #[error("LaTeX compiler at {path} did not respond to --version")]
    CompilerUnresponsive { path: String },

    #[error("LaTeX compilation failed ({status}): {log_tail}")]
    CompilationFailed { status: String, log_tail: String },

    #[error("LaTeX compilation timed out after {0}s")]
    Timeout(u64),

    #[error("Compiler produced no PDF")]
    MissingOutput,

    #[error("I/O error during compilation: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// True when no usable compiler exists, as opposed to a compiler that ran and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RenderError::CompilerNotFound(_) | RenderError::CompilerUnresponsive { .. }
        )
    }
}

/// A compiled PDF, owned by the request that produced it.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub pdf: Bytes,
}

#[async_trait]
pub trait DocumentCompiler: Send + Sync {
    async fn compile(&self, source: &str) -> Result<RenderedDocument, RenderError>;
}
