//! `pdflatex` driver — one non-interactive pass per document, inside a scratch directory.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::render::resolve::resolve_compiler;
use crate::render::{DocumentCompiler, RenderError, RenderedDocument};

const TEX_FILE: &str = "cv.tex";
const PDF_FILE: &str = "cv.pdf";
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
/// Lines of compiler output kept in the error when a run fails.
const LOG_TAIL_LINES: usize = 20;

pub struct PdfLatexCompiler {
    override_path: Option<PathBuf>,
    timeout: Duration,
}

impl PdfLatexCompiler {
    pub fn new(override_path: Option<PathBuf>, timeout: Duration) -> Self {
        Self {
            override_path,
            timeout,
        }
    }

    /// Resolves the compiler and checks that it answers `--version`.
    pub async fn probe(&self) -> Result<PathBuf, RenderError> {
        let path = resolve_compiler(self.override_path.as_deref())?;

        let status = Command::new(&path)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        match tokio::time::timeout(PROBE_TIMEOUT, status).await {
            Ok(Ok(status)) if status.success() => {
                debug!("LaTeX compiler probe ok: {}", path.display());
                Ok(path)
            }
            _ => Err(RenderError::CompilerUnresponsive {
                path: path.display().to_string(),
            }),
        }
    }
}

#[async_trait]
impl DocumentCompiler for PdfLatexCompiler {
    async fn compile(&self, source: &str) -> Result<RenderedDocument, RenderError> {
        let compiler = self.probe().await?;

        // Removed when dropped at the end of this call, whatever the outcome.
        let scratch = tempfile::Builder::new().prefix("cvgen-").tempdir()?;
        let tex_path = scratch.path().join(TEX_FILE);
        tokio::fs::write(&tex_path, source).await?;

        let run = Command::new(&compiler)
            .arg("-interaction=nonstopmode")
            .arg("-output-directory")
            .arg(scratch.path())
            .arg(&tex_path)
            .current_dir(scratch.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| RenderError::Timeout(self.timeout.as_secs()))??;

        if !output.status.success() {
            let log_tail = tail(&output.stdout, LOG_TAIL_LINES);
            warn!("LaTeX compilation failed with {}", output.status);
            return Err(RenderError::CompilationFailed {
                status: output.status.to_string(),
                log_tail,
            });
        }

        let pdf = match tokio::fs::read(scratch.path().join(PDF_FILE)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RenderError::MissingOutput)
            }
            Err(e) => return Err(e.into()),
        };

        info!("Compiled CV PDF ({} bytes)", pdf.len());
        Ok(RenderedDocument {
            pdf: Bytes::from(pdf),
        })
    }
}

/// Last `lines` lines of process output, lossily decoded.
fn tail(output: &[u8], lines: usize) -> String {
    let text = String::from_utf8_lossy(output);
    let all: Vec<&str> = text.lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}
