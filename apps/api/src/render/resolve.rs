//! Compiler lookup: explicit override first, then the `PATH`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::render::RenderError;

/// Executable searched for on `PATH` when no override is configured.
pub const DEFAULT_COMPILER: &str = "pdflatex";

/// Resolves the compiler executable.
///
/// An override may be an absolute/relative path or a bare program name; bare
/// names are looked up on `PATH` like the default.
pub fn resolve_compiler(override_path: Option<&Path>) -> Result<PathBuf, RenderError> {
    let path_var = std::env::var_os("PATH");
    resolve_with_path(override_path, path_var.as_deref())
}

fn resolve_with_path(
    override_path: Option<&Path>,
    path_var: Option<&OsStr>,
) -> Result<PathBuf, RenderError> {
    match override_path {
        Some(path) if path.components().count() > 1 => {
            if is_executable(path) {
                debug!("Using configured LaTeX compiler at {}", path.display());
                Ok(path.to_path_buf())
            } else {
                Err(RenderError::CompilerNotFound(format!(
                    "configured compiler {} is not an executable file",
                    path.display()
                )))
            }
        }
        Some(name) => lookup(name.as_os_str(), path_var),
        None => lookup(OsStr::new(DEFAULT_COMPILER), path_var),
    }
}

fn lookup(name: &OsStr, path_var: Option<&OsStr>) -> Result<PathBuf, RenderError> {
    let path_var =
        path_var.ok_or_else(|| RenderError::CompilerNotFound("PATH is not set".to_string()))?;
    find_in_path(name, path_var).ok_or_else(|| {
        RenderError::CompilerNotFound(format!("{} is not on PATH", name.to_string_lossy()))
    })
}

/// Returns the first entry of `path_var` containing an executable called `name`.
pub fn find_in_path(name: &OsStr, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &OsStr) -> Vec<PathBuf> {
    let plain = dir.join(name);
    let mut exe = plain.clone().into_os_string();
    exe.push(".exe");
    vec![PathBuf::from(exe), plain]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &OsStr) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
