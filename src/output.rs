//! Writing resolved documents for the build tool.
//!
//! Writes go through a temporary file in the target directory that is
//! synced and then renamed over the target, so a reader never observes a
//! half-written document. On a crash a `.{filename}.tmp` file may remain.

use crate::document::ConfigDocument;
use crate::error::{Result, StyleError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Serialization format for a resolved document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render a document in the requested format.
pub fn render(doc: &ConfigDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => doc.to_json().map(|mut json| {
            json.push('\n');
            json
        }),
        OutputFormat::Yaml => doc.to_yaml(),
    }
}

/// Render a document and atomically write it to `path`.
pub fn write_document<P: AsRef<Path>>(
    path: P,
    doc: &ConfigDocument,
    format: OutputFormat,
) -> Result<()> {
    atomic_write(path.as_ref(), render(doc, format)?.as_bytes())
}

/// Atomically write bytes to a file, creating parent directories.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The bytes to write
///
/// # Errors
///
/// Returns `StyleError::UserError` if the parent directory cannot be
/// created or the temporary file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            StyleError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    // rename() replaces the destination on both POSIX and Windows.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StyleError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StyleError::UserError("invalid output file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        StyleError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).and_then(|()| file.sync_all()).map_err(|e| {
        let _ = fs::remove_file(path);
        StyleError::UserError(format!("failed to write temporary file: {}", e))
    })
}
