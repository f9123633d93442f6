//! File ingestion: validate a path, read it, and describe what was read.
//!
//! Blocking; the controller always calls this from a background task.

use crate::error::{IngestError, Result};
use crate::file_utils;
use crate::state::FileStats;
use log::debug;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Text and stats produced by one ingestion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingested {
    pub text: String,
    pub stats: FileStats,
}

/// Validates and reads a document from disk.
pub fn ingest_file(path: &Path) -> Result<Ingested> {
    validate(path)?;

    let start = Instant::now();
    let text = fs::read_to_string(path)?;
    let elapsed = start.elapsed();

    debug!("Read {} bytes from {} in {:?}", text.len(), path.display(), elapsed);

    let stats = FileStats {
        file_path: path.display().to_string(),
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_size: format_size(text.len()),
        file_read_time: format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0),
        file_lines: file_utils::count_lines(&text).to_string(),
    };

    Ok(Ingested { text, stats })
}

fn validate(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(IngestError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    if !metadata.is_file() {
        return Err(IngestError::NotAFile(path.to_path_buf()));
    }

    if !file_utils::has_supported_extension(path) {
        return Err(IngestError::UnsupportedExtension(path.to_path_buf()));
    }

    Ok(())
}

fn format_size(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}
