//! Input discovery: enumerate a directory and keep the PDF files.
//!
//! The extension match is case-insensitive (`deck.PDF` counts) and applies
//! to the file name only. Entries come back in whatever order the
//! filesystem returns them; the order is deliberately left unspecified,
//! matching the historical behaviour that downstream consumers may rely
//! on.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the PDF files in `input_dir`, in filesystem enumeration order.
///
/// Returns `Err` when the directory itself cannot be enumerated (missing,
/// unreadable); the caller records that as a job-level condition rather
/// than propagating it.
pub fn discover_pdfs(input_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut pdfs = Vec::new();

    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_pdf_extension(&path) {
            pdfs.push(path);
        }
    }

    debug!("Found {} PDF file(s) in {}", pdfs.len(), input_dir.display());
    Ok(pdfs)
}

/// Whether the file name, lowercased, ends in `.pdf`.
fn has_pdf_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}

/// The file name without its final extension, used for logging and for
/// [`crate::config::PageNaming::DocumentPrefixed`] output names.
pub fn document_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string()
}
