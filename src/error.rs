//! Error types for the pdf2slides library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2SlidesError`] is **fatal**: the batch cannot be set up at all
//!   (invalid configuration, pdfium library missing). Returned as
//!   `Err(Pdf2SlidesError)` from the top-level `run_batch*` functions.
//!
//! * [`DocumentError`] is **non-fatal**: a single document failed (corrupt
//!   file, render glitch, disk error) but the rest of the batch is fine.
//!   Stored inside [`crate::summary::DocumentOutcome`] so callers can
//!   inspect partial failures rather than losing the whole run to one bad
//!   file.
//!
//! The split preserves the original tool's policy that no per-document
//! error ever fails the run, while making every failure visible as a
//! value.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2slides library.
///
/// Document-level failures use [`DocumentError`] and are stored in
/// [`crate::summary::DocumentOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Pdf2SlidesError {
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Install pdfium (https://github.com/bblanchon/pdfium-binaries) next to the \
binary, under /opt/pdfium/lib, or on the system library path."
    )]
    PdfiumBindingFailed(String),

    /// Unexpected internal error (e.g. a blocking render task panicked).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single source document.
///
/// Stored in [`crate::summary::DocumentOutcome`] when a document fails.
/// The batch always continues with the next document. Details are plain
/// strings so outcomes stay `Clone` and serialisable.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum DocumentError {
    /// pdfium could not open or parse the file.
    #[error("Failed to open '{}': {detail}", path.display())]
    OpenFailed { path: PathBuf, detail: String },

    /// pdfium returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// The output directory could not be created.
    #[error("Failed to create output directory '{}': {detail}", path.display())]
    CreateOutputDir { path: PathBuf, detail: String },

    /// A rendered page could not be encoded or written to disk.
    #[error("Failed to write page {page} to '{}': {detail}", path.display())]
    WriteFailed {
        page: usize,
        path: PathBuf,
        detail: String,
    },
}
