//! Progress-callback trait for per-document and per-page batch events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::BatchConfigBuilder::progress_callback`] to receive
//! events as the batch works through directories, documents, and pages.
//! The events map one-to-one onto the lines the original script printed;
//! the CLI forwards them to a terminal progress bar, and tests count them.
//!
//! All methods have default no-op implementations so callers only override
//! what they care about. The trait is `Send + Sync` because document
//! rendering runs on a blocking worker thread.

use std::path::Path;
use std::sync::Arc;

/// Called by the batch as it processes each job, document, and page.
pub trait BatchProgressCallback: Send + Sync {
    /// A job (directory pair) is starting.
    fn on_job_start(&self, input_dir: &Path, output_dir: &Path) {
        let _ = (input_dir, output_dir);
    }

    /// The input directory held no PDF files (or could not be read).
    fn on_no_documents(&self, input_dir: &Path) {
        let _ = input_dir;
    }

    /// A document conversion is starting.
    fn on_document_start(&self, pdf_path: &Path) {
        let _ = pdf_path;
    }

    /// The document was opened and rendered; `total_pages` pages follow.
    fn on_document_loaded(&self, pdf_path: &Path, total_pages: usize) {
        let _ = (pdf_path, total_pages);
    }

    /// Page `page_num` of `total_pages` (both 1-indexed counts) was written
    /// to `output_path`.
    fn on_page_written(&self, page_num: usize, total_pages: usize, output_path: &Path) {
        let _ = (page_num, total_pages, output_path);
    }

    /// Every page of the document was written successfully.
    fn on_document_complete(&self, pdf_path: &Path, pages_written: usize) {
        let _ = (pdf_path, pages_written);
    }

    /// The document failed; `error` is the human-readable description.
    /// Pages written before the failure stay on disk.
    fn on_document_error(&self, pdf_path: &Path, error: String) {
        let _ = (pdf_path, error);
    }

    /// All documents in the job have been attempted.
    fn on_job_complete(&self, input_dir: &Path, succeeded: usize, failed: usize) {
        let _ = (input_dir, succeeded, failed);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in
/// [`crate::config::BatchConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;
