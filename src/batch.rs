//! Batch entry points: document → directory → whole run.
//!
//! Control flow follows the historical tool exactly: one page is written
//! before the next is encoded, one document finishes before the next
//! starts, one job finishes before the next starts, and the second job
//! runs even when the first found nothing or failed. Nothing here is
//! concurrent; the async surface exists so pdfium work can sit on the
//! blocking pool and filesystem writes on tokio's I/O primitives.
//!
//! Per-document failures never propagate as `Err`. They are recorded in
//! [`DocumentOutcome::error`] and counted in the [`JobSummary`]; the only
//! fatal errors a `run_batch` caller can see are setup-level
//! ([`Pdf2SlidesError`]).

use crate::config::{BatchConfig, JobSpec};
use crate::error::Pdf2SlidesError;
use crate::pipeline::discover::{discover_pdfs, document_stem};
use crate::pipeline::render::{render_document, PageRenderer, PdfiumRenderer};
use crate::pipeline::write::{ensure_output_dir, write_page};
use crate::summary::{BatchSummary, DocumentOutcome, JobStatus, JobSummary};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Use the injected renderer when the caller supplied one, else the
/// pdfium-backed default. Mirrors the pre-built-provider slot: tests
/// inject mocks, production leaves it unset.
fn resolve_renderer(config: &BatchConfig) -> Arc<dyn PageRenderer> {
    match config.renderer {
        Some(ref renderer) => Arc::clone(renderer),
        None => Arc::new(PdfiumRenderer::new()),
    }
}

/// Convert one PDF into per-page PNG files under `output_dir`.
///
/// Ensures the output directory exists, renders every page at
/// `config.dpi`, and writes them sequentially under the configured naming
/// scheme, overwriting existing files. Every failure is captured in the
/// returned [`DocumentOutcome`]; pages written before a failure stay on
/// disk.
///
/// # Errors
/// `Err` only for fatal conditions (a panicked render task). Corrupt
/// PDFs, missing backends, and I/O failures all land in
/// [`DocumentOutcome::error`].
pub async fn convert_document(
    pdf_path: &Path,
    output_dir: &Path,
    config: &BatchConfig,
) -> Result<DocumentOutcome, Pdf2SlidesError> {
    let start = Instant::now();
    let stem = document_stem(pdf_path);
    info!("Converting {} to PNG images", pdf_path.display());

    if let Some(ref cb) = config.progress_callback {
        cb.on_document_start(pdf_path);
    }

    let fail = |pages_written: usize, error, start: Instant| DocumentOutcome {
        pdf_path: pdf_path.to_path_buf(),
        pages_written,
        error: Some(error),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    if let Err(e) = ensure_output_dir(output_dir).await {
        warn!("Error converting {}: {}", pdf_path.display(), e);
        if let Some(ref cb) = config.progress_callback {
            cb.on_document_error(pdf_path, e.to_string());
        }
        return Ok(fail(0, e, start));
    }

    let renderer = resolve_renderer(config);
    let pages = match render_document(renderer, pdf_path, config.dpi).await? {
        Ok(pages) => pages,
        Err(e) => {
            warn!("Error converting {}: {}", pdf_path.display(), e);
            if let Some(ref cb) = config.progress_callback {
                cb.on_document_error(pdf_path, e.to_string());
            }
            return Ok(fail(0, e, start));
        }
    };

    let total_pages = pages.len();
    info!("Found {} pages in {}", total_pages, stem);
    if let Some(ref cb) = config.progress_callback {
        cb.on_document_loaded(pdf_path, total_pages);
    }

    let mut pages_written = 0;
    for (idx, image) in pages.iter().enumerate() {
        let page_num = idx + 1;
        let file_name = config.page_naming.file_name(&stem, page_num);
        match write_page(image, output_dir, &file_name, page_num).await {
            Ok(output_path) => {
                pages_written += 1;
                info!(
                    "Saved page {}/{} to {}",
                    page_num,
                    total_pages,
                    output_path.display()
                );
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_written(page_num, total_pages, &output_path);
                }
            }
            Err(e) => {
                warn!("Error converting {}: {}", pdf_path.display(), e);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_document_error(pdf_path, e.to_string());
                }
                return Ok(fail(pages_written, e, start));
            }
        }
    }

    info!("Conversion of {} completed", pdf_path.display());
    if let Some(ref cb) = config.progress_callback {
        cb.on_document_complete(pdf_path, pages_written);
    }

    Ok(DocumentOutcome {
        pdf_path: pdf_path.to_path_buf(),
        pages_written,
        error: None,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Convert every PDF in `job.input_dir` into `job.output_dir`.
///
/// A missing or unreadable input directory, or one holding no PDF files,
/// yields a summary with the corresponding [`JobStatus`] and no output
/// directory mutation. Documents are processed in filesystem enumeration
/// order, each failure recorded and skipped past.
pub async fn process_directory(
    job: &JobSpec,
    config: &BatchConfig,
) -> Result<JobSummary, Pdf2SlidesError> {
    info!(
        "Processing directory: {} -> {}",
        job.input_dir.display(),
        job.output_dir.display()
    );
    if let Some(ref cb) = config.progress_callback {
        cb.on_job_start(&job.input_dir, &job.output_dir);
    }

    let summary = |status, documents| JobSummary {
        input_dir: job.input_dir.clone(),
        output_dir: job.output_dir.clone(),
        status,
        documents,
    };

    let pdfs = match discover_pdfs(&job.input_dir) {
        Ok(pdfs) => pdfs,
        Err(e) => {
            warn!("Cannot read {}: {}", job.input_dir.display(), e);
            if let Some(ref cb) = config.progress_callback {
                cb.on_no_documents(&job.input_dir);
            }
            return Ok(summary(JobStatus::InputDirUnreadable(e.to_string()), vec![]));
        }
    };

    if pdfs.is_empty() {
        info!("No PDF files found in {}", job.input_dir.display());
        if let Some(ref cb) = config.progress_callback {
            cb.on_no_documents(&job.input_dir);
        }
        return Ok(summary(JobStatus::NoPdfsFound, vec![]));
    }

    let mut documents = Vec::with_capacity(pdfs.len());
    for pdf_path in &pdfs {
        let outcome = convert_document(pdf_path, &job.output_dir, config).await?;
        documents.push(outcome);
    }

    let job_summary = summary(JobStatus::Completed, documents);
    info!(
        "Job {} complete: {} succeeded, {} failed",
        job.input_dir.display(),
        job_summary.succeeded(),
        job_summary.failed()
    );
    if let Some(ref cb) = config.progress_callback {
        cb.on_job_complete(&job.input_dir, job_summary.succeeded(), job_summary.failed());
    }

    Ok(job_summary)
}

/// Run every configured job in order, unconditionally.
///
/// This is the primary entry point for the library. It returns
/// `Ok(BatchSummary)` even when every document failed or every directory
/// was empty; inspect the summary for partial failures.
pub async fn run_batch(config: &BatchConfig) -> Result<BatchSummary, Pdf2SlidesError> {
    let start = Instant::now();
    let mut jobs = Vec::with_capacity(config.jobs.len());

    for job in &config.jobs {
        let summary = process_directory(job, config).await?;
        jobs.push(summary);
    }

    let batch = BatchSummary {
        jobs,
        total_duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Batch complete: {}/{} documents converted, {} pages written, {}ms",
        batch.total_succeeded(),
        batch.total_documents(),
        batch.total_pages_written(),
        batch.total_duration_ms
    );

    Ok(batch)
}

/// Synchronous wrapper around [`run_batch`].
///
/// Creates a temporary tokio runtime internally.
pub fn run_batch_sync(config: &BatchConfig) -> Result<BatchSummary, Pdf2SlidesError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2SlidesError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(run_batch(config))
}
