//! # pdf2slides
//!
//! Batch-convert directories of PDF slide decks into per-page PNG images.
//!
//! ## Why this crate?
//!
//! Static slide viewers want plain `slideN.png` files they can load by
//! index. This crate walks configured (input directory → output
//! directory) pairs, rasterises every page of every PDF it finds via
//! pdfium, and writes sequentially numbered PNG files. One corrupt file,
//! missing directory, or failed write never takes down the rest of the
//! run.
//!
//! ## Pipeline Overview
//!
//! ```text
//! jobs (leftin→left, rightin→right, …)
//!  │
//!  ├─ 1. Discover  list *.pdf in the input directory (case-insensitive)
//!  ├─ 2. Render    rasterise pages via pdfium at 300 DPI (spawn_blocking)
//!  ├─ 3. Write     PNG-encode each page to outputDir/slide<i>.png
//!  └─ 4. Summarise per-document outcomes, per-job counts, run totals
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2slides::{run_batch, BatchConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults: leftin → left and rightin → right in the current
//!     // directory, 300 DPI, slide<i>.png naming.
//!     let config = BatchConfig::default();
//!     let summary = run_batch(&config).await?;
//!     eprintln!(
//!         "{}/{} documents converted, {} pages written",
//!         summary.total_succeeded(),
//!         summary.total_documents(),
//!         summary.total_pages_written()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Failure policy
//!
//! A run never fails because of its inputs. Corrupt PDFs, unreadable
//! directories, and write errors are recorded in the returned
//! [`BatchSummary`] and the batch moves on; [`run_batch`] only returns
//! `Err` for setup-level problems ([`Pdf2SlidesError`]).
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2slides` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2slides = { version = "0.2", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod summary;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{convert_document, process_directory, run_batch, run_batch_sync};
pub use config::{default_jobs, BatchConfig, BatchConfigBuilder, JobSpec, PageNaming};
pub use error::{DocumentError, Pdf2SlidesError};
pub use pipeline::render::{PageRenderer, PdfiumRenderer};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
pub use summary::{BatchSummary, DocumentOutcome, JobStatus, JobSummary};
