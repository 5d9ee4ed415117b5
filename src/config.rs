//! Configuration types for batch PDF-to-PNG conversion.
//!
//! All batch behaviour is controlled through [`BatchConfig`], built via its
//! [`BatchConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to share configs across calls, log them, and diff two runs to understand
//! why their outputs differ.
//!
//! The defaults reproduce the historical behaviour exactly: two jobs
//! (`leftin` → `left`, `rightin` → `right`) resolved against the current
//! directory, 300 DPI, flat `slide<i>.png` naming.

use crate::error::Pdf2SlidesError;
use crate::pipeline::render::PageRenderer;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One conversion job: every PDF in `input_dir` is rendered into
/// `output_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Directory scanned for `.pdf` files (case-insensitive extension).
    pub input_dir: PathBuf,
    /// Directory receiving the PNG pages; created on demand.
    pub output_dir: PathBuf,
}

impl JobSpec {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// The two fixed directory pairs the original tool operated on, resolved
/// against `base_dir`.
pub fn default_jobs(base_dir: impl AsRef<Path>) -> Vec<JobSpec> {
    let base = base_dir.as_ref();
    vec![
        JobSpec::new(base.join("leftin"), base.join("left")),
        JobSpec::new(base.join("rightin"), base.join("right")),
    ]
}

/// Configuration for a batch run.
///
/// Built via [`BatchConfig::builder()`] or [`BatchConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2slides::{BatchConfig, JobSpec, PageNaming};
///
/// let config = BatchConfig::builder()
///     .jobs(vec![JobSpec::new("decks", "rendered")])
///     .dpi(150)
///     .page_naming(PageNaming::DocumentPrefixed)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct BatchConfig {
    /// Directory pairs processed in order. Default: `leftin`→`left`,
    /// `rightin`→`right` relative to the current directory.
    pub jobs: Vec<JobSpec>,

    /// Rendering DPI used when rasterising each PDF page. Range: 72–600.
    /// Default: 300.
    ///
    /// 300 DPI keeps small slide text legible after rasterisation. Lower
    /// values render faster and produce smaller files; raise it only for
    /// dense pages where 300 visibly blurs.
    pub dpi: u32,

    /// How page files are named in the output directory.
    /// Default: [`PageNaming::Sequential`] for compatibility.
    pub page_naming: PageNaming,

    /// Pre-constructed renderer. When unset, a pdfium-backed renderer is
    /// bound on first use. Injecting a renderer here is the test seam:
    /// mocks avoid needing real PDF fixtures.
    pub renderer: Option<Arc<dyn PageRenderer>>,

    /// Progress event sink. When unset no events are emitted.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs("."),
            dpi: 300,
            page_naming: PageNaming::default(),
            renderer: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for BatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchConfig")
            .field("jobs", &self.jobs)
            .field("dpi", &self.dpi)
            .field("page_naming", &self.page_naming)
            .field("renderer", &self.renderer.as_ref().map(|_| "<dyn PageRenderer>"))
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl BatchConfig {
    /// Create a new builder for `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`BatchConfig`].
#[derive(Debug)]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    /// Replace the job list entirely.
    pub fn jobs(mut self, jobs: Vec<JobSpec>) -> Self {
        self.config.jobs = jobs;
        self
    }

    /// Append one job to the list.
    pub fn job(mut self, job: JobSpec) -> Self {
        self.config.jobs.push(job);
        self
    }

    /// Resolve the default `leftin`/`left`, `rightin`/`right` pairs against
    /// a different base directory.
    pub fn base_dir(mut self, base: impl AsRef<Path>) -> Self {
        self.config.jobs = default_jobs(base);
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn page_naming(mut self, naming: PageNaming) -> Self {
        self.config.page_naming = naming;
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        self.config.renderer = Some(renderer);
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BatchConfig, Pdf2SlidesError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(Pdf2SlidesError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.jobs.is_empty() {
            return Err(Pdf2SlidesError::InvalidConfig(
                "At least one job (input → output directory pair) is required".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// How rendered pages are named inside a job's output directory.
///
/// [`Sequential`](PageNaming::Sequential) reproduces the historical scheme:
/// numbering restarts at 1 for every document and is scoped only by the
/// output directory, so two PDFs sharing one output directory overwrite
/// each other's pages. That collision is deliberate compatibility
/// behaviour: downstream consumers load `slideN.png` by bare index.
/// [`DocumentPrefixed`](PageNaming::DocumentPrefixed) is the opt-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageNaming {
    /// `slide<i>.png`, 1-based, restarting per document. (default)
    #[default]
    Sequential,
    /// `<stem>-slide<i>.png`, where `<stem>` is the source file name
    /// without its extension. Avoids cross-document collisions.
    DocumentPrefixed,
}

impl PageNaming {
    /// File name for page `page_num` (1-indexed) of the document whose
    /// file stem is `stem`.
    pub fn file_name(&self, stem: &str, page_num: usize) -> String {
        match self {
            PageNaming::Sequential => format!("slide{}.png", page_num),
            PageNaming::DocumentPrefixed => format!("{}-slide{}.png", stem, page_num),
        }
    }
}
