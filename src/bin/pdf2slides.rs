//! CLI binary for pdf2slides.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `BatchConfig`, renders progress, and prints the run summary.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2slides::{
    default_jobs, run_batch, BatchConfig, BatchProgressCallback, JobSpec, PageNaming,
    PdfiumRenderer, ProgressCallback,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar that resizes per document (the page
/// count is only known once pdfium has opened the file) plus per-document
/// log lines.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} {prefix:.bold}  [{bar:40.green/238}] {pos:>3}/{len} pages  {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar })
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_job_start(&self, input_dir: &Path, output_dir: &Path) {
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!(
                "Processing {} → {}",
                input_dir.display(),
                output_dir.display()
            ))
        ));
    }

    fn on_no_documents(&self, input_dir: &Path) {
        self.bar.println(format!(
            "  {} {}",
            cyan("∅"),
            dim(&format!("no PDF files found in {}", input_dir.display()))
        ));
    }

    fn on_document_start(&self, pdf_path: &Path) {
        self.bar.set_length(0);
        self.bar.set_position(0);
        self.bar.set_prefix("Converting");
        self.bar
            .set_message(pdf_path.file_name().unwrap_or_default().to_string_lossy().to_string());
    }

    fn on_document_loaded(&self, _pdf_path: &Path, total_pages: usize) {
        self.bar.set_length(total_pages as u64);
    }

    fn on_page_written(&self, _page_num: usize, _total_pages: usize, _output_path: &Path) {
        self.bar.inc(1);
    }

    fn on_document_complete(&self, pdf_path: &Path, pages_written: usize) {
        self.bar.println(format!(
            "  {} {}  {}",
            green("✓"),
            pdf_path.file_name().unwrap_or_default().to_string_lossy(),
            dim(&format!("{pages_written} pages")),
        ));
    }

    fn on_document_error(&self, pdf_path: &Path, error: String) {
        // Truncate very long error messages to keep output tidy.
        let msg = if error.chars().count() > 80 {
            let head: String = error.chars().take(79).collect();
            format!("{head}\u{2026}")
        } else {
            error
        };
        self.bar.println(format!(
            "  {} {}  {}",
            red("✗"),
            pdf_path.file_name().unwrap_or_default().to_string_lossy(),
            red(&msg),
        ));
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert leftin/ → left/ and rightin/ → right/ in the current directory
  pdf2slides

  # Same pairs resolved against a project directory
  pdf2slides --base-dir ~/talks/demo

  # Explicit directory pairs
  pdf2slides --job decks:rendered --job extras:rendered-extras

  # Faster draft renders
  pdf2slides --dpi 120

  # Prefix page files with the source document name to avoid collisions
  pdf2slides --namespaced

  # Machine-readable run summary
  pdf2slides --json > summary.json

OUTPUT NAMING:
  Default: slide1.png, slide2.png, … per document, restarting at 1 for
  every PDF. Two PDFs sharing one output directory therefore overwrite
  each other, identical to the original tool. Use --namespaced for
  <name>-slide1.png style naming instead.

EXIT STATUS:
  0 once the batch has run, even when directories were empty or some
  documents failed; inspect the summary (or --json) for details.
  Non-zero only for startup failures (bad flags, pdfium library missing).

SETUP:
  pdf2slides renders through the pdfium library. Place libpdfium next to
  the binary, under /opt/pdfium/lib, or on the system library path.
  Prebuilt binaries: https://github.com/bblanchon/pdfium-binaries
"#;

/// Batch-convert directories of PDFs to per-page PNG images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2slides",
    version,
    about = "Batch-convert directories of PDFs to per-page PNG images",
    long_about = "Walk configured (input → output) directory pairs, rasterise every page of \
every PDF found via pdfium, and write sequentially numbered PNG files. One bad document \
never stops the batch.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory the default leftin/left and rightin/right pairs are
    /// resolved against.
    #[arg(long, env = "PDF2SLIDES_BASE_DIR", default_value = ".")]
    base_dir: PathBuf,

    /// Explicit job as INPUT:OUTPUT; repeatable. Overrides --base-dir's
    /// default pairs.
    #[arg(long = "job", value_name = "INPUT:OUTPUT")]
    jobs: Vec<String>,

    /// Rendering DPI (72–600).
    #[arg(long, env = "PDF2SLIDES_DPI", default_value_t = 300,
          value_parser = clap::value_parser!(u32).range(72..=600))]
    dpi: u32,

    /// Prefix page files with the source document name
    /// (<name>-slide<i>.png) instead of the flat slide<i>.png scheme.
    #[arg(long, env = "PDF2SLIDES_NAMESPACED")]
    namespaced: bool,

    /// Print the run summary as JSON on stdout.
    #[arg(long, env = "PDF2SLIDES_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "PDF2SLIDES_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2SLIDES_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2SLIDES_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar carries the same information.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // Fail fast when no pdfium library can be bound, before touching any
    // output directory.
    PdfiumRenderer::probe().context("PDF rendering backend unavailable")?;

    let progress = if show_progress {
        Some(CliProgressCallback::new())
    } else {
        None
    };

    let config = build_config(&cli, progress.clone().map(|cb| cb as ProgressCallback))?;
    let summary = run_batch(&config).await.context("Batch run failed")?;

    if let Some(ref cb) = progress {
        cb.finish();
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
        );
    } else if !cli.quiet {
        let failed = summary.total_failed();
        eprintln!(
            "{} {}/{} documents converted  {} pages written  {}",
            if failed == 0 { green("✔") } else { cyan("⚠") },
            bold(&summary.total_succeeded().to_string()),
            summary.total_documents(),
            bold(&summary.total_pages_written().to_string()),
            dim(&format!("{}ms", summary.total_duration_ms)),
        );
        if failed > 0 {
            eprintln!("  {} documents failed", red(&failed.to_string()));
        }
    }

    // Always exit 0 once the batch has run; failures live in the summary.
    Ok(())
}

/// Map CLI args to `BatchConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<BatchConfig> {
    let jobs = if cli.jobs.is_empty() {
        default_jobs(&cli.base_dir)
    } else {
        cli.jobs
            .iter()
            .map(|spec| parse_job(spec))
            .collect::<Result<Vec<_>>>()?
    };

    let naming = if cli.namespaced {
        PageNaming::DocumentPrefixed
    } else {
        PageNaming::Sequential
    };

    let mut builder = BatchConfig::builder()
        .jobs(jobs)
        .dpi(cli.dpi)
        .page_naming(naming);

    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Parse an `INPUT:OUTPUT` pair.
fn parse_job(spec: &str) -> Result<JobSpec> {
    let (input, output) = spec
        .split_once(':')
        .with_context(|| format!("Invalid job '{spec}': expected INPUT:OUTPUT"))?;
    if input.is_empty() || output.is_empty() {
        anyhow::bail!("Invalid job '{spec}': both INPUT and OUTPUT are required");
    }
    Ok(JobSpec::new(input, output))
}
