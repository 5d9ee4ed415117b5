//! Result types describing what a batch run actually did.
//!
//! The original tool reduced every outcome to a printed line and a boolean.
//! These types keep the "never fail the run" policy but make partial
//! failure inspectable: one [`DocumentOutcome`] per source PDF, aggregated
//! into a [`JobSummary`] per directory pair and a [`BatchSummary`] for the
//! whole run. Everything serialises to JSON for the CLI's `--json` mode.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of converting a single source PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOutcome {
    /// Path of the source document.
    pub pdf_path: PathBuf,
    /// Pages written to disk before completion or failure. Pages written
    /// before an error remain on disk; there is no cleanup.
    pub pages_written: usize,
    /// Set when the document failed; `None` means full success.
    pub error: Option<DocumentError>,
    /// Wall-clock time spent on this document.
    pub duration_ms: u64,
}

impl DocumentOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Why a job produced no document outcomes, or that it ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// At least one PDF was found and every document was attempted.
    Completed,
    /// The input directory was readable but held no `.pdf` files.
    NoPdfsFound,
    /// The input directory could not be enumerated (missing, unreadable).
    InputDirUnreadable(String),
}

/// Summary of one (input directory → output directory) job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub status: JobStatus,
    /// One entry per discovered document, in enumeration order.
    pub documents: Vec<DocumentOutcome>,
}

impl JobSummary {
    /// Whether any PDF files were discovered. Mirrors the original's
    /// boolean return from its directory routine.
    pub fn found_documents(&self) -> bool {
        self.status == JobStatus::Completed
    }

    /// Documents converted without error.
    pub fn succeeded(&self) -> usize {
        self.documents.iter().filter(|d| d.succeeded()).count()
    }

    /// Documents that recorded an error.
    pub fn failed(&self) -> usize {
        self.documents.len() - self.succeeded()
    }

    /// Total pages written across all documents in this job.
    pub fn pages_written(&self) -> usize {
        self.documents.iter().map(|d| d.pages_written).sum()
    }
}

/// Summary of a whole batch run, one [`JobSummary`] per configured job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub jobs: Vec<JobSummary>,
    /// Wall-clock time for the whole run.
    pub total_duration_ms: u64,
}

impl BatchSummary {
    pub fn total_documents(&self) -> usize {
        self.jobs.iter().map(|j| j.documents.len()).sum()
    }

    pub fn total_succeeded(&self) -> usize {
        self.jobs.iter().map(|j| j.succeeded()).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.jobs.iter().map(|j| j.failed()).sum()
    }

    pub fn total_pages_written(&self) -> usize {
        self.jobs.iter().map(|j| j.pages_written()).sum()
    }
}
