//! Pipeline stages for batch PDF-to-PNG conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap
//! implementations (e.g. switch rendering backend) without touching other
//! stages.
//!
//! ## Data Flow
//!
//! ```text
//! discover ──▶ render ──▶ write
//! (dir scan)   (pdfium)   (PNG files)
//! ```
//!
//! 1. [`discover`]: enumerate an input directory and keep `.pdf` entries
//! 2. [`render`]: rasterise every page of one document; runs in
//!    `spawn_blocking` because pdfium is not async-safe
//! 3. [`write`]: PNG-encode each page and write `slide<i>.png` into
//!    the output directory

pub mod discover;
pub mod render;
pub mod write;
