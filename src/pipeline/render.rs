//! PDF rasterisation: render every page of a document to `DynamicImage`.
//!
//! The rendering backend sits behind the narrow [`PageRenderer`] trait
//! ("render this file at this DPI, give me the pages in order") so tests
//! can substitute a mock and the pdfium dependency stays confined to this
//! module.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async
//! contexts. [`render_document`] moves the work onto tokio's blocking
//! thread pool so the async caller never stalls a worker thread during
//! CPU-heavy rasterisation.

use crate::error::{DocumentError, Pdf2SlidesError};
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// A PDF rasterisation backend.
///
/// Implementations take a file path and a DPI value and return the
/// document's pages as images, in page order. Failures are
/// [`DocumentError`]s: they poison one document, never the batch.
pub trait PageRenderer: Send + Sync {
    fn render(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, DocumentError>;
}

/// The default backend, rasterising via pdfium.
///
/// A fresh `Pdfium` instance is bound per call; pdfium is not thread-safe
/// and binding is cheap next to rendering. A missing pdfium library
/// therefore surfaces as a per-document [`DocumentError::OpenFailed`];
/// use [`PdfiumRenderer::probe`] to fail fast at startup instead.
#[derive(Debug, Default)]
pub struct PdfiumRenderer;

impl PdfiumRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Verify a pdfium library can be bound, without opening a document.
    pub fn probe() -> Result<(), Pdf2SlidesError> {
        bind_pdfium().map(|_| ()).map_err(Pdf2SlidesError::PdfiumBindingFailed)
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, DocumentError> {
        let pdfium = bind_pdfium().map_err(|detail| DocumentError::OpenFailed {
            path: pdf_path.to_path_buf(),
            detail,
        })?;

        let document =
            pdfium
                .load_pdf_from_file(pdf_path, None)
                .map_err(|e| DocumentError::OpenFailed {
                    path: pdf_path.to_path_buf(),
                    detail: format!("{:?}", e),
                })?;

        let pages = document.pages();
        info!("PDF loaded: {} pages", pages.len());

        let mut images = Vec::with_capacity(pages.len() as usize);
        for (idx, page) in pages.iter().enumerate() {
            let render_config = PdfRenderConfig::new()
                .set_target_width(target_pixels(page.width().value, dpi))
                .set_maximum_height(target_pixels(page.height().value, dpi));

            let bitmap =
                page.render_with_config(&render_config)
                    .map_err(|e| DocumentError::RenderFailed {
                        page: idx + 1,
                        detail: format!("{:?}", e),
                    })?;

            let image = bitmap.as_image();
            debug!("Rendered page {} → {}x{} px", idx + 1, image.width(), image.height());
            images.push(image);
        }

        Ok(images)
    }
}

/// Bind to a pdfium library: alongside the binary first, then the
/// conventional install prefix, then the system library path.
fn bind_pdfium() -> Result<Pdfium, String> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib/",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| format!("{:?}", e))
}

/// Pixel dimension for a page edge of `points` PDF points at `dpi`
/// (72 points to the inch).
fn target_pixels(points: f32, dpi: u32) -> i32 {
    (points * dpi as f32 / 72.0) as i32
}

/// Rasterise one document on the blocking thread pool.
///
/// The outer `Result` is fatal (the render task panicked); the inner one
/// is the per-document outcome the batch records and moves past.
pub async fn render_document(
    renderer: Arc<dyn PageRenderer>,
    pdf_path: &Path,
    dpi: u32,
) -> Result<Result<Vec<DynamicImage>, DocumentError>, Pdf2SlidesError> {
    let path = pdf_path.to_path_buf();
    tokio::task::spawn_blocking(move || renderer.render(&path, dpi))
        .await
        .map_err(|e| Pdf2SlidesError::Internal(format!("Render task panicked: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    struct OnePageRenderer;

    impl PageRenderer for OnePageRenderer {
        fn render(&self, _pdf_path: &Path, _dpi: u32) -> Result<Vec<DynamicImage>, DocumentError> {
            Ok(vec![DynamicImage::ImageRgba8(RgbaImage::new(4, 4))])
        }
    }

    #[test]
    fn target_pixels_scales_points_by_dpi() {
        // US Letter is 612 × 792 points; at 300 DPI that's 2550 × 3300 px.
        assert_eq!(target_pixels(612.0, 300), 2550);
        assert_eq!(target_pixels(792.0, 300), 3300);
        // 72 DPI is identity.
        assert_eq!(target_pixels(612.0, 72), 612);
    }

    #[tokio::test]
    async fn render_document_forwards_trait_result() {
        let renderer: Arc<dyn PageRenderer> = Arc::new(OnePageRenderer);
        let pages = render_document(renderer, Path::new("whatever.pdf"), 300)
            .await
            .expect("task must not panic")
            .expect("mock renderer succeeds");
        assert_eq!(pages.len(), 1);
    }
}
