//! Page output: PNG-encode rendered pages and write them to disk.
//!
//! PNG is the only output format: it is lossless, so rendered slide text
//! stays crisp, and every downstream consumer of the historical tool
//! expects `.png` files. Existing files are overwritten unconditionally,
//! so re-running the batch refreshes the output in place.

use crate::error::DocumentError;
use image::DynamicImage;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Create the output directory (and parents) if absent. Idempotent and
/// non-destructive: an existing directory is left untouched.
pub async fn ensure_output_dir(output_dir: &Path) -> Result<(), DocumentError> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| DocumentError::CreateOutputDir {
            path: output_dir.to_path_buf(),
            detail: e.to_string(),
        })
}

/// PNG-encode `image` and write it to `output_dir/file_name`, overwriting
/// any existing file. Returns the written path.
pub async fn write_page(
    image: &DynamicImage,
    output_dir: &Path,
    file_name: &str,
    page_num: usize,
) -> Result<PathBuf, DocumentError> {
    let output_path = output_dir.join(file_name);

    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| DocumentError::WriteFailed {
            page: page_num,
            path: output_path.clone(),
            detail: e.to_string(),
        })?;

    tokio::fs::write(&output_path, &buf)
        .await
        .map_err(|e| DocumentError::WriteFailed {
            page: page_num,
            path: output_path.clone(),
            detail: e.to_string(),
        })?;

    debug!("Wrote {} ({} bytes)", output_path.display(), buf.len());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn red_page() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255])))
    }

    #[tokio::test]
    async fn write_page_produces_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_page(&red_page(), dir.path(), "slide1.png", 1)
            .await
            .expect("write should succeed");

        assert_eq!(path, dir.path().join("slide1.png"));
        let decoded = image::open(&path).expect("output must be a valid image");
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[tokio::test]
    async fn write_page_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slide1.png");
        std::fs::write(&path, b"stale bytes").unwrap();

        write_page(&red_page(), dir.path(), "slide1.png", 1)
            .await
            .expect("overwrite should succeed");

        let decoded = image::open(&path).expect("stale content replaced by a valid PNG");
        assert_eq!(decoded.width(), 8);
    }

    #[tokio::test]
    async fn ensure_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("left");
        ensure_output_dir(&out).await.unwrap();
        ensure_output_dir(&out).await.unwrap();
        assert!(out.is_dir());
    }

    #[tokio::test]
    async fn write_into_missing_dir_fails_as_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_page(&red_page(), &missing, "slide1.png", 1)
            .await
            .expect_err("writing into a missing directory must fail");
        match err {
            DocumentError::WriteFailed { page, .. } => assert_eq!(page, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
