// ocr.rs - Image Text Recognition
// Reads text out of an image with the tesseract command line engine.
//
// Key Features:
// - Decodes the attachment with the image crate and normalises it to PNG first
// - Runs the engine on the blocking pool so the gateway tasks keep running
// - Best effort only: whatever tesseract prints is the result
//
// Used by: commands/ocr.rs

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;

use async_trait::async_trait;
use image::ImageFormat;
use log::{debug, warn};
use uuid::Uuid;

use crate::error::MetaError;

#[async_trait]
pub trait ImageTextRecognizer: Send + Sync {
    async fn recognize(&self, image: Vec<u8>) -> Result<String, MetaError>;
}

pub struct TesseractRecognizer {
    binary: PathBuf,
}

impl TesseractRecognizer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self { binary: binary.into() }
    }
}

#[async_trait]
impl ImageTextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: Vec<u8>) -> Result<String, MetaError> {
        let binary = self.binary.clone();
        tokio::task::spawn_blocking(move || recognize_blocking(&binary, &image))
            .await
            .map_err(|e| MetaError::Recognition(format!("recognition task failed: {}", e)))?
    }
}

/// Re-encode arbitrary image bytes as PNG
fn normalise_image(bytes: &[u8]) -> Result<Vec<u8>, MetaError> {
    let img = image::load_from_memory(bytes)?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

fn recognize_blocking(binary: &Path, bytes: &[u8]) -> Result<String, MetaError> {
    let png = normalise_image(bytes)?;

    let temp_path = std::env::temp_dir().join(format!("meta_ocr_{}.png", Uuid::new_v4()));
    std::fs::write(&temp_path, &png)?;
    debug!("[OCR] Running {} on {} ({} bytes)", binary.display(), temp_path.display(), png.len());

    let output = Command::new(binary).arg(&temp_path).arg("stdout").output();

    if let Err(e) = std::fs::remove_file(&temp_path) {
        warn!("[OCR] Failed to remove {}: {}", temp_path.display(), e);
    }

    let output = output?;
    if !output.status.success() {
        return Err(MetaError::Recognition(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn tiny_jpeg() -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg).unwrap();
        bytes
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = normalise_image(b"definitely not an image");
        assert!(matches!(result, Err(MetaError::ImageDecode(_))));
    }

    #[test]
    fn test_images_are_normalised_to_png() {
        let png = normalise_image(&tiny_jpeg()).unwrap();
        assert_eq!(image::guess_format(&png).unwrap(), ImageFormat::Png);
    }

    #[tokio::test]
    async fn test_missing_engine_is_an_io_error() {
        let recognizer = TesseractRecognizer::new("/nonexistent/bin/tesseract");
        let result = recognizer.recognize(tiny_jpeg()).await;
        assert!(matches!(result, Err(MetaError::Io(_))));
    }
}
