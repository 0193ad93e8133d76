//! Tesseract-backed text recognition.
//!
//! Shells out to the `tesseract` binary rather than binding libtesseract;
//! install `tesseract-ocr` (and `poppler-utils` for scanned PDFs) to enable
//! the OCR paths.

use std::path::Path;
use std::process::Command;

use docsage_core::{Error, Result};
use image::GrayImage;

/// Recognition language for all OCR calls.
pub const OCR_LANGUAGE: &str = "eng";

/// Check whether the tesseract binary is on the PATH.
pub fn is_available() -> bool {
    Command::new("tesseract").arg("--version").output().is_ok()
}

/// Recognize text in a binarized image.
pub fn recognize(img: &GrayImage) -> Result<String> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("input.png");
    img.save(&input)
        .map_err(|e| Error::Ocr(format!("failed writing OCR input image: {e}")))?;
    recognize_file(&input)
}

fn recognize_file(path: &Path) -> Result<String> {
    let output = Command::new("tesseract")
        .arg(path)
        .arg("stdout")
        .args(["-l", OCR_LANGUAGE])
        .output()
        .map_err(|e| Error::Ocr(format!("tesseract is unavailable: {e}")))?;

    if !output.status.success() {
        return Err(Error::Ocr(format!(
            "tesseract failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
