//! PDF extraction with a per-page OCR fallback.
//!
//! Each page is handled independently: the native text layer wins when it is
//! non-empty, otherwise the page is rasterized at 300 DPI (`pdftoppm`),
//! binarized, and recognized with tesseract. Mixed scanned/native documents
//! therefore come out right page by page.

use std::path::Path;

use docsage_core::{Error, Result};
use lopdf::Document;

use crate::{ocr, raster};

/// Rasterization resolution for pages without a text layer.
pub const RASTER_DPI: u32 = 300;

/// Extract the text of every page, in page order, each page followed by a
/// newline.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| Error::Extract(format!("pdf parse failed: {e}")))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

    // The source only needs to hit disk when a page has to be rasterized.
    let dir = tempfile::tempdir()?;
    let pdf_path = dir.path().join("source.pdf");
    let mut written = false;

    let native_pages = page_numbers.iter().map(|&number| {
        // A page the text extractor cannot read is treated like a page with
        // no text layer: it falls through to OCR.
        let text = doc
            .extract_text(&[number])
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        (number, text)
    });

    assemble_pages(native_pages, |number| {
        if !written {
            std::fs::write(&pdf_path, bytes)?;
            written = true;
        }
        ocr_page(&pdf_path, dir.path(), number)
    })
}

/// Join per-page results, invoking `ocr_fallback` only for pages whose
/// native text layer is empty. Every page's text is followed by `\n`.
fn assemble_pages<I, F>(pages: I, mut ocr_fallback: F) -> Result<String>
where
    I: IntoIterator<Item = (u32, String)>,
    F: FnMut(u32) -> Result<String>,
{
    let mut out = String::new();
    for (number, native) in pages {
        let text = if native.is_empty() {
            tracing::debug!(page = number, "no text layer, falling back to OCR");
            ocr_fallback(number)?
        } else {
            native
        };
        out.push_str(&text);
        out.push('\n');
    }
    Ok(out)
}

/// Rasterize one page at [`RASTER_DPI`], binarize it, and recognize its text.
fn ocr_page(pdf_path: &Path, work_dir: &Path, number: u32) -> Result<String> {
    let page_dir = work_dir.join(format!("page-{number}"));
    std::fs::create_dir_all(&page_dir)?;
    let prefix = page_dir.join("raster");

    let page_arg = number.to_string();
    let output = std::process::Command::new("pdftoppm")
        .args(["-f", &page_arg, "-l", &page_arg])
        .args(["-r", &RASTER_DPI.to_string()])
        .arg("-png")
        .arg(pdf_path)
        .arg(&prefix)
        .output()
        .map_err(|e| Error::Ocr(format!("pdftoppm is unavailable: {e}")))?;

    if !output.status.success() {
        return Err(Error::Ocr(format!(
            "pdftoppm failed on page {number}: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    // pdftoppm pads the page number in the output name, so scan for it.
    let png_path = std::fs::read_dir(&page_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .find(|path| path.extension().is_some_and(|ext| ext == "png"))
        .ok_or_else(|| Error::Ocr(format!("pdftoppm produced no image for page {number}")))?;

    let img = image::open(&png_path)
        .map_err(|e| Error::Decode(format!("page raster decode failed: {e}")))?;
    ocr::recognize(&raster::binarize(&img))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_text_never_invokes_ocr() {
        let pages = vec![(1, "first page".to_string()), (2, "second page".to_string())];
        let out = assemble_pages(pages, |page| {
            panic!("OCR invoked for page {page} with native text")
        })
        .unwrap();
        assert_eq!(out, "first page\nsecond page\n");
    }

    #[test]
    fn test_empty_page_always_invokes_ocr() {
        let pages = vec![
            (1, "native".to_string()),
            (2, String::new()),
            (3, String::new()),
        ];
        let mut ocr_pages = Vec::new();
        let out = assemble_pages(pages, |page| {
            ocr_pages.push(page);
            Ok(format!("ocr page {page}"))
        })
        .unwrap();
        assert_eq!(ocr_pages, vec![2, 3]);
        assert_eq!(out, "native\nocr page 2\nocr page 3\n");
    }

    #[test]
    fn test_ocr_failure_propagates() {
        let pages = vec![(1, String::new())];
        let err = assemble_pages(pages, |_| Err(Error::Ocr("tesseract is unavailable".into())))
            .unwrap_err();
        assert!(matches!(err, Error::Ocr(_)));
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let err = extract(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, Error::Extract(_)));
    }
}
