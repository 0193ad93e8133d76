//! Suffix-based format detection and extraction dispatch.

use docsage_core::Result;

/// Returned for any file whose suffix is not in the dispatch table.
/// A sentinel rather than an error: the caller always gets displayable text.
pub const UNSUPPORTED_MESSAGE: &str = "Unsupported file format.";

/// Supported document formats, keyed by file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
    Workbook,
    Csv,
    RasterImage,
    Unsupported,
}

impl DocumentFormat {
    /// Detect the format from a declared file name: the substring after the
    /// last `.`, lowercased, matched exactly. No content sniffing — a
    /// mismatched extension yields whatever the routed extractor makes of
    /// the bytes.
    pub fn from_name(name: &str) -> Self {
        let suffix = name.rsplit('.').next().unwrap_or("").to_lowercase();
        match suffix.as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" => Self::PlainText,
            "xls" | "xlsx" => Self::Workbook,
            "csv" => Self::Csv,
            "jpg" | "jpeg" | "png" => Self::RasterImage,
            _ => Self::Unsupported,
        }
    }
}

/// Extract the full text content of a named document.
///
/// Routes to the per-format extractor; unsupported suffixes return
/// [`UNSUPPORTED_MESSAGE`] rather than an error. Parse and OCR failures
/// surface as `Err` values.
pub fn extract_document(name: &str, bytes: &[u8]) -> Result<String> {
    let format = DocumentFormat::from_name(name);
    tracing::debug!(name, ?format, size = bytes.len(), "extracting document");

    match format {
        DocumentFormat::Pdf => crate::pdf::extract(bytes),
        DocumentFormat::Docx => crate::docx::extract(bytes),
        DocumentFormat::PlainText => crate::text::extract(bytes),
        DocumentFormat::Workbook => crate::sheet::extract_workbook(bytes),
        DocumentFormat::Csv => crate::sheet::extract_csv(bytes),
        DocumentFormat::RasterImage => crate::raster::extract(bytes),
        DocumentFormat::Unsupported => Ok(UNSUPPORTED_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        assert_eq!(DocumentFormat::from_name("report.pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_name("notes.docx"), DocumentFormat::Docx);
        assert_eq!(
            DocumentFormat::from_name("readme.txt"),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_name("ledger.xls"),
            DocumentFormat::Workbook
        );
        assert_eq!(
            DocumentFormat::from_name("ledger.xlsx"),
            DocumentFormat::Workbook
        );
        assert_eq!(DocumentFormat::from_name("data.csv"), DocumentFormat::Csv);
        assert_eq!(
            DocumentFormat::from_name("scan.jpg"),
            DocumentFormat::RasterImage
        );
        assert_eq!(
            DocumentFormat::from_name("scan.jpeg"),
            DocumentFormat::RasterImage
        );
        assert_eq!(
            DocumentFormat::from_name("scan.png"),
            DocumentFormat::RasterImage
        );
    }

    #[test]
    fn test_suffix_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_name("REPORT.PDF"), DocumentFormat::Pdf);
        assert_eq!(
            DocumentFormat::from_name("Notes.DocX"),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_last_suffix_wins() {
        assert_eq!(
            DocumentFormat::from_name("archive.tar.csv"),
            DocumentFormat::Csv
        );
    }

    #[test]
    fn test_unrecognized_suffixes() {
        assert_eq!(
            DocumentFormat::from_name("video.mp4"),
            DocumentFormat::Unsupported
        );
        assert_eq!(
            DocumentFormat::from_name("noextension"),
            DocumentFormat::Unsupported
        );
        assert_eq!(DocumentFormat::from_name(""), DocumentFormat::Unsupported);
    }

    #[test]
    fn test_unsupported_yields_sentinel() {
        let out = extract_document("movie.mkv", b"whatever").unwrap();
        assert_eq!(out, "Unsupported file format.");
    }

    #[test]
    fn test_plain_text_display_path() {
        // End to end through the display path: extract then highlight.
        let content = extract_document("hello.txt", b"hello world").unwrap();
        assert_eq!(content, "hello world");
        assert_eq!(
            crate::highlight::highlight(&content, "world"),
            "hello <mark>world</mark>"
        );
    }
}
