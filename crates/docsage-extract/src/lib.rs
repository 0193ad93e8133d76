//! Document text extraction for DocSage.
//!
//! One extractor per supported format, routed by file-name suffix through
//! [`extract_document`]. Scanned PDF pages and raster images go through the
//! binarize-then-OCR path; everything else reads its native text layer.

pub mod docx;
pub mod format;
pub mod highlight;
pub mod ocr;
pub mod pdf;
pub mod raster;
pub mod sheet;
pub mod text;

pub use format::{extract_document, DocumentFormat, UNSUPPORTED_MESSAGE};
pub use highlight::highlight;
