//! Word-processor document extraction.
//!
//! A `.docx` file is a zip container; the paragraph text lives in
//! `word/document.xml` as `<w:t>` runs grouped under `<w:p>` elements. No
//! distinction is made between headings, body text, and table cells.

use std::io::{Cursor, Read};

use docsage_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

/// Extract all paragraph texts, one per line, in document order.
pub fn extract(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::Extract(format!("docx container parse failed: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::Extract(format!("docx has no document part: {e}")))?
        .read_to_string(&mut xml)?;

    Ok(paragraphs(&xml)?.join("\n"))
}

fn paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => paragraphs.push(String::new()),
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::Extract(format!("docx text run decode failed: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Extract(format!("docx xml parse failed: {e}"))),
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body>
</w:document>"#
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_one_per_line() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Second </w:t></w:r><w:r><w:t>paragraph</w:t></w:r></w:p>",
        );
        assert_eq!(extract(&bytes).unwrap(), "First paragraph\nSecond paragraph");
    }

    #[test]
    fn test_empty_paragraph_keeps_its_line() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>above</w:t></w:r></w:p><w:p/>\
             <w:p><w:r><w:t>below</w:t></w:r></w:p>",
        );
        assert_eq!(extract(&bytes).unwrap(), "above\n\nbelow");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let bytes = docx_with_body("<w:p><w:r><w:t>a &amp; b</w:t></w:r></w:p>");
        assert_eq!(extract(&bytes).unwrap(), "a & b");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        let err = extract(b"plainly not a zip").unwrap_err();
        assert!(matches!(err, Error::Extract(_)));
    }

    #[test]
    fn test_zip_without_document_part_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        let err = extract(&bytes).unwrap_err();
        assert!(matches!(err, Error::Extract(_)));
    }
}
