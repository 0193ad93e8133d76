//! Plain-text extraction with heuristic encoding detection.

use docsage_core::{Error, Result};

/// Decode raw bytes using the encoding `chardetng` guesses from their
/// content. No fallback encoding: bytes malformed for the detected encoding
/// are a [`Error::Decode`].
pub fn extract(bytes: &[u8]) -> Result<String> {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(Error::Decode(format!(
            "input is not valid {}",
            encoding.name()
        )));
    }

    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through() {
        assert_eq!(extract("hello world".as_bytes()).unwrap(), "hello world");
        assert_eq!(extract("naïve café — déjà vu".as_bytes()).unwrap(), "naïve café — déjà vu");
    }

    #[test]
    fn test_legacy_single_byte_encoding_is_detected() {
        // windows-1252 bytes: "Le café est préparé à côté de l'hôtel"
        let bytes = b"Le caf\xe9 est pr\xe9par\xe9 \xe0 c\xf4t\xe9 de l'h\xf4tel";
        let text = extract(bytes).unwrap();
        assert!(text.contains("café"), "decoded to: {text}");
        assert!(text.contains("hôtel"), "decoded to: {text}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract(b"").unwrap(), "");
    }
}
