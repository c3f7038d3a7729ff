//! Plain-text passthrough

use super::document::SourceDocument;

/// Decode the full byte content as UTF-8 text, unmodified.
///
/// No size limit is enforced; the whole file is already in memory. Invalid
/// sequences are replaced rather than rejected, so pure ASCII and valid
/// UTF-8 round-trip losslessly.
pub fn read_as_text(doc: &SourceDocument) -> String {
    String::from_utf8_lossy(doc.bytes()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_returns_unchanged() {
        let doc = SourceDocument::new("a.txt", "text/plain", b"plain ASCII content".to_vec());
        assert_eq!(read_as_text(&doc), "plain ASCII content");
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = SourceDocument::new("a.txt", "text/plain", b"same bytes".to_vec());
        assert_eq!(read_as_text(&doc), read_as_text(&doc));
    }

    #[test]
    fn utf8_preserved() {
        let text = "Grüße, 世界";
        let doc = SourceDocument::new("a.txt", "text/plain", text.as_bytes().to_vec());
        assert_eq!(read_as_text(&doc), text);
    }

    #[test]
    fn empty_input_is_empty_string() {
        let doc = SourceDocument::new("a.txt", "text/plain", Vec::new());
        assert_eq!(read_as_text(&doc), "");
    }
}
