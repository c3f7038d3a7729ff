//! Office document raw-text extraction
//!
//! Reads the OOXML container (a ZIP archive), pulls `word/document.xml` and
//! streams its events, collecting `w:t` runs. No formatting, no structure:
//! each paragraph's runs are concatenated and paragraphs are separated by a
//! blank line.
//!
//! Legacy binary `.doc` files are not a ZIP container and fail the archive
//! open, surfacing as `ConversionFailure` — the same outcome as any other
//! corrupted or misclassified binary.

use std::io::Cursor;

use quick_xml::events::Event;

use super::error::{ExtractError, Result};

/// Extract the raw text of an OOXML word-processing document.
pub fn extract_raw_text(bytes: &[u8]) -> Result<String> {
    let cursor = Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ExtractError::ConversionFailure(format!("not an OOXML container: {}", e)))?;

    let file = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::ConversionFailure(format!("missing document body: {}", e)))?;

    let xml = std::io::read_to_string(file)
        .map_err(|e| ExtractError::ConversionFailure(format!("unreadable document body: {}", e)))?;

    document_text(&xml)
}

/// Collect `w:t` run text from the document XML, one blank line between
/// paragraphs.
fn document_text(xml: &str) -> Result<String> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_run = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Text(e)) if in_run => {
                let run = e
                    .unescape()
                    .map_err(|e| ExtractError::ConversionFailure(format!("malformed run: {}", e)))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::ConversionFailure(format!(
                    "malformed document XML: {}",
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim_end().to_string())
}
