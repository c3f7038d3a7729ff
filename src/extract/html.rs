//! HTML tag-strip extraction
//!
//! Structural parse only: markup is dropped, text chunks are collected and
//! entity-decoded. Scripts never execute and external resources referenced
//! by the markup are never fetched. The result matches the DOM
//! `textContent` of the input, or an empty string when there is none.

use lol_html::{doc_text, HtmlRewriter, Settings};

/// Strip all markup from an HTML document and return its text content.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::new();

    {
        let mut rewriter = HtmlRewriter::new(
            Settings {
                document_content_handlers: vec![doc_text!(|chunk| {
                    text.push_str(chunk.as_str());
                    Ok(())
                })],
                ..Settings::new()
            },
            |_: &[u8]| {},
        );

        if let Err(e) = rewriter
            .write(html.as_bytes())
            .and_then(|()| rewriter.end())
        {
            // Keep whatever was collected before the parse gave up
            tracing::warn!("HTML parse stopped early: {}", e);
        }
    }

    html_escape::decode_html_entities(&text).into_owned()
}
