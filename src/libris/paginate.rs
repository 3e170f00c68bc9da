//! Document paginator for the viewer.
//!
//! Book documents are FB2-like XML; the viewer shows the text content of
//! every `<body>` element, split into pages on paragraph boundaries
//! (double newlines). Cheap, deterministic pagination in the absence of
//! real layout: the same input always yields the same page set.

use crate::error::{LibrisError, Result};
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// One page of a paginated document, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub text: String,
    /// 1-based, after clamping
    pub shown_page: usize,
    pub total_pages: usize,
}

/// Concatenates the text content of every `<body>` element in document
/// order, with a blank line between bodies. Multiple root-level bodies are
/// accepted; anything that fails to parse as well-formed markup is a
/// `MalformedDocument`.
pub fn extract_body_text(raw: &str) -> Result<String> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut text = String::new();
    let mut open_elements: Vec<String> = Vec::new();
    let mut body_depth: usize = 0;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = reader
                    .decoder()
                    .decode(e.name().as_ref())
                    .map_err(|e| LibrisError::MalformedDocument(format!("decode error: {:?}", e)))?
                    .to_string();
                if name == "body" {
                    body_depth += 1;
                }
                open_elements.push(name);
            }
            Ok(Event::End(e)) => {
                let name = reader
                    .decoder()
                    .decode(e.name().as_ref())
                    .map_err(|e| LibrisError::MalformedDocument(format!("decode error: {:?}", e)))?
                    .to_string();
                match open_elements.pop() {
                    Some(open) if open == name => {
                        if name == "body" {
                            body_depth = body_depth.saturating_sub(1);
                            if body_depth == 0 {
                                text.push_str("\n\n");
                            }
                        }
                    }
                    _ => {
                        return Err(LibrisError::MalformedDocument(format!(
                            "unexpected closing tag </{}>",
                            name
                        )));
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if body_depth > 0 {
                    let chunk = e.decode().map_err(|e| {
                        LibrisError::MalformedDocument(format!("decode error: {:?}", e))
                    })?;
                    text.push_str(&chunk);
                }
            }
            Ok(Event::CData(e)) => {
                if body_depth > 0 {
                    let chunk = reader.decoder().decode(&e).map_err(|e| {
                        LibrisError::MalformedDocument(format!("decode error: {:?}", e))
                    })?;
                    text.push_str(&chunk);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                // Entity references arrive as separate events; resolve the
                // standard ones (&amp; &lt; ...) back into text
                if body_depth > 0 {
                    let name = e.decode().map_err(|e| {
                        LibrisError::MalformedDocument(format!("decode error: {:?}", e))
                    })?;
                    let entity = format!("&{};", name);
                    let resolved = unescape(&entity).map_err(|e| {
                        LibrisError::MalformedDocument(format!("bad entity: {:?}", e))
                    })?;
                    text.push_str(&resolved);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(LibrisError::MalformedDocument(format!("{:?}", e)));
            }
            _ => {}
        }
        buf.clear();
    }

    if !open_elements.is_empty() {
        return Err(LibrisError::MalformedDocument(format!(
            "unclosed element <{}>",
            open_elements[open_elements.len() - 1]
        )));
    }

    Ok(text)
}

/// Splits extracted body text into ordered, non-empty pages.
pub fn paginate(raw: &str) -> Result<Vec<String>> {
    let text = extract_body_text(raw)?;
    Ok(split_pages(&text))
}

fn split_pages(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the requested page, clamping the page number into `[1, total]`:
/// asking past the end yields the last page, never an error. A document
/// with zero pages is an `EmptyDocument`.
pub fn select_page(pages: &[String], page_num: usize) -> Result<PageView> {
    if pages.is_empty() {
        return Err(LibrisError::EmptyDocument);
    }
    let shown_page = page_num.clamp(1, pages.len());
    Ok(PageView {
        text: pages[shown_page - 1].clone(),
        shown_page,
        total_pages: pages.len(),
    })
}
