//! Element event tokenizer.
//!
//! The tokenizer reads the whole document up front and produces a flat list
//! of [`ElementEvent`]s. Well-formedness is settled here, so a malformed
//! document is rejected before a single delegate has been mutated.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::trace;

use crate::config::DecoderConfig;
use crate::error::{DecodeError, DecodeResult};

/// Attributes of an opening tag, keyed by attribute name.
pub type Attributes = BTreeMap<String, String>;

/// A single element boundary in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementEvent {
    /// An element was opened.
    Open {
        /// Element name, including any namespace prefix.
        name: String,
        /// Attributes of the opening tag.
        attributes: Attributes,
    },
    /// An element was closed.
    Close {
        /// Element name, including any namespace prefix.
        name: String,
        /// Character data collected since the most recent opening tag.
        text: String,
    },
}

impl ElementEvent {
    /// Name of the element this event belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Open { name, .. } | Self::Close { name, .. } => name,
        }
    }
}

/// Tokenize an XML document into open/close events.
///
/// Text is collected per element: the buffer is reset whenever an element
/// opens and handed to the next closing tag. A container element therefore
/// closes with whatever text followed its last child, which is whitespace in
/// practice and empty after trimming.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedDocument`] if the document has no root
/// element, more than one root, mismatched or unclosed tags, text outside
/// the root, or an entity reference other than the predefined ones.
pub fn tokenize(xml: &[u8], config: &DecoderConfig) -> DecodeResult<Vec<ElementEvent>> {
    let mut reader = Reader::from_reader(xml);
    // Trimming happens once per element after all pieces are joined, so the
    // spaces around an entity reference survive.
    reader.config_mut().trim_text(false);

    let mut events = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                check_single_root(&open, seen_root)?;
                seen_root = true;
                let name = element_name(e.name().as_ref())?;
                let attributes = read_attributes(&e)?;
                text.clear();
                open.push(name.clone());
                events.push(ElementEvent::Open { name, attributes });
            }
            Event::Empty(e) => {
                check_single_root(&open, seen_root)?;
                seen_root = true;
                let name = element_name(e.name().as_ref())?;
                let attributes = read_attributes(&e)?;
                text.clear();
                events.push(ElementEvent::Open {
                    name: name.clone(),
                    attributes,
                });
                events.push(ElementEvent::Close {
                    name,
                    text: String::new(),
                });
            }
            Event::End(e) => {
                let name = element_name(e.name().as_ref())?;
                match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => {
                        return Err(DecodeError::MalformedDocument(format!(
                            "expected </{expected}>, found </{name}>"
                        )));
                    }
                    None => {
                        return Err(DecodeError::MalformedDocument(format!(
                            "closing tag </{name}> without a matching opening tag"
                        )));
                    }
                }
                let value = if config.trim_text {
                    text.trim().to_owned()
                } else {
                    text.clone()
                };
                text.clear();
                events.push(ElementEvent::Close { name, text: value });
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| DecodeError::MalformedDocument(err.to_string()))?;
                if open.is_empty() {
                    if !decoded.trim().is_empty() {
                        return Err(DecodeError::MalformedDocument(
                            "character data outside the root element".to_owned(),
                        ));
                    }
                    continue;
                }
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| DecodeError::MalformedDocument(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                if !open.is_empty() {
                    let data = std::str::from_utf8(&e)
                        .map_err(|err| DecodeError::MalformedDocument(err.to_string()))?;
                    text.push_str(data);
                }
            }
            Event::GeneralRef(e) => {
                if !open.is_empty() {
                    resolve_reference(&e, &mut text)?;
                }
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(name) = open.last() {
        return Err(DecodeError::MalformedDocument(format!(
            "unclosed element <{name}>"
        )));
    }
    if !seen_root {
        return Err(DecodeError::MalformedDocument(
            "document has no root element".to_owned(),
        ));
    }

    trace!(events = events.len(), "tokenized XML document");
    Ok(events)
}

fn check_single_root(open: &[String], seen_root: bool) -> DecodeResult<()> {
    if open.is_empty() && seen_root {
        return Err(DecodeError::MalformedDocument(
            "document has more than one root element".to_owned(),
        ));
    }
    Ok(())
}

fn element_name(raw: &[u8]) -> DecodeResult<String> {
    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|e| DecodeError::MalformedDocument(e.to_string()))
}

fn read_attributes(start: &BytesStart<'_>) -> DecodeResult<Attributes> {
    let mut attributes = Attributes::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = element_name(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)
            .map_err(|e| DecodeError::MalformedDocument(e.to_string()))?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|e| DecodeError::MalformedDocument(e.to_string()))?;
        attributes.insert(key, value.into_owned());
    }
    Ok(attributes)
}

/// Append the replacement text of a character or predefined entity reference.
///
/// No DTD is read, so any other entity is an error.
fn resolve_reference(reference: &BytesRef<'_>, text: &mut String) -> DecodeResult<()> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|e| DecodeError::MalformedDocument(e.to_string()))?
    {
        text.push(ch);
        return Ok(());
    }

    let name = reference
        .decode()
        .map_err(|e| DecodeError::MalformedDocument(e.to_string()))?;
    let replacement = quick_xml::escape::resolve_predefined_entity(&name).ok_or_else(|| {
        DecodeError::MalformedDocument(format!("unknown entity reference &{name};"))
    })?;
    text.push_str(replacement);
    Ok(())
}
