// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dialect-agnostic XML tree reader.
//!
//! Turns raw report bytes into an order-preserving [`Element`] tree. No
//! framework knowledge lives here: every attribute is kept verbatim and
//! interpreters decide what matters.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Tree reader failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input held no element at all.
    #[error("no root element found")]
    NoRoot,

    /// Input ended while an element was still open.
    #[error("unexpected end of input: <{tag}> is not closed")]
    Unclosed { tag: String },

    /// The decoder rejected the document.
    #[error("malformed xml at byte {position}: {message}")]
    Malformed { position: u64, message: String },
}

/// A parsed XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local tag name (namespace prefix stripped).
    pub tag: String,
    /// Attribute values by local name, unescaped but otherwise verbatim.
    pub attributes: HashMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
    /// Concatenated direct character data, including CDATA sections.
    pub text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder: set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: append a child.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: append text content.
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.text.push_str(text.as_ref());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Direct children with the given tag.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    pub fn has_child(&self, tag: &str) -> bool {
        self.children.iter().any(|c| c.tag == tag)
    }

    /// Depth-first, document-order walk over every element below this one.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// Parse a document into its root element.
///
/// Reading stops once the root element closes; trailing content is ignored.
pub fn parse(bytes: &[u8]) -> Result<Element, ParseError> {
    tracing::trace!(len = bytes.len(), "parsing xml tree");

    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| ParseError::Malformed {
                position: reader.buffer_position(),
                message: e.to_string(),
            })?;
        let position = reader.buffer_position();

        match event {
            Event::Start(e) => stack.push(open(&e, position)?),
            Event::Empty(e) => {
                let element = open(&e, position)?;
                if let Some(root) = attach(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| ParseError::Malformed {
                    position,
                    message: "closing tag without an open element".to_string(),
                })?;
                if let Some(root) = attach(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::Text(e) => {
                if let Some(top) = stack.last_mut() {
                    let text = e.unescape().map_err(|err| ParseError::Malformed {
                        position,
                        message: err.to_string(),
                    })?;
                    top.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => {
                return Err(match stack.last() {
                    Some(unclosed) => ParseError::Unclosed {
                        tag: unclosed.tag.clone(),
                    },
                    None => ParseError::NoRoot,
                });
            }
            _ => {}
        }

        buf.clear();
    }
}

/// Push `element` onto its parent, or hand it back if it is the root.
fn attach(stack: &mut [Element], element: Element) -> Option<Element> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            None
        }
        None => Some(element),
    }
}

fn open(start: &BytesStart<'_>, position: u64) -> Result<Element, ParseError> {
    let mut element = Element::new(String::from_utf8_lossy(start.local_name().as_ref()));

    // Duplicate attributes are tolerated; the last one wins.
    for attr in start.attributes().with_checks(false) {
        let attr = attr.map_err(|e| ParseError::Malformed {
            position,
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| ParseError::Malformed {
            position,
            message: e.to_string(),
        })?;
        element.attributes.insert(key, value.into_owned());
    }

    Ok(element)
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
