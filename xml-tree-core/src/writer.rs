use std::fs;
use std::path::Path;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

use crate::tree::XmlNode;

/// Errors that can occur while writing XML from an [`XmlNode`] tree.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize XML bytes.
    #[error("failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Failed to write output file.
    #[error("failed to write XML file: {0}")]
    Io(#[from] std::io::Error),
}

/// Layout knobs for [`write_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Emit a leading `<?xml version="1.0"?>` line.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            declaration: true,
        }
    }
}

/// Serialize an [`XmlNode`] tree into pretty-printed XML bytes.
pub fn write(node: &XmlNode) -> Result<Vec<u8>, WriteError> {
    write_with_options(node, WriteOptions::default())
}

/// Serialize an [`XmlNode`] tree with explicit layout options.
///
/// One element per line; text-only elements stay on a single line and
/// elements with no text and no children are self-closing. The output always
/// ends with a newline.
pub fn write_with_options(node: &XmlNode, options: WriteOptions) -> Result<Vec<u8>, WriteError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', options.indent);
    if options.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    }
    write_node(&mut writer, node)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize an [`XmlNode`] tree and write it to `path`, replacing any
/// existing file.
pub fn write_file(node: &XmlNode, path: &Path, options: WriteOptions) -> Result<(), WriteError> {
    let bytes = write_with_options(node, options)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<(), quick_xml::Error> {
    let mut start = BytesStart::new(node.tag.as_str());

    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if node.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    if let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) {
        writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    }

    for child in &node.children {
        write_node(writer, child)?;
    }

    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
    Ok(())
}
