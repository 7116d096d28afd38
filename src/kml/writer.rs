//! Document serialization.

use crate::config::OutputConfig;
use crate::constants::{DEFAULT_INDENT_STRING, KML_NAMESPACE};
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::io::Write;
use xmltree::{EmitterConfig, Element, Namespace, XMLNode};

/// Serializer settings for a merged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Pretty-print element structure.
    pub indent: bool,
    /// Indentation unit used when `indent` is set.
    pub indent_string: String,
    /// Emit an `<?xml ...?>` prolog.
    pub xml_declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: true,
            indent_string: DEFAULT_INDENT_STRING.to_string(),
            xml_declaration: false,
        }
    }
}

impl From<&OutputConfig> for WriteOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            indent: config.indent,
            indent_string: config.indent_string.clone(),
            xml_declaration: config.xml_declaration,
        }
    }
}

impl WriteOptions {
    fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig::new()
            .perform_indent(self.indent)
            .indent_string(Cow::Owned(self.indent_string.clone()))
            .write_document_declaration(self.xml_declaration)
    }
}

/// Serialize `root` to `sink` with KML 2.2 as the default namespace.
///
/// The tree is copied so the namespace can be declared on the root and
/// prefixes dropped from every KML element, without touching the caller's
/// document.
pub fn write_element<W: Write>(root: &Element, sink: W, options: &WriteOptions) -> Result<()> {
    let mut root = root.clone();
    root.namespaces
        .get_or_insert_with(Namespace::empty)
        .force_put("", KML_NAMESPACE);
    unprefix(&mut root);

    root.write_with_config(sink, options.emitter_config())
        .map_err(|e| Error::Serialize { source: e })
}

fn unprefix(element: &mut Element) {
    if element.namespace.as_deref() == Some(KML_NAMESPACE) {
        element.prefix = None;
    }
    for child in &mut element.children {
        if let XMLNode::Element(child) = child {
            unprefix(child);
        }
    }
}
