//! KML track documents.

use super::writer::{WriteOptions, write_element};
use crate::constants::{COORDINATES_PATH, KML_NAMESPACE};
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use xmltree::{Element, XMLNode};

/// A parsed KML file holding one track.
#[derive(Debug, Clone)]
pub struct TrackDocument {
    root: Element,
    source: PathBuf,
}

impl TrackDocument {
    /// Read and parse a KML file.
    ///
    /// The file handle is released before this returns.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::InputOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc = Self::from_reader(BufReader::new(file), path)?;
        debug!("Parsed {}", path.display());
        Ok(doc)
    }

    /// Parse a KML document from any reader. `source` is only used in errors.
    pub fn from_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let root = Element::parse(reader).map_err(|e| Error::Parse {
            path: source.clone(),
            source: e,
        })?;
        Ok(Self { root, source })
    }

    /// Where this document was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Root element of the document.
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// The `Document/Placemark/LineString/coordinates` element, if present.
    pub fn coordinates(&self) -> Option<&Element> {
        COORDINATES_PATH
            .iter()
            .try_fold(&self.root, |elem, name| {
                elem.get_child((*name, KML_NAMESPACE))
            })
    }

    fn coordinates_mut(&mut self) -> Option<&mut Element> {
        COORDINATES_PATH
            .iter()
            .try_fold(&mut self.root, |elem, name| {
                elem.get_mut_child((*name, KML_NAMESPACE))
            })
    }

    /// Raw coordinate text. An element with no text yields an empty string.
    pub fn coordinates_text(&self) -> Result<Cow<'_, str>> {
        let elem = self.coordinates().ok_or_else(|| self.structure_error())?;
        Ok(elem.get_text().unwrap_or(Cow::Borrowed("")))
    }

    /// Replace the coordinate text, keeping every other node in the tree.
    pub fn set_coordinates_text(&mut self, text: String) -> Result<()> {
        let Some(elem) = self.coordinates_mut() else {
            return Err(self.structure_error());
        };
        elem.children
            .retain(|node| !matches!(node, XMLNode::Text(_) | XMLNode::CData(_)));
        elem.children.push(XMLNode::Text(text));
        Ok(())
    }

    /// Serialize the document.
    pub fn write_to<W: Write>(&self, sink: W, options: &WriteOptions) -> Result<()> {
        write_element(&self.root, sink, options)
    }

    fn structure_error(&self) -> Error {
        let mut elem = &self.root;
        let mut missing = COORDINATES_PATH[0];
        for name in COORDINATES_PATH {
            missing = name;
            match elem.get_child((name, KML_NAMESPACE)) {
                Some(child) => elem = child,
                None => break,
            }
        }
        Error::Structure {
            path: self.source.clone(),
            expected: COORDINATES_PATH.join("/"),
            missing: missing.to_string(),
        }
    }
}
