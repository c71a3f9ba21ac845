//! Outline source backed by lopdf.

use std::io::Read;
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};
use crate::model::Destination;

use super::{decode_text_string, OutlineSource};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Nesting limit when walking a named-destination tree.
const MAX_NAME_TREE_DEPTH: usize = 32;

/// Handle of a node in a PDF outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineNodeId {
    /// The `/Outlines` dictionary referenced from the document catalog.
    Outlines,
    /// An outline item object.
    Item(ObjectId),
}

/// [`OutlineSource`] over a PDF document loaded with lopdf.
pub struct LopdfSource {
    doc: LopdfDocument,
    pages: Vec<ObjectId>,
}

impl LopdfSource {
    /// Load from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Load from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !data.starts_with(PDF_MAGIC) {
            return Err(Error::UnknownFormat);
        }
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc))
    }

    /// Load from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Wrap an already loaded `lopdf::Document`.
    pub fn from_document(doc: LopdfDocument) -> Self {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; outline strings may be unreadable");
        }
        let pages = doc.get_pages().into_values().collect();
        Self { doc, pages }
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Follow a reference to the object it points at.
    fn resolve<'a>(&'a self, obj: &'a Object) -> Result<&'a Object> {
        match obj {
            Object::Reference(id) => Ok(self.doc.get_object(*id)?),
            other => Ok(other),
        }
    }

    fn node_dict(&self, node: &OutlineNodeId) -> Result<&Dictionary> {
        match node {
            OutlineNodeId::Outlines => {
                let outlines = self.doc.catalog()?.get(b"Outlines")?;
                Ok(self.resolve(outlines)?.as_dict()?)
            }
            OutlineNodeId::Item(id) => Ok(self.doc.get_dictionary(*id)?),
        }
    }

    /// Follow the `key` link of `node`.
    ///
    /// A link to an object that is missing or not a dictionary is reported
    /// as [`Error::Corrupted`].
    fn linked_item(&self, node: &OutlineNodeId, key: &[u8]) -> Result<Option<OutlineNodeId>> {
        let dict = self.node_dict(node)?;
        let Ok(Object::Reference(id)) = dict.get(key) else {
            return Ok(None);
        };
        match self.doc.get_object(*id) {
            Ok(Object::Dictionary(_)) => Ok(Some(OutlineNodeId::Item(*id))),
            _ => Err(Error::Corrupted(format!(
                "/{} of outline node {:?} points to missing or non-dictionary object {} {} R",
                String::from_utf8_lossy(key),
                node,
                id.0,
                id.1
            ))),
        }
    }

    /// Explicit destination array of an outline item.
    ///
    /// Checks `/Dest` first, then a `/GoTo` action in `/A`. Named
    /// destinations are looked up in the document's name tables.
    fn destination_array(&self, node: &OutlineNodeId) -> Result<Option<&[Object]>> {
        let dict = self.node_dict(node)?;

        if let Ok(dest) = dict.get(b"Dest") {
            return Ok(self.explicit_destination(dest, 0));
        }

        if let Ok(action) = dict.get(b"A") {
            let action_dict = self.resolve(action).ok().and_then(|a| a.as_dict().ok());
            if let Some(action_dict) = action_dict {
                let is_goto =
                    matches!(action_dict.get(b"S"), Ok(Object::Name(s)) if s.as_slice() == b"GoTo");
                if is_goto {
                    if let Ok(dest) = action_dict.get(b"D") {
                        return Ok(self.explicit_destination(dest, 0));
                    }
                }
            }
        }

        Ok(None)
    }

    fn explicit_destination<'a>(&'a self, dest: &'a Object, depth: usize) -> Option<&'a [Object]> {
        if depth > MAX_NAME_TREE_DEPTH {
            return None;
        }
        match self.resolve(dest).ok()? {
            Object::Array(arr) if !arr.is_empty() => Some(arr.as_slice()),
            Object::Dictionary(d) => self.explicit_destination(d.get(b"D").ok()?, depth + 1),
            Object::String(bytes, _) => {
                let target = self.named_destination(bytes)?;
                self.explicit_destination(target, depth + 1)
            }
            Object::Name(name) => {
                let target = self.named_destination(name)?;
                self.explicit_destination(target, depth + 1)
            }
            _ => None,
        }
    }

    /// Look up a named destination in `/Names /Dests`, then the legacy `/Dests`.
    fn named_destination(&self, name: &[u8]) -> Option<&Object> {
        let catalog = self.doc.catalog().ok()?;

        if let Ok(names) = catalog.get(b"Names") {
            let found = self
                .resolve(names)
                .ok()
                .and_then(|n| n.as_dict().ok())
                .and_then(|n| n.get(b"Dests").ok())
                .and_then(|d| self.resolve(d).ok())
                .and_then(|d| d.as_dict().ok())
                .and_then(|tree| self.lookup_name_tree(tree, name, 0));
            if found.is_some() {
                return found;
            }
        }

        let dests = self.resolve(catalog.get(b"Dests").ok()?).ok()?.as_dict().ok()?;
        dests.get(name).ok()
    }

    fn lookup_name_tree<'a>(
        &'a self,
        node: &'a Dictionary,
        name: &[u8],
        depth: usize,
    ) -> Option<&'a Object> {
        if depth > MAX_NAME_TREE_DEPTH {
            log::warn!("Named destination tree is nested too deeply");
            return None;
        }

        if let Ok(names) = node.get(b"Names") {
            let pairs = self.resolve(names).ok()?.as_array().ok()?;
            for pair in pairs.chunks(2) {
                if let [key, value] = pair {
                    if let Ok(Object::String(key, _)) = self.resolve(key) {
                        if key.as_slice() == name {
                            return Some(value);
                        }
                    }
                }
            }
        }

        let kids = self.resolve(node.get(b"Kids").ok()?).ok()?.as_array().ok()?;
        kids.iter()
            .filter_map(|kid| self.resolve(kid).ok()?.as_dict().ok())
            .find_map(|kid| self.lookup_name_tree(kid, name, depth + 1))
    }
}

impl OutlineSource for LopdfSource {
    type Node = OutlineNodeId;
    type Page = ObjectId;

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn outline_root(&self) -> Result<Option<OutlineNodeId>> {
        let catalog = self.doc.catalog()?;
        let Ok(outlines) = catalog.get(b"Outlines") else {
            return Ok(None);
        };
        match self.resolve(outlines)? {
            Object::Dictionary(_) => Ok(Some(OutlineNodeId::Outlines)),
            _ => Ok(None),
        }
    }

    fn first_child(&self, node: &OutlineNodeId) -> Result<Option<OutlineNodeId>> {
        self.linked_item(node, b"First")
    }

    fn last_child(&self, node: &OutlineNodeId) -> Result<Option<OutlineNodeId>> {
        self.linked_item(node, b"Last")
    }

    fn next_sibling(&self, node: &OutlineNodeId) -> Result<Option<OutlineNodeId>> {
        match node {
            OutlineNodeId::Outlines => Ok(None),
            OutlineNodeId::Item(_) => self.linked_item(node, b"Next"),
        }
    }

    fn title(&self, node: &OutlineNodeId) -> Result<String> {
        let dict = self.node_dict(node)?;
        let title = match dict.get(b"Title") {
            Ok(obj) => match self.resolve(obj)? {
                Object::String(bytes, _) => decode_text_string(bytes),
                Object::Name(bytes) => String::from_utf8_lossy(bytes).to_string(),
                _ => String::new(),
            },
            Err(_) => String::new(),
        };
        Ok(title)
    }

    fn destination(&self, node: &OutlineNodeId) -> Result<Option<Destination>> {
        let Some(arr) = self.destination_array(node)? else {
            return Ok(None);
        };

        let kind = match arr.get(1) {
            Some(Object::Name(kind)) => String::from_utf8_lossy(kind).to_string(),
            _ => return Ok(None),
        };
        let params: Vec<Option<f32>> = arr[2..].iter().map(number).collect();
        Ok(Destination::from_kind(&kind, &params))
    }

    fn resolve_page(&self, node: &OutlineNodeId) -> Result<Option<ObjectId>> {
        let page = self
            .destination_array(node)?
            .and_then(|arr| arr.first())
            .and_then(|first| first.as_reference().ok());
        Ok(page)
    }

    fn pages(&self) -> Result<Vec<ObjectId>> {
        Ok(self.pages.clone())
    }
}

/// Read a destination coordinate; `null` and non-numbers become `None`.
fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number(&Object::Integer(42)), Some(42.0));
        assert_eq!(number(&Object::Real(3.5)), Some(3.5));
        assert_eq!(number(&Object::Null), None);
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = LopdfSource::from_bytes(b"<!DOCTYPE html><html></html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_rejects_empty_bytes() {
        assert!(LopdfSource::from_bytes(&[]).is_err());
    }
}
