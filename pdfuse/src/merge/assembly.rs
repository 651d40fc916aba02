//! The in-progress output document.
//!
//! Source documents are renumbered into one shared object space as they are
//! appended, and their pages recorded in order. Nothing is written until
//! [`PageAssembly::into_document`] builds a fresh catalog and a single flat
//! page tree over everything appended so far.
//!
//! Bookmarks survive: the top-level outline items of every appended document
//! are chained, in append order, under one new `/Outlines` root. Items that
//! jump through named destinations lose their target, since the source name
//! trees are not carried over.

use std::collections::{BTreeMap, BTreeSet};

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{PdfuseError, Result};
use crate::merge::pages::inline_inherited_attributes;

/// Version written when no appended document declares a usable one.
const DEFAULT_PDF_VERSION: &str = "1.5";

/// Accumulates pages from several documents into one.
#[derive(Debug, Default)]
pub struct PageAssembly {
    objects: BTreeMap<ObjectId, Object>,
    page_ids: Vec<ObjectId>,
    max_id: u32,
    version: Option<(u8, u8)>,
    documents: usize,
    outline_items: Vec<ObjectId>,
    outline_visible: i64,
}

impl PageAssembly {
    /// Create an empty assembly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents appended so far.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Returns true if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.documents == 0
    }

    /// Append all pages of `doc`, in page order.
    ///
    /// Returns the number of pages appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the document's page tree cannot be flattened.
    pub fn append(&mut self, mut doc: Document) -> Result<usize> {
        inline_inherited_attributes(&mut doc)?;

        // Shift this document's ids past everything already held.
        doc.renumber_objects_with(self.max_id + 1);
        self.max_id = self.max_id.max(doc.max_id);

        if let Some(version) = parse_version(&doc.version) {
            self.version = Some(self.version.map_or(version, |v| v.max(version)));
        }

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        let appended = page_ids.len();

        for item_id in top_level_outline_items(&doc) {
            self.outline_visible += 1 + visible_descendants(&doc, item_id);
            self.outline_items.push(item_id);
        }

        self.objects.extend(doc.objects);
        self.page_ids.extend(page_ids);
        self.documents += 1;

        Ok(appended)
    }

    /// Build the merged document.
    ///
    /// The source catalogs and page tree nodes are dropped; every appended
    /// page hangs directly off one new `Pages` root.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing was appended or a page is not a dictionary.
    pub fn into_document(self) -> Result<Document> {
        if self.is_empty() {
            return Err(PdfuseError::merge_failed("no documents were appended"));
        }

        let version = self
            .version
            .map(|(major, minor)| format!("{major}.{minor}"))
            .unwrap_or_else(|| DEFAULT_PDF_VERSION.to_string());

        let mut doc = Document::with_version(version);
        doc.objects = self.objects;
        doc.max_id = self.max_id;

        let pages_id = doc.new_object_id();
        let catalog_id = doc.new_object_id();

        for &page_id in &self.page_ids {
            let page = doc.get_dictionary_mut(page_id).map_err(|e| {
                PdfuseError::merge_failed(format!("Page {page_id:?} is not a dictionary: {e}"))
            })?;
            page.set("Parent", Object::Reference(pages_id));
        }

        let kids: Vec<Object> = self
            .page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Count", Object::Integer(self.page_ids.len() as i64));
        pages.set("Kids", Object::Array(kids));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));

        if !self.outline_items.is_empty() {
            let outlines_id = doc.new_object_id();
            link_outline_items(&mut doc, &self.outline_items, outlines_id)?;

            let mut outlines = Dictionary::new();
            outlines.set("Type", Object::Name(b"Outlines".to_vec()));
            outlines.set("First", Object::Reference(self.outline_items[0]));
            outlines.set(
                "Last",
                Object::Reference(self.outline_items[self.outline_items.len() - 1]),
            );
            outlines.set("Count", Object::Integer(self.outline_visible));

            doc.objects.insert(outlines_id, Object::Dictionary(outlines));
            catalog.set("Outlines", Object::Reference(outlines_id));
        }

        doc.objects.insert(pages_id, Object::Dictionary(pages));
        doc.objects.insert(catalog_id, Object::Dictionary(catalog));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        // Old catalogs, outline roots and page tree nodes are unreachable
        // from the new root.
        doc.prune_objects();
        doc.renumber_objects();

        Ok(doc)
    }
}

/// Ids of the top-level items under `doc`'s outline root, in order.
///
/// A broken or cyclic `/Next` chain ends the walk.
fn top_level_outline_items(doc: &Document) -> Vec<ObjectId> {
    let first = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Outlines"))
        .and_then(Object::as_reference)
        .and_then(|id| doc.get_dictionary(id))
        .and_then(|outlines| outlines.get(b"First"))
        .and_then(Object::as_reference);

    let mut items = Vec::new();
    let mut seen = BTreeSet::new();
    let mut next = first.ok();

    while let Some(id) = next {
        if !seen.insert(id) {
            break;
        }
        let Ok(item) = doc.get_dictionary(id) else {
            break;
        };
        items.push(id);
        next = item.get(b"Next").and_then(Object::as_reference).ok();
    }

    items
}

/// Open descendants an item contributes to its root's `/Count`.
fn visible_descendants(doc: &Document, item_id: ObjectId) -> i64 {
    doc.get_dictionary(item_id)
        .and_then(|item| item.get(b"Count"))
        .and_then(Object::as_i64)
        .map_or(0, |count| count.max(0))
}

/// Rechain `items` as siblings under `parent`.
fn link_outline_items(doc: &mut Document, items: &[ObjectId], parent: ObjectId) -> Result<()> {
    for (i, &item_id) in items.iter().enumerate() {
        let item = doc.get_dictionary_mut(item_id).map_err(|e| {
            PdfuseError::merge_failed(format!("Outline item {item_id:?} is not a dictionary: {e}"))
        })?;

        item.set("Parent", Object::Reference(parent));

        match i.checked_sub(1).map(|prev| items[prev]) {
            Some(prev) => item.set("Prev", Object::Reference(prev)),
            None => {
                item.remove(b"Prev");
            }
        }
        match items.get(i + 1) {
            Some(&next) => item.set("Next", Object::Reference(next)),
            None => {
                item.remove(b"Next");
            }
        }
    }

    Ok(())
}

/// Parse a `major.minor` header version.
fn parse_version(version: &str) -> Option<(u8, u8)> {
    let (major, minor) = version.trim().split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}
