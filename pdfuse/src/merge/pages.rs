//! Page tree helpers.
//!
//! Merging flattens every source page tree into one `Kids` array. Attributes
//! a page inherits from intermediate `Pages` nodes would be lost by that, so
//! they are copied onto the page first.

use lopdf::{Document, Object, ObjectId};

use crate::error::{PdfuseError, Result};

/// Page attributes that may be inherited from an ancestor `Pages` node.
pub const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// Guard against `Parent` cycles in damaged files.
const MAX_TREE_DEPTH: usize = 64;

/// Copy inherited attributes onto each page that lacks them.
///
/// # Errors
///
/// Returns an error if a page listed by the page tree is not a dictionary.
pub fn inline_inherited_attributes(doc: &mut Document) -> Result<()> {
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

    for page_id in page_ids {
        let inherited = inherited_attributes(doc, page_id);
        if inherited.is_empty() {
            continue;
        }

        let page = doc.get_dictionary_mut(page_id).map_err(|e| {
            PdfuseError::merge_failed(format!("Page {page_id:?} is not a dictionary: {e}"))
        })?;
        for (key, value) in inherited {
            page.set(key, value);
        }
    }

    Ok(())
}

/// Collect the nearest ancestor value of every inheritable key the page lacks.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };

    let mut missing: Vec<&[u8]> = INHERITABLE_ATTRIBUTES
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut found = Vec::new();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        if missing.is_empty() || depth >= MAX_TREE_DEPTH {
            break;
        }

        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        depth += 1;
    }

    found
}

/// Read the `MediaBox` width of a page, if it is a plain number array.
pub fn media_box_width(doc: &Document, page_id: ObjectId) -> Option<f32> {
    let page = doc.get_dictionary(page_id).ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let x0 = media_box[0].as_float().ok()?;
    let x1 = media_box[2].as_float().ok()?;
    Some(x1 - x0)
}
