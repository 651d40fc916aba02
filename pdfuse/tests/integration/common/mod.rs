//! Shared helpers for the integration tests.
//!
//! Test PDFs are generated on the fly. Every page gets a caller-chosen
//! MediaBox width so the order of pages in a merged file can be read back.

use lopdf::{Document, Object, dictionary};
use std::fs;
use std::path::{Path, PathBuf};

use pdfuse::merge::pages::media_box_width;

/// Write a PDF with one page per entry in `widths`.
pub fn write_pdf(path: &Path, widths: &[i64]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for &width in widths {
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 842.into()],
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => widths.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();

    path.to_path_buf()
}

/// Write a single-page PDF whose page is `width` points wide.
pub fn write_single_page(path: &Path, width: i64) -> PathBuf {
    write_pdf(path, &[width])
}

/// Write a single-page PDF with one bookmark, `title`, opening that page.
pub fn write_outlined(path: &Path, width: i64, title: &str) -> PathBuf {
    write_single_page(path, width);

    let mut doc = Document::load(path).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let outlines_id = doc.new_object_id();
    let item_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Parent" => outlines_id,
        "Dest" => vec![page_id.into(), "Fit".into()],
    });
    doc.objects.insert(
        outlines_id,
        Object::Dictionary(dictionary! {
            "Type" => "Outlines",
            "First" => item_id,
            "Last" => item_id,
            "Count" => 1,
        }),
    );
    doc.catalog_mut().unwrap().set("Outlines", outlines_id);
    doc.save(path).unwrap();

    path.to_path_buf()
}

/// Top-level bookmark titles of a PDF on disk, in order.
pub fn outline_titles(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    let Ok(outlines) = doc
        .catalog()
        .unwrap()
        .get(b"Outlines")
        .and_then(Object::as_reference)
    else {
        return Vec::new();
    };

    let mut titles = Vec::new();
    let mut next = doc
        .get_dictionary(outlines)
        .unwrap()
        .get(b"First")
        .and_then(Object::as_reference)
        .ok();
    while let Some(id) = next {
        let item = doc.get_dictionary(id).unwrap();
        let title = item.get(b"Title").unwrap().as_str().unwrap();
        titles.push(String::from_utf8_lossy(title).into_owned());
        next = item.get(b"Next").and_then(Object::as_reference).ok();
    }
    titles
}

/// Write arbitrary bytes, creating parent directories.
pub fn write_bytes(path: &Path, contents: &[u8]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
    path.to_path_buf()
}

/// Page widths of a PDF on disk, in page order.
pub fn page_widths(path: &Path) -> Vec<f32> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|id| media_box_width(&doc, id).unwrap())
        .collect()
}
