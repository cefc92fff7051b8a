//! Table-of-contents entries built from a loaded outline

use serde::Serialize;

/// One outline entry with its nested children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub title: String,
    /// Zero-based target page, when the entry points inside the document
    pub page: Option<u32>,
    pub depth: usize,
    pub children: Vec<TocEntry>,
}

/// Convert MuPDF outline nodes into TOC entries
pub fn toc_from_outlines(outlines: &[mupdf::Outline]) -> Vec<TocEntry> {
    convert(outlines, 0)
}

fn convert(outlines: &[mupdf::Outline], depth: usize) -> Vec<TocEntry> {
    outlines
        .iter()
        .map(|outline| TocEntry {
            title: label(&outline.title),
            page: target_page(outline.page),
            depth,
            children: convert(&outline.down, depth + 1),
        })
        .collect()
}

/// MuPDF reports an unresolvable destination as page -1, which arrives
/// here as `u32::MAX`.
fn target_page(page: Option<u32>) -> Option<u32> {
    page.filter(|&p| p != u32::MAX)
}

fn label(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        "Untitled".to_string()
    } else {
        title.to_string()
    }
}

/// Depth-first walk over a TOC tree
pub fn flatten(entries: &[TocEntry]) -> Vec<&TocEntry> {
    let mut out = Vec::new();
    walk(entries, &mut out);
    out
}

fn walk<'a>(entries: &'a [TocEntry], out: &mut Vec<&'a TocEntry>) {
    for entry in entries {
        out.push(entry);
        walk(&entry.children, out);
    }
}
