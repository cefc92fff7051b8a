//! Test fixtures: small PDFs written on the fly

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Where an outline entry points
pub enum Target {
    /// Zero-based page index
    Page(usize),
    /// Named destination, looked up in the catalog's name tree
    Named(String),
}

/// Builds a PDF with one line of Helvetica text per page and an optional
/// flat outline.
#[derive(Default)]
pub struct PdfBuilder {
    pages: Vec<String>,
    outline: Vec<(String, Target)>,
    declared_count: Option<i64>,
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, text: &str) -> Self {
        self.pages.push(text.to_string());
        self
    }

    /// Outline entry pointing at zero-based page `target`
    pub fn bookmark(mut self, title: &str, target: usize) -> Self {
        self.outline.push((title.to_string(), Target::Page(target)));
        self
    }

    /// Outline entry pointing at a named destination. No name tree is
    /// written, so the name never resolves.
    pub fn named_bookmark(mut self, title: &str, name: &str) -> Self {
        self.outline
            .push((title.to_string(), Target::Named(name.to_string())));
        self
    }

    /// Write `count` as the page tree's `/Count` instead of the real number
    pub fn declared_count(mut self, count: i64) -> Self {
        self.declared_count = Some(count);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        // 1 catalog, 2 page tree, 3 font, then page/content pairs, then outline
        let page_obj = |i: usize| 4 + 2 * i;
        let content_obj = |i: usize| 5 + 2 * i;
        let outline_root = 4 + 2 * self.pages.len();
        let outline_item = |i: usize| outline_root + 1 + i;

        let mut objects: Vec<String> = Vec::new();

        let outlines_ref = if self.outline.is_empty() {
            String::new()
        } else {
            format!(" /Outlines {} 0 R /PageMode /UseOutlines", outline_root)
        };
        objects.push(format!("<< /Type /Catalog /Pages 2 0 R{} >>", outlines_ref));

        let kids: Vec<String> = (0..self.pages.len())
            .map(|i| format!("{} 0 R", page_obj(i)))
            .collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            self.declared_count.unwrap_or(self.pages.len() as i64)
        ));
        objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

        for (i, text) in self.pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents {} 0 R /Resources << /Font << /F1 3 0 R >> >> >>",
                content_obj(i)
            ));
            let stream = format!("BT /F1 24 Tf 72 700 Td ({}) Tj ET", text);
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                stream.len(),
                stream
            ));
        }

        if !self.outline.is_empty() {
            let last = self.outline.len() - 1;
            objects.push(format!(
                "<< /Type /Outlines /First {} 0 R /Last {} 0 R /Count {} >>",
                outline_item(0),
                outline_item(last),
                self.outline.len()
            ));
            for (i, (title, target)) in self.outline.iter().enumerate() {
                let dest = match target {
                    Target::Page(page) => format!("[{} 0 R /Fit]", page_obj(*page)),
                    Target::Named(name) => format!("({})", name),
                };
                let mut item = format!(
                    "<< /Title ({}) /Parent {} 0 R /Dest {}",
                    title, outline_root, dest
                );
                if i > 0 {
                    item.push_str(&format!(" /Prev {} 0 R", outline_item(i - 1)));
                }
                if i < last {
                    item.push_str(&format!(" /Next {} 0 R", outline_item(i + 1)));
                }
                item.push_str(" >>");
                objects.push(item);
            }
        }

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref_offset = out.len();
        out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        out.push_str("0000000000 65535 f \n");
        for offset in offsets {
            out.push_str(&format!("{:010} 00000 n \n", offset));
        }
        out.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        ));

        out.into_bytes()
    }

    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).expect("write fixture");
        path
    }
}

/// Three pages of text with a two-entry outline
pub fn sample_pdf() -> PdfBuilder {
    PdfBuilder::new()
        .page("Hello page one")
        .page("Hello page two")
        .page("Hello page three")
        .bookmark("Introduction", 0)
        .bookmark("Chapter Two", 1)
}
