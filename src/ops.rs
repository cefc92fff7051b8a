//! Adapted MuPDF operations
//!
//! Each function takes the caller's [`ErrorContext`](crate::ErrorContext)
//! followed by the arguments of the underlying MuPDF call. On success the
//! call's result comes back unchanged; on failure the details land on the
//! context and the listed sentinel is returned:
//!
//! | operation                  | sentinel |
//! |----------------------------|----------|
//! | `open_document`            | `None`   |
//! | `open_document_with_stream`| `None`   |
//! | `load_page`                | `None`   |
//! | `load_outline`             | `None`   |
//! | `count_pages`              | `-1`     |
//! | `new_stext_page_from_page` | `None`   |
//!
//! Returned handles are owned by the caller and released on drop.

use std::io::Read;

use mupdf::{Document, Outline, Page, TextPage};

use crate::error::GuardError;
use crate::guard::wrap;
use crate::stext::StextOptions;

wrap! {
    /// Open a document from a file path.
    pub fn open_document(path: &str) -> Option<Document> = None,
        Document::open(path).map(Some);

    /// Open a document from a stream.
    ///
    /// `kind` is a MIME type or extension ("application/pdf", "epub", ...)
    /// selecting the document handler. The stream is read to its end first.
    pub fn open_document_with_stream(kind: &str, stream: &mut dyn Read) -> Option<Document> = None, {
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Ok::<_, GuardError>(Some(Document::from_bytes(&data, kind)?))
    };

    /// Load a page by zero-based index.
    pub fn load_page(doc: &Document, page_no: i32) -> Option<Page> = None,
        doc.load_page(page_no).map(Some);

    /// Load the document outline.
    ///
    /// A document without an outline yields `None` without a recorded
    /// failure.
    pub fn load_outline(doc: &Document) -> Option<Vec<Outline>> = None,
        doc.outlines().map(|outlines| Some(outlines).filter(|o| !o.is_empty()));

    /// Number of pages, `-1` on failure.
    pub fn count_pages(doc: &Document) -> i32 = -1,
        doc.page_count();

    /// Extract structured text from a page.
    pub fn new_stext_page_from_page(page: &Page, options: &StextOptions) -> Option<TextPage> = None,
        page.to_text_page(options.to_mupdf_options()).map(Some);
}
