//! MuPDF Guard
//!
//! Sentinel-returning adapters over MuPDF document operations. Every adapted
//! call takes an [`ErrorContext`] and, instead of surfacing a failure,
//! records it on the context and returns a fixed "no result" value
//! (`None` for handles, `-1` for the page count).
//!
//! # Usage
//!
//! ```rust,ignore
//! use mupdf_guard::{count_pages, load_page, open_document, ErrorContext};
//!
//! let mut ctx = ErrorContext::new();
//!
//! let Some(doc) = open_document(&mut ctx, "book.pdf") else {
//!     eprintln!("open failed: {}", ctx.last_failure().unwrap());
//!     return;
//! };
//!
//! let pages = count_pages(&mut ctx, &doc);
//! if pages > 0 {
//!     let first = load_page(&mut ctx, &doc, 0);
//! }
//! ```
//!
//! # Thread Safety
//!
//! Adapters borrow the context mutably, so one context serves one call at a
//! time. Threads working in parallel each create their own context.

mod config;
mod context;
mod error;
mod guard;
mod ops;
pub mod outline;
pub mod stext;

pub use config::{FailureLevel, GuardConfig};
pub use context::ErrorContext;
pub use error::{Failure, FailureKind, GuardError, GuardResult};
pub use guard::guarded;
pub use ops::{
    count_pages, load_outline, load_page, new_stext_page_from_page, open_document,
    open_document_with_stream,
};
pub use outline::TocEntry;
pub use stext::StextOptions;
