//! Structured Text Options
//!
//! Extraction options for `new_stext_page_from_page` and a helper for
//! reading plain text back out of a text page.

use mupdf::{TextPage, TextPageOptions};
use serde::Deserialize;

/// Options for structured text extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StextOptions {
    /// Preserve whitespace
    pub preserve_whitespace: bool,
    /// Preserve images
    pub preserve_images: bool,
    /// Preserve ligatures
    pub preserve_ligatures: bool,
    /// Inhibit spaces between characters
    pub inhibit_spaces: bool,
}

impl StextOptions {
    /// Flag set handed to `Page::to_text_page`
    pub fn to_mupdf_options(&self) -> TextPageOptions {
        [
            (self.preserve_whitespace, TextPageOptions::PRESERVE_WHITESPACE),
            (self.preserve_images, TextPageOptions::PRESERVE_IMAGES),
            (self.preserve_ligatures, TextPageOptions::PRESERVE_LIGATURES),
            (self.inhibit_spaces, TextPageOptions::INHIBIT_SPACES),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .fold(TextPageOptions::empty(), |opts, (_, flag)| opts | flag)
    }
}

/// Collect the characters of a text page, one line per text line and a
/// blank line between blocks.
pub fn plain_text(text_page: &TextPage) -> String {
    let mut text = String::new();

    for block in text_page.blocks() {
        for line in block.lines() {
            text.extend(line.chars().filter_map(|ch| ch.char()));
            text.push('\n');
        }
        text.push('\n');
    }

    text
}
