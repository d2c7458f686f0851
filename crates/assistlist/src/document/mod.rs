//! Printable document rendering.
//!
//! Loads the store file independently of the editor and writes a legal-size
//! `.docx` document with four entries per page.

pub mod docx;
pub mod layout;

use std::path::Path;

use tracing::info;

pub use layout::{Layout, Page, PageSetup};

use crate::error::Result;
use crate::store;

/// What a render run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The store held no entries; no document was written.
    NoEntries,
    /// A document was written.
    Written {
        /// Entries placed in the document.
        entries: usize,
        /// Pages in the document.
        pages: usize,
    },
}

/// Render the entries stored at `store_path` into a document at `document_path`.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the document cannot be
/// written.
pub fn render(store_path: impl AsRef<Path>, document_path: impl AsRef<Path>) -> Result<RenderOutcome> {
    let entries = store::load(store_path)?;
    if entries.is_empty() {
        info!("No entries to render");
        return Ok(RenderOutcome::NoEntries);
    }

    let layout = Layout::from_entries(&entries);
    let document_path = document_path.as_ref();
    docx::write_file(&layout, &PageSetup::LEGAL, document_path)?;

    info!(
        "Rendered {} entries on {} pages to {}",
        entries.len(),
        layout.page_count(),
        document_path.display()
    );
    Ok(RenderOutcome::Written {
        entries: entries.len(),
        pages: layout.page_count(),
    })
}
