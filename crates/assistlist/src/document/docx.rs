//! `.docx` output for a [`Layout`], built with `docx-rust`.
//!
//! Each page becomes one 2x2 table. A paragraph holding a page-break run sits
//! between consecutive tables, and the closing section properties carry the
//! page size and margins. Cell paragraphs keep Word's default left alignment.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use docx_rust::document::{
    BodyContent, Break, BreakType, Paragraph, ParagraphContent, Run, RunContent, Table, TableCell,
    TableCellContent, TableRow, TableRowContent, Text,
};
use docx_rust::formatting::{CharacterProperty, PageMargin, PageSize, SectionProperty};
use docx_rust::Docx;
use tracing::debug;

use super::layout::{Layout, Page, PageSetup};
use crate::error::{Error, Result};
use crate::store::ensure_parent_dir;

/// Write `layout` as a `.docx` file at `path`, replacing any existing file.
///
/// Missing parent directories are created. Nothing is written when a cell
/// holds text that cannot be stored in the document.
///
/// # Errors
///
/// Returns an error if a cell holds an unprintable character, or if the file
/// cannot be created or written.
pub fn write_file(layout: &Layout, setup: &PageSetup, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut docx = build(layout, setup)?;

    ensure_parent_dir(path)?;
    let file = File::create(path)
        .map_err(|e| Error::document_write(path, format!("failed to create file: {e}")))?;
    docx.write(file).map_err(|e| Error::document_write(path, e.to_string()))?;

    debug!("Wrote {} pages to {}", layout.page_count(), path.display());
    Ok(())
}

/// Write `layout` as a `.docx` package into `writer`.
///
/// # Errors
///
/// Returns an error if a cell holds an unprintable character or the package
/// cannot be written.
pub fn write_to<W: Write + Seek>(layout: &Layout, setup: &PageSetup, writer: W) -> Result<W> {
    let mut docx = build(layout, setup)?;
    docx.write(writer).map_err(|e| Error::Docx {
        message: e.to_string(),
    })
}

/// Build the in-memory document for `layout`.
fn build<'a>(layout: &Layout, setup: &PageSetup) -> Result<Docx<'a>> {
    check_printable(layout)?;

    let mut docx = Docx::default();
    let body = &mut docx.document.body.content;
    for (i, page) in layout.pages.iter().enumerate() {
        if i > 0 {
            body.push(BodyContent::Paragraph(page_break()));
        }
        body.push(BodyContent::Table(page_table(page, setup)));
    }
    body.push(BodyContent::SectionProperty(section(setup)));
    Ok(docx)
}

fn page_table<'a>(page: &Page, setup: &PageSetup) -> Table<'a> {
    let rows = page
        .rows()
        .map(|row| TableRow {
            cells: row
                .iter()
                .map(|cell| TableRowContent::TableCell(table_cell(cell.as_deref(), setup)))
                .collect(),
            ..TableRow::default()
        })
        .collect();
    Table {
        rows,
        ..Table::default()
    }
}

/// A cell always holds one paragraph; blank slots get an empty one.
fn table_cell<'a>(text: Option<&str>, setup: &PageSetup) -> TableCell<'a> {
    let paragraph = match text {
        Some(text) => Paragraph {
            content: vec![ParagraphContent::Run(text_run(text, setup))],
            ..Paragraph::default()
        },
        None => Paragraph::default(),
    };
    TableCell {
        content: vec![TableCellContent::Paragraph(paragraph)],
        ..TableCell::default()
    }
}

/// One run for the whole cell; newlines become line breaks.
fn text_run<'a>(text: &str, setup: &PageSetup) -> Run<'a> {
    let mut content = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            content.push(RunContent::Break(Break::default()));
        }
        if !line.is_empty() {
            content.push(RunContent::Text(Text::from(line.to_owned())));
        }
    }
    Run {
        property: Some(CharacterProperty::default().size(setup.font_half_points)),
        content,
        ..Run::default()
    }
}

fn page_break<'a>() -> Paragraph<'a> {
    Paragraph {
        content: vec![ParagraphContent::Run(Run {
            content: vec![RunContent::Break(Break::from(BreakType::Page))],
            ..Run::default()
        })],
        ..Paragraph::default()
    }
}

fn section<'a>(setup: &PageSetup) -> SectionProperty<'a> {
    SectionProperty {
        page_size: Some(PageSize {
            weight: setup.width as isize,
            height: setup.height as isize,
            ..PageSize::default()
        }),
        page_margin: Some(PageMargin {
            top: Some(setup.margin as isize),
            right: Some(setup.margin as isize),
            bottom: Some(setup.margin as isize),
            left: Some(setup.margin as isize),
            header: Some(setup.margin as isize),
            footer: Some(setup.margin as isize),
            gutter: Some(0),
            ..PageMargin::default()
        }),
        ..SectionProperty::default()
    }
}

/// XML 1.0 cannot carry most C0 control characters, nor U+FFFE and U+FFFF.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || matches!(c, '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

fn check_printable(layout: &Layout) -> Result<()> {
    let cells = layout.pages.iter().flat_map(Page::rows).flatten().flatten();
    for text in cells {
        for line in text.split('\n') {
            if let Some(character) = line.chars().find(|c| !is_xml_char(*c)) {
                return Err(Error::UnprintableText {
                    text: line.to_owned(),
                    character,
                });
            }
        }
    }
    Ok(())
}
