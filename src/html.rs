//! Locating content by weak structural landmarks.
//!
//! Wikipedia pages have no stable schema. Sections are found by heading
//! anchor id, and the data table for a section is the nearest table that
//! follows the anchor in document order. That nearest-following-table rule
//! is a rendering convention, not a contract; it is the known fragility this
//! module commits to rather than attempting schema inference.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static TH: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static A: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Find the element carrying a heading anchor id ("Teams",
/// "Current_roster", "Career_statistics"). Absence is a plain `None`;
/// callers treat the section as missing.
pub fn section_anchor<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().id() == Some(id))
}

/// First `<table>` after the anchor in document order.
pub fn table_after<'a>(doc: &'a Html, anchor: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut past_anchor = false;

    for node in doc.root_element().descendants() {
        if node.id() == anchor.id() {
            past_anchor = true;
            continue;
        }
        if !past_anchor {
            continue;
        }
        if let Some(el) = ElementRef::wrap(node) {
            if el.value().name() == "table" {
                return Some(el);
            }
        }
    }

    None
}

pub fn rows<'a>(table: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    table.select(&TR)
}

pub fn header_cells<'a>(row: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.select(&TH)
}

pub fn data_cells<'a>(row: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.select(&TD)
}

/// Concatenated text content of an element.
pub fn cell_text(el: &ElementRef) -> String {
    el.text().collect::<String>()
}

/// First `<a href>` inside a cell, as `(href, link text)`.
pub fn first_link(cell: &ElementRef) -> Option<(String, String)> {
    let a = cell.select(&A).next()?;
    let href = a.value().attr("href")?.to_string();
    Some((href, cell_text(&a)))
}

/// Numeric value of a `colspan`/`rowspan` style attribute.
fn span_count(el: &ElementRef, attr: &str) -> Option<u32> {
    el.value().attr(attr)?.trim().parse().ok()
}

/// A header cell that groups the rows around it.
///
/// Conference banners span all columns of their row; division banners span
/// the rows of their group. Both update carried-forward state during a table
/// walk without producing a record of their own.
#[derive(Debug, PartialEq, Eq)]
pub enum Banner {
    Conference(String),
    Division(String),
}

/// Classify a row's grouping banner, if any.
///
/// Rows are classified by shape, not by an explicit header flag: a `th`
/// spanning multiple columns in a row without data cells is a conference
/// banner; a `th` spanning multiple rows is a division banner (the same row
/// usually also carries the group's first data cells).
pub fn banner(row: &ElementRef) -> Option<Banner> {
    let th = header_cells(row).next()?;

    if span_count(&th, "colspan").is_some_and(|n| n > 1) && data_cells(row).next().is_none() {
        return Some(Banner::Conference(cell_text(&th).trim().to_string()));
    }

    if span_count(&th, "rowspan").is_some_and(|n| n > 1) {
        return Some(Banner::Division(cell_text(&th).trim().to_string()));
    }

    None
}
