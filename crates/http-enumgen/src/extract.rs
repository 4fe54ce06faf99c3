//! Pull raw rows out of a parsed reference page.
//!
//! Each source page keeps its data in a different structural role: the
//! header list is a table, the status list is a definition list. Both are
//! exposed through [`Extractor`], which walks the parsed document once and
//! yields rows lazily.

use crate::normalize::normalize;
use crate::types::{EnumGenError, EnumGenResult, HeaderRow, StatusRow};
use scraper::{ElementRef, Html, Selector};

/// Default row selector for the header field table.
pub const DEFAULT_ROW_SELECTOR: &str = "tr";
/// Default cell selector, applied inside each row.
pub const DEFAULT_CELL_SELECTOR: &str = "td";
/// Default selector for status code terms.
pub const DEFAULT_TERM_SELECTOR: &str = "div.section-content dt a code";

/// Select the elements holding one source's entries and turn them into rows.
pub trait Extractor {
    type Entry;

    /// Yield every well-formed entry in document order.
    fn extract<'a>(&'a self, document: &'a Html) -> Box<dyn Iterator<Item = Self::Entry> + 'a>;
}

fn compile(selector: &str) -> EnumGenResult<Selector> {
    Selector::parse(selector).map_err(|e| EnumGenError::Selector(format!("{selector}: {e}")))
}

/// Concatenated text of every descendant text node.
fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// Extracts header rows from `<tr>`/`<td>` tables.
pub struct TableRowExtractor {
    rows: Selector,
    cells: Selector,
}

impl TableRowExtractor {
    /// Extractor using the default `tr` / `td` selectors.
    pub fn new() -> EnumGenResult<Self> {
        Self::with_selectors(DEFAULT_ROW_SELECTOR, DEFAULT_CELL_SELECTOR)
    }

    pub fn with_selectors(rows: &str, cells: &str) -> EnumGenResult<Self> {
        Ok(Self {
            rows: compile(rows)?,
            cells: compile(cells)?,
        })
    }

    fn parse_row(&self, row: ElementRef) -> Option<HeaderRow> {
        let cells: Vec<ElementRef> = row.select(&self.cells).collect();
        // Header rows use <th>, and malformed rows are short.
        if cells.len() < 3 {
            return None;
        }

        let names = normalize(&element_text(&cells[0]))
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();

        Some(HeaderRow {
            names,
            description: normalize(&element_text(&cells[1])),
            example: normalize(&element_text(&cells[2])),
        })
    }
}

impl Extractor for TableRowExtractor {
    type Entry = HeaderRow;

    fn extract<'a>(&'a self, document: &'a Html) -> Box<dyn Iterator<Item = HeaderRow> + 'a> {
        Box::new(
            document
                .select(&self.rows)
                .filter_map(move |row| self.parse_row(row)),
        )
    }
}

/// Extracts `"<code> <label>"` status entries from definition-list terms.
pub struct DefinitionListExtractor {
    terms: Selector,
}

impl DefinitionListExtractor {
    /// Extractor using [`DEFAULT_TERM_SELECTOR`].
    pub fn new() -> EnumGenResult<Self> {
        Self::with_selector(DEFAULT_TERM_SELECTOR)
    }

    pub fn with_selector(terms: &str) -> EnumGenResult<Self> {
        Ok(Self {
            terms: compile(terms)?,
        })
    }
}

impl Extractor for DefinitionListExtractor {
    type Entry = StatusRow;

    fn extract<'a>(&'a self, document: &'a Html) -> Box<dyn Iterator<Item = StatusRow> + 'a> {
        Box::new(
            document
                .select(&self.terms)
                .filter_map(|term| parse_status_term(&element_text(&term))),
        )
    }
}

/// Split `"418 I'm a teapot"` into its code and label.
pub fn parse_status_term(text: &str) -> Option<StatusRow> {
    let text = normalize(text);
    let Some((code, label)) = text.split_once(' ') else {
        tracing::warn!("skipping status term without a label: '{text}'");
        return None;
    };
    match code.parse::<u16>() {
        Ok(code) => Some(StatusRow {
            code,
            label: label.to_string(),
        }),
        Err(_) => {
            tracing::warn!("skipping status term with a non-numeric code: '{text}'");
            None
        }
    }
}
