// src/core/html.rs
//! HTML table extraction.
//!
//! Turns every `<table>` of a document into a rectangular grid of text cells:
//! - header rows come from `<thead>`, or from leading rows made only of `<th>`
//!   when there is no `<thead>`;
//! - `<tfoot>` rows are appended after the body;
//! - `colspan` / `rowspan` are expanded so each covered position repeats the
//!   spanning cell's text;
//! - ragged rows are padded with empty cells to the widest row.
//!
//! Tables without any text (spacers, layout shells) are dropped.
//!
//! Nested tables are extracted as tables of their own; their rows never leak
//! into the enclosing table.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;
use crate::error::{Error, Result};

// Upper bound for colspan / rowspan values.
const MAX_SPAN: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlTable {
    pub headers: Vec<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl HtmlTable {
    pub fn width(&self) -> usize {
        self.headers
            .iter()
            .chain(self.rows.iter())
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
    }

    /// At least one cell holds text.
    pub fn has_text(&self) -> bool {
        self.headers
            .iter()
            .chain(self.rows.iter())
            .flatten()
            .any(|c| !c.is_empty())
    }

    fn pad(&mut self) {
        let w = self.width();
        for r in self.headers.iter_mut().chain(self.rows.iter_mut()) {
            r.resize(w, s!());
        }
    }
}

struct RawCell {
    text: String,
    header: bool,
    colspan: usize,
    rowspan: usize,
}

#[derive(Default)]
struct Sections {
    head: Vec<Vec<RawCell>>,
    body: Vec<Vec<RawCell>>,
    foot: Vec<Vec<RawCell>>,
}

/// All tables of `doc` holding some text, in document order.
pub fn extract_tables(doc: &str) -> Vec<HtmlTable> {
    let html = Html::parse_document(doc);

    html.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "table")
        .map(parse_table)
        .filter(HtmlTable::has_text)
        .collect()
}

/// The last table of `doc`; `url` only labels the error.
pub fn last_table(doc: &str, url: &str) -> Result<HtmlTable> {
    extract_tables(doc)
        .pop()
        .ok_or_else(|| Error::NoTables { url: s!(url) })
}

fn parse_table(table: ElementRef<'_>) -> HtmlTable {
    let mut sections = Sections::default();

    for tr in table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "tr")
        .filter(|tr| owning_table(*tr) == Some(table))
    {
        let cells = row_cells(tr);
        match parent_name(tr) {
            Some("thead") => sections.head.push(cells),
            Some("tfoot") => sections.foot.push(cells),
            _ => sections.body.push(cells),
        }
    }

    // No <thead>: leading all-<th> body rows are the header.
    if sections.head.is_empty() {
        let n = sections
            .body
            .iter()
            .take_while(|r| !r.is_empty() && r.iter().all(|c| c.header))
            .count();
        sections.head = sections.body.drain(..n).collect();
    }

    let mut rows = expand_spans(sections.body);
    rows.extend(expand_spans(sections.foot));

    let mut out = HtmlTable { headers: expand_spans(sections.head), rows };
    out.pad();
    out
}

fn owning_table(e: ElementRef<'_>) -> Option<ElementRef<'_>> {
    e.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "table")
}

fn parent_name<'a>(e: ElementRef<'a>) -> Option<&'a str> {
    e.parent()
        .and_then(ElementRef::wrap)
        .map(|p| p.value().name())
}

fn row_cells(tr: ElementRef<'_>) -> Vec<RawCell> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .map(|c| RawCell {
            text: normalize_ws(&c.text().collect::<String>()),
            header: c.value().name() == "th",
            colspan: span_attr(c, "colspan"),
            rowspan: span_attr(c, "rowspan"),
        })
        .collect()
}

fn span_attr(cell: ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

/// Lay cells out on a grid. `carry` maps a column to text still owed by a
/// rowspan from an earlier row, with the number of rows left.
fn expand_spans(rows: Vec<Vec<RawCell>>) -> Vec<Vec<String>> {
    let mut out = Vec::with_capacity(rows.len());
    let mut carry: BTreeMap<usize, (String, usize)> = BTreeMap::new();

    for cells in rows {
        let mut line: Vec<String> = Vec::new();
        let mut next: BTreeMap<usize, (String, usize)> = BTreeMap::new();

        for cell in cells {
            for _ in 0..cell.colspan {
                take_carried(&mut carry, &mut line, &mut next);
                if cell.rowspan > 1 {
                    next.insert(line.len(), (cell.text.clone(), cell.rowspan - 1));
                }
                line.push(cell.text.clone());
            }
        }
        take_carried(&mut carry, &mut line, &mut next);

        // Spans owed past the end of this row (gaps padded).
        for (col, (text, left)) in std::mem::take(&mut carry) {
            while line.len() < col {
                line.push(s!());
            }
            if left > 1 {
                next.insert(line.len(), (text.clone(), left - 1));
            }
            line.push(text);
        }

        carry = next;
        if !line.is_empty() {
            out.push(line);
        }
    }
    out
}

fn take_carried(
    carry: &mut BTreeMap<usize, (String, usize)>,
    line: &mut Vec<String>,
    next: &mut BTreeMap<usize, (String, usize)>,
) {
    while let Some((text, left)) = carry.remove(&line.len()) {
        if left > 1 {
            next.insert(line.len(), (text.clone(), left - 1));
        }
        line.push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn thead_and_tbody() {
        let doc = r#"
            <table>
              <thead><tr><th>Town</th><th>Price</th></tr></thead>
              <tbody>
                <tr><td> Acton </td><td>$450,000</td></tr>
                <tr><td>Arlington</td><td>$610,000</td></tr>
              </tbody>
            </table>"#;
        let t = last_table(doc, "t").unwrap();
        assert_eq!(t.headers, vec![row!["Town", "Price"]]);
        assert_eq!(
            t.rows,
            vec![row!["Acton", "$450,000"], row!["Arlington", "$610,000"]]
        );
    }

    #[test]
    fn leading_th_row_becomes_header() {
        let doc = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
        let t = last_table(doc, "t").unwrap();
        assert_eq!(t.headers, vec![row!["A", "B"]]);
        assert_eq!(t.rows, vec![row!["1", "2"]]);
    }

    #[test]
    fn row_header_cell_does_not_make_a_header() {
        let doc = "<table><tr><th>Acton</th><td>1</td></tr></table>";
        let t = last_table(doc, "t").unwrap();
        assert!(t.headers.is_empty());
        assert_eq!(t.rows, vec![row!["Acton", "1"]]);
    }

    #[test]
    fn colspan_and_rowspan_expand() {
        let doc = r#"
            <table>
              <tr><td rowspan="2">X</td><td colspan="2">Y</td></tr>
              <tr><td>a</td><td>b</td></tr>
            </table>"#;
        let t = last_table(doc, "t").unwrap();
        assert_eq!(t.rows, vec![row!["X", "Y", "Y"], row!["X", "a", "b"]]);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let doc = "<table><tr><td>1</td></tr><tr><td>2</td><td>3</td></tr></table>";
        let t = last_table(doc, "t").unwrap();
        assert_eq!(t.rows, vec![row!["1", ""], row!["2", "3"]]);
    }

    #[test]
    fn nested_rows_stay_with_their_table() {
        let doc = r#"
            <table id="outer">
              <tr><td>outer<table><tr><td>inner</td></tr></table></td></tr>
            </table>"#;
        let tables = extract_tables(doc);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[1].rows, vec![row!["inner"]]);
    }

    #[test]
    fn footer_goes_after_body() {
        let doc = r#"
            <table>
              <tfoot><tr><td>total</td></tr></tfoot>
              <tbody><tr><td>row</td></tr></tbody>
            </table>"#;
        let t = last_table(doc, "t").unwrap();
        assert_eq!(t.rows, vec![row!["row"], row!["total"]]);
    }

    #[test]
    fn rowspan_keeps_its_column_under_colspan() {
        let doc = r#"
            <table>
              <tr><td>a</td><td rowspan="2">B</td><td>c</td></tr>
              <tr><td colspan="3">W</td></tr>
            </table>"#;
        let t = last_table(doc, "t").unwrap();
        assert_eq!(t.rows, vec![row!["a", "B", "c", ""], row!["W", "B", "W", "W"]]);
    }

    #[test]
    fn blank_tables_are_dropped() {
        let doc = r#"
            <table><tr><th>Town</th><th>Median</th></tr><tr><td>Acton</td><td>1</td></tr></table>
            <table><tr><td>&nbsp;</td><td> </td></tr></table>"#;
        let tables = extract_tables(doc);
        assert_eq!(tables.len(), 1);
        assert_eq!(last_table(doc, "t").unwrap().headers, vec![row!["Town", "Median"]]);
    }

    #[test]
    fn no_tables() {
        assert!(matches!(
            last_table("<p>nothing here</p>", "u"),
            Err(Error::NoTables { url }) if url == "u"
        ));
        assert!(extract_tables("<table></table>").is_empty());
    }
}
