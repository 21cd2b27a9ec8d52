//! Table decoration: rules, header rows and titled sections.

use super::types::{Column, TableSpec};
use super::util::pad_cell;

/// Width of a rule when none is configured.
pub const DEFAULT_RULE_WIDTH: usize = 100;

/// A fixed-width table framed by dashed rules.
///
/// ```rust
/// use carlog_render::tabular::{Col, Table, TableSpec};
///
/// let table = Table::new(TableSpec::new(vec![Col::fixed(4).header("Id")])).rule_width(4);
/// let section = table.render_section("Ids", &[vec!["1"], vec!["2"]]);
/// assert_eq!(section, "----\nIds\n----\nId  \n----\n1   \n2   \n----\n\n");
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    spec: TableSpec,
    rule_width: usize,
}

impl Table {
    /// Create a table with the default rule width.
    pub fn new(spec: TableSpec) -> Self {
        Table {
            spec,
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }

    /// Set the rule width in display columns.
    pub fn rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    /// A horizontal rule of dashes.
    pub fn rule(&self) -> String {
        "-".repeat(self.rule_width)
    }

    /// Format a data row.
    ///
    /// Missing trailing values render as empty cells; extra values are
    /// ignored.
    pub fn row<S: AsRef<str>>(&self, values: &[S]) -> String {
        self.join_cells(self.spec.columns.iter().enumerate().map(|(i, col)| {
            let value = values.get(i).map(AsRef::as_ref).unwrap_or("");
            pad_cell(value, col.width, col.align)
        }))
    }

    /// Format the header row from the column captions.
    pub fn header_row(&self) -> String {
        self.join_cells(self.spec.columns.iter().map(|col: &Column| {
            pad_cell(col.header.as_deref().unwrap_or(""), col.width, col.header_align)
        }))
    }

    /// Render a complete titled section.
    ///
    /// Layout: rule, title, rule, header row, rule, one line per row, rule,
    /// then an empty line. Every line ends with `\n`.
    pub fn render_section<S: AsRef<str>>(&self, title: &str, rows: &[Vec<S>]) -> String {
        let rule = self.rule();
        let mut lines = vec![
            rule.clone(),
            title.to_string(),
            rule.clone(),
            self.header_row(),
            rule.clone(),
        ];
        lines.extend(rows.iter().map(|row| self.row(row)));
        lines.push(rule);
        lines.push(String::new());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn join_cells(&self, cells: impl Iterator<Item = String>) -> String {
        let decorations = &self.spec.decorations;
        let body = cells.collect::<Vec<_>>().join(&decorations.column_sep);
        format!("{}{}{}", decorations.row_prefix, body, decorations.row_suffix)
    }
}
