//! Core types for table layout: columns, alignment and decorations.

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
}

/// A fixed-width column.
///
/// The header has its own alignment, so a right-aligned numeric column can
/// still carry a left-aligned caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Minimum width in display columns.
    pub width: usize,
    /// Alignment of data cells.
    pub align: Align,
    /// Header caption.
    pub header: Option<String>,
    /// Alignment of the header caption.
    pub header_align: Align,
}

impl Column {
    /// Create a left-aligned column of the given width.
    pub fn new(width: usize) -> Self {
        Column {
            width,
            align: Align::Left,
            header: None,
            header_align: Align::Left,
        }
    }

    /// Set the data alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for right alignment of data cells.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set the header caption.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the header alignment.
    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }
}

/// Shorthand constructors for columns.
///
/// ```rust
/// use carlog_render::tabular::{Align, Col};
///
/// let year = Col::fixed(10).right().header("Car year");
/// assert_eq!(year.align, Align::Right);
/// assert_eq!(year.header_align, Align::Left);
/// ```
pub struct Col;

impl Col {
    /// Create a fixed-width column.
    pub fn fixed(width: usize) -> Column {
        Column::new(width)
    }
}

/// Decorative elements for a table row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decorations {
    /// Separator between columns (e.g. `" | "`).
    pub column_sep: String,
    /// Prefix at the start of each row.
    pub row_prefix: String,
    /// Suffix at the end of each row.
    pub row_suffix: String,
}

impl Decorations {
    /// Create decorations with just a column separator.
    pub fn with_separator(sep: impl Into<String>) -> Self {
        Decorations {
            column_sep: sep.into(),
            row_prefix: String::new(),
            row_suffix: String::new(),
        }
    }

    /// Set the row prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.row_prefix = prefix.into();
        self
    }

    /// Set the row suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.row_suffix = suffix.into();
        self
    }
}

/// Columns plus decorations: everything needed to lay out a row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSpec {
    /// Column definitions, left to right.
    pub columns: Vec<Column>,
    /// Separators and row framing.
    pub decorations: Decorations,
}

impl TableSpec {
    /// Create a spec from columns with a two-space separator.
    pub fn new(columns: Vec<Column>) -> Self {
        TableSpec {
            columns,
            decorations: Decorations::with_separator("  "),
        }
    }

    /// Start building a spec.
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }
}

/// Builder for [`TableSpec`].
#[derive(Clone, Debug, Default)]
pub struct TableSpecBuilder {
    columns: Vec<Column>,
    decorations: Decorations,
}

impl TableSpecBuilder {
    /// Add a column to the table.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace all decorations at once.
    pub fn decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    /// Build the spec.
    pub fn build(self) -> TableSpec {
        TableSpec {
            columns: self.columns,
            decorations: self.decorations,
        }
    }
}
