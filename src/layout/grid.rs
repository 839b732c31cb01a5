//! Grid matrix and its area-string codec.
//!
//! An area string is a sequence of quoted rows, each row a space-separated
//! list of cell labels: `'time .' 'main .' 'quicklinks .'`. Rows are quoted
//! with `'`; older producers used `"`, so parsing tries `'` first and falls
//! back to `"` when the first attempt yields labels outside the vocabulary.

use std::fmt;

use crate::widgets::WidgetId;

/// Label of an empty cell.
pub const EMPTY_MARKER: &str = ".";

/// Quote used when serializing rows.
pub const CANONICAL_QUOTE: char = '\'';

/// Quote accepted as a fallback when parsing rows.
pub const ALTERNATE_QUOTE: char = '"';

/// A single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// The `.` marker.
    Empty,
    /// A cell occupied by a widget.
    Widget(WidgetId),
    /// A token outside the vocabulary, kept verbatim. Only appears in grids
    /// produced by a parse that failed validation.
    Unknown(String),
}

impl Cell {
    /// Classifies a raw token.
    pub fn from_token(token: &str) -> Self {
        if token == EMPTY_MARKER {
            return Cell::Empty;
        }
        match token.parse::<WidgetId>() {
            Ok(id) => Cell::Widget(id),
            Err(_) => Cell::Unknown(token.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True when the cell holds `id`.
    pub fn is(&self, id: WidgetId) -> bool {
        matches!(self, Cell::Widget(w) if *w == id)
    }

    /// The widget in this cell, if any.
    pub fn widget(&self) -> Option<WidgetId> {
        match self {
            Cell::Widget(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str(EMPTY_MARKER),
            Cell::Widget(id) => write!(f, "{id}"),
            Cell::Unknown(token) => f.write_str(token),
        }
    }
}

impl From<WidgetId> for Cell {
    fn from(id: WidgetId) -> Self {
        Cell::Widget(id)
    }
}

/// Owned matrix of cells, indexed as `(column, row)`.
///
/// Rows and columns are read out as copies and written back explicitly;
/// no view aliases the backing storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

/// Result of [`Grid::parse_area`], tagged with how the grid was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The canonical quote produced a valid grid.
    Parsed(Grid),
    /// The canonical quote failed validation; the alternate quote succeeded.
    Fallback(Grid),
    /// Both attempts failed validation. Holds the second attempt's grid.
    Invalid(Grid),
}

impl ParseOutcome {
    /// The grid, whatever the outcome.
    pub fn grid(&self) -> &Grid {
        match self {
            ParseOutcome::Parsed(g) | ParseOutcome::Fallback(g) | ParseOutcome::Invalid(g) => g,
        }
    }

    pub fn into_grid(self) -> Grid {
        match self {
            ParseOutcome::Parsed(g) | ParseOutcome::Fallback(g) | ParseOutcome::Invalid(g) => g,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, ParseOutcome::Invalid(_))
    }
}

impl Grid {
    /// Builds a grid from rows of cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Builds a grid from rows of raw labels.
    ///
    /// ```
    /// use move_grid::layout::Grid;
    ///
    /// let grid = Grid::from_labels(&[&["time", "."], &["main", "."]]);
    /// assert_eq!(grid.to_area(), "'time .' 'main .'");
    /// ```
    pub fn from_labels(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|label| Cell::from_token(label)).collect())
                .collect(),
        }
    }

    /// Parses an area string, trying the canonical quote then the alternate.
    ///
    /// The quote style is picked on labels alone. A grid whose rows differ in
    /// length is then reported as [`ParseOutcome::Invalid`].
    pub fn parse_area(area: &str) -> ParseOutcome {
        let first = Self::split_with(area, CANONICAL_QUOTE);
        if first.has_known_labels() {
            return Self::check_shape(area, first, ParseOutcome::Parsed);
        }

        let second = Self::split_with(area, ALTERNATE_QUOTE);
        if second.has_known_labels() {
            tracing::debug!("area parsed with alternate quote: {area:?}");
            Self::check_shape(area, second, ParseOutcome::Fallback)
        } else {
            tracing::warn!("area has unrecognized cells under both quote styles: {area:?}");
            ParseOutcome::Invalid(second)
        }
    }

    fn check_shape(area: &str, grid: Grid, ok: fn(Grid) -> ParseOutcome) -> ParseOutcome {
        if grid.is_rectangular() {
            ok(grid)
        } else {
            tracing::warn!("area rows differ in length: {area:?}");
            ParseOutcome::Invalid(grid)
        }
    }

    /// Tolerant parse: the grid of any [`ParseOutcome`].
    pub fn parse(area: &str) -> Self {
        Self::parse_area(area).into_grid()
    }

    fn split_with(area: &str, quote: char) -> Self {
        let rows = split_rows(area, quote)
            .map(|row| row.split_whitespace().map(Cell::from_token).collect())
            .collect();
        Self { rows }
    }

    /// Serializes to the canonical area string.
    pub fn to_area(&self) -> String {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(Cell::to_string).collect();
                format!("{CANONICAL_QUOTE}{}{CANONICAL_QUOTE}", cells.join(" "))
            })
            .collect();
        rows.join(" ").trim_end().to_string()
    }

    /// True when every cell is `.` or a known widget and all rows have the
    /// same length.
    pub fn is_valid(&self) -> bool {
        self.has_known_labels() && self.is_rectangular()
    }

    /// True when all rows have the same length. An empty grid is rectangular.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    fn has_known_labels(&self) -> bool {
        self.cells().all(|cell| !matches!(cell, Cell::Unknown(_)))
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row; zero for an empty grid.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Overwrites one cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, column: usize, row: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *slot = cell;
        }
    }

    /// Copy of row `row`, empty when out of range.
    pub fn row(&self, row: usize) -> Vec<Cell> {
        self.rows.get(row).cloned().unwrap_or_default()
    }

    /// Copy of column `column`; rows too short to reach it are skipped, so
    /// indices only line up with row numbers on a rectangular grid.
    pub fn column(&self, column: usize) -> Vec<Cell> {
        self.rows.iter().filter_map(|r| r.get(column).cloned()).collect()
    }

    /// Writes `cells` into row `row`, position by position.
    pub fn set_row(&mut self, row: usize, cells: &[Cell]) {
        for (column, cell) in cells.iter().enumerate() {
            self.set(column, row, cell.clone());
        }
    }

    /// Writes `cells` into column `column`, position by position.
    pub fn set_column(&mut self, column: usize, cells: &[Cell]) {
        for (row, cell) in cells.iter().enumerate() {
            self.set(column, row, cell.clone());
        }
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Every `(column, row)` occupied by `id`, in row-major order.
    ///
    /// More than one position means the widget spans.
    pub fn find(&self, id: WidgetId) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(_, cell)| cell.is(id))
                    .map(move |(x, _)| (x, y))
            })
            .collect()
    }

    /// First position of `id` in row-major order.
    pub fn position(&self, id: WidgetId) -> Option<(usize, usize)> {
        self.find(id).into_iter().next()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_area())
    }
}

/// Splits an area string into row bodies on `quote`, dropping
/// empty and whitespace-only segments.
pub(crate) fn split_rows(area: &str, quote: char) -> impl Iterator<Item = &str> {
    area.split(quote).filter(|segment| !segment.trim().is_empty())
}
