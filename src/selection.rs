use crate::config::CellConfig;
use serde::{Deserialize, Serialize};

/// A single grid coordinate. Rows and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: u32,
    pub col: u32,
}

impl GridPoint {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// User-drawn rectangular region of the grid, inclusive on all sides.
///
/// Callers normalize the corners before handing the rectangle to this
/// module: `top_left.row <= bottom_right.row` and
/// `top_left.col <= bottom_right.col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub top_left: GridPoint,
    pub bottom_right: GridPoint,
}

impl SelectionRect {
    pub fn new(top_left: GridPoint, bottom_right: GridPoint) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Whether the cell's entire occupied region lies inside the selection.
    /// Partially overlapping cells do not count.
    pub fn contains_cell(&self, cell: &CellConfig) -> bool {
        cell.row >= self.top_left.row
            && cell.col >= self.top_left.col
            && cell.end_row() <= self.bottom_right.row
            && cell.end_col() <= self.bottom_right.col
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox {
            min_row: self.top_left.row,
            max_row: self.bottom_right.row,
            min_col: self.top_left.col,
            max_col: self.bottom_right.col,
        }
    }
}

/// Tightest rectangle covering a set of cells' occupied regions,
/// in 1-based inclusive coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl BoundingBox {
    pub fn rows(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    pub fn columns(&self) -> u32 {
        self.max_col - self.min_col + 1
    }
}

/// Compute the minimal bounding box of a set of cells.
///
/// Returns `None` for an empty set rather than a degenerate box, so callers
/// can tell "no cells" apart from a real 1x1 region. The result does not
/// depend on iteration order.
pub fn minimal_bounding_box(cells: &[CellConfig]) -> Option<BoundingBox> {
    let first = cells.first()?;
    let mut bounds = BoundingBox {
        min_row: first.row,
        max_row: first.end_row(),
        min_col: first.col,
        max_col: first.end_col(),
    };
    for cell in &cells[1..] {
        bounds.min_row = bounds.min_row.min(cell.row);
        bounds.max_row = bounds.max_row.max(cell.end_row());
        bounds.min_col = bounds.min_col.min(cell.col);
        bounds.max_col = bounds.max_col.max(cell.end_col());
    }
    Some(bounds)
}

/// Options for [`apply_selection_filter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Shrink the export bounds to the minimal bounding box of the
    /// qualifying cells instead of keeping the raw selection rectangle.
    #[serde(default)]
    pub use_minimal_bounds: bool,
}

/// Outcome of cropping a dashboard to a selection.
///
/// `cells` keep their original coordinates; subtracting `row_offset` /
/// `col_offset` re-origins them at (1,1) on the exported grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionFilterResult {
    pub cells: Vec<CellConfig>,
    pub rows: u32,
    pub columns: u32,
    pub row_offset: u32,
    pub col_offset: u32,
}

/// Determine which cells qualify for export and the exported grid geometry.
///
/// A cell qualifies only when its whole occupied region fits inside the
/// selection; an export never truncates a widget. With
/// `use_minimal_bounds` set, empty margins inside the selection are shrunk
/// away; when nothing qualifies, the raw selection bounds are kept.
pub fn apply_selection_filter(
    cells: &[CellConfig],
    selection: &SelectionRect,
    options: FilterOptions,
) -> SelectionFilterResult {
    debug_assert!(selection.top_left.row <= selection.bottom_right.row);
    debug_assert!(selection.top_left.col <= selection.bottom_right.col);

    let kept: Vec<CellConfig> = cells
        .iter()
        .filter(|cell| selection.contains_cell(cell))
        .cloned()
        .collect();

    let bounds = if options.use_minimal_bounds {
        minimal_bounding_box(&kept).unwrap_or_else(|| selection.bounds())
    } else {
        selection.bounds()
    };

    SelectionFilterResult {
        rows: bounds.rows(),
        columns: bounds.columns(),
        row_offset: bounds.min_row - 1,
        col_offset: bounds.min_col - 1,
        cells: kept,
    }
}
