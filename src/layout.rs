use crate::config::{CellConfig, DashboardConfig};
use crate::widgets::WidgetRegistry;

/// Validate and normalize cell placements to the configured grid size.
///
/// Cells with unknown widget kinds or an origin outside the grid are
/// dropped; spans are clamped to the grid edge; a cell overlapping an
/// already-placed one is dropped. Returns the surviving cells along with
/// human-readable warnings for everything that was rejected.
pub fn normalize_cells(
    cfg: &DashboardConfig,
    registry: &WidgetRegistry,
) -> (Vec<CellConfig>, Vec<String>) {
    let rows = cfg.grid.rows.max(1) as usize;
    let cols = cfg.grid.cols.max(1) as usize;
    let mut occupied = vec![vec![false; cols]; rows];
    let mut normalized = Vec::new();
    let mut warnings = Vec::new();

    for cell in &cfg.cells {
        if !registry.contains(&cell.widget) {
            warnings.push(format!("dropping unknown widget '{}'", cell.widget));
            continue;
        }
        if let Some(nc) = normalize_cell(cell, rows, cols, &mut occupied) {
            normalized.push(nc);
        } else {
            warnings.push(format!(
                "cell for widget '{}' does not fit the grid and was ignored",
                cell.widget
            ));
        }
    }

    (normalized, warnings)
}

fn normalize_cell(
    cell: &CellConfig,
    rows: usize,
    cols: usize,
    occupied: &mut [Vec<bool>],
) -> Option<CellConfig> {
    if cell.row < 1 || cell.col < 1 {
        return None;
    }
    let row = cell.row as usize - 1;
    let col = cell.col as usize - 1;
    if row >= rows || col >= cols {
        return None;
    }
    let row_span = (cell.row_span.max(1) as usize).min(rows - row);
    let col_span = (cell.col_span.max(1) as usize).min(cols - col);

    for r in row..row + row_span {
        for c in col..col + col_span {
            if occupied[r][c] {
                return None;
            }
        }
    }
    for r in row..row + row_span {
        for c in col..col + col_span {
            occupied[r][c] = true;
        }
    }

    Some(CellConfig {
        row_span: row_span as u32,
        col_span: col_span as u32,
        ..cell.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn config_with(cells: Vec<CellConfig>) -> DashboardConfig {
        DashboardConfig {
            version: 1,
            grid: GridConfig { rows: 2, cols: 2 },
            cells,
        }
    }

    #[test]
    fn clamps_out_of_bounds() {
        let mut cell = CellConfig::with_widget("clock", 1, 1);
        cell.row_span = 5;
        cell.col_span = 5;
        let cfg = config_with(vec![cell]);
        let (cells, _) = normalize_cells(&cfg, &WidgetRegistry::with_defaults());
        assert_eq!(cells[0].row_span, 2);
        assert_eq!(cells[0].col_span, 2);
    }

    #[test]
    fn prevents_overlap() {
        let cfg = config_with(vec![
            CellConfig::with_widget("clock", 1, 1),
            CellConfig::with_widget("gauge", 1, 1),
        ]);
        let (cells, warnings) = normalize_cells(&cfg, &WidgetRegistry::with_defaults());
        assert_eq!(cells.len(), 1);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn ignores_zero_origin() {
        let cfg = config_with(vec![CellConfig::with_widget("clock", 0, 1)]);
        let (cells, warnings) = normalize_cells(&cfg, &WidgetRegistry::with_defaults());
        assert!(cells.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn drops_unknown_widget_kinds() {
        let cfg = config_with(vec![CellConfig::with_widget("does_not_exist", 1, 1)]);
        let (cells, warnings) = normalize_cells(&cfg, &WidgetRegistry::with_defaults());
        assert!(cells.is_empty());
        assert_eq!(warnings.len(), 1);
    }
}
