use crate::config::{CellConfig, DashboardConfig, GridConfig};
use crate::selection::{apply_selection_filter, FilterOptions, SelectionRect};
use std::path::Path;

/// Build the exported sub-dashboard document for a selection.
///
/// Runs the selection filter over the document's cells and re-origins every
/// qualifying cell at (1,1) using the returned offsets. Widget kind and
/// settings payloads are carried over unchanged; the exported grid is sized
/// to the filter's geometry.
pub fn export_selection(
    cfg: &DashboardConfig,
    selection: &SelectionRect,
    options: FilterOptions,
) -> DashboardConfig {
    let result = apply_selection_filter(&cfg.cells, selection, options);
    tracing::debug!(
        kept = result.cells.len(),
        total = cfg.cells.len(),
        rows = result.rows,
        columns = result.columns,
        "cropped dashboard to selection"
    );

    let cells: Vec<CellConfig> = result
        .cells
        .into_iter()
        .map(|mut cell| {
            cell.row -= result.row_offset;
            cell.col -= result.col_offset;
            cell
        })
        .collect();

    DashboardConfig {
        version: cfg.version,
        grid: GridConfig {
            rows: result.rows,
            cols: result.columns,
        },
        cells,
    }
}

/// Export a selection straight to a dashboard document on disk.
pub fn export_to_path(
    cfg: &DashboardConfig,
    selection: &SelectionRect,
    options: FilterOptions,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let doc = export_selection(cfg, selection, options);
    tracing::info!(
        cells = doc.cells.len(),
        path = %path.display(),
        "exporting dashboard selection"
    );
    doc.save(path)
}
