use dashgrid::config::{CellConfig, DashboardConfig, GridConfig};
use dashgrid::export::{export_selection, export_to_path};
use dashgrid::selection::{FilterOptions, GridPoint, SelectionRect};
use dashgrid::widgets::WidgetRegistry;
use serde_json::json;

fn rect(tl: (u32, u32), br: (u32, u32)) -> SelectionRect {
    SelectionRect::new(GridPoint::new(tl.0, tl.1), GridPoint::new(br.0, br.1))
}

fn sample_dashboard() -> DashboardConfig {
    let mut gauge = CellConfig::with_widget("gauge", 3, 4);
    gauge.row_span = 2;
    gauge.settings = json!({"max": 300.0, "unit": "rpm"});
    let mut clock = CellConfig::with_widget("clock", 6, 2);
    clock.id = Some("wall-clock".into());
    DashboardConfig {
        version: 1,
        grid: GridConfig { rows: 8, cols: 8 },
        cells: vec![
            CellConfig::with_widget("label", 1, 1),
            gauge,
            clock,
            CellConfig::with_widget("arrow", 8, 8),
        ],
    }
}

#[test]
fn export_re_origins_cells_at_one_one() {
    let cfg = sample_dashboard();
    let doc = export_selection(&cfg, &rect((3, 2), (6, 5)), FilterOptions::default());

    assert_eq!(doc.grid.rows, 4);
    assert_eq!(doc.grid.cols, 4);
    assert_eq!(doc.cells.len(), 2);
    // Gauge was at (3,4), selection starts at (3,2).
    assert_eq!((doc.cells[0].row, doc.cells[0].col), (1, 3));
    // Clock was at (6,2).
    assert_eq!((doc.cells[1].row, doc.cells[1].col), (4, 1));
}

#[test]
fn export_preserves_widget_payloads() {
    let cfg = sample_dashboard();
    let doc = export_selection(&cfg, &rect((3, 2), (6, 5)), FilterOptions::default());

    let gauge = &doc.cells[0];
    assert_eq!(gauge.widget, "gauge");
    assert_eq!(gauge.row_span, 2);
    assert_eq!(gauge.settings, json!({"max": 300.0, "unit": "rpm"}));
    assert_eq!(doc.cells[1].id.as_deref(), Some("wall-clock"));
}

#[test]
fn minimal_bounds_export_trims_the_grid() {
    let cfg = sample_dashboard();
    let doc = export_selection(
        &cfg,
        &rect((1, 1), (8, 8)),
        FilterOptions {
            use_minimal_bounds: true,
        },
    );

    // Content spans rows 1-8 and cols 1-8 already, so nothing shrinks.
    assert_eq!(doc.grid.rows, 8);
    assert_eq!(doc.grid.cols, 8);
    assert_eq!(doc.cells.len(), cfg.cells.len());

    let narrow = export_selection(
        &cfg,
        &rect((2, 1), (7, 7)),
        FilterOptions {
            use_minimal_bounds: true,
        },
    );
    // Only the gauge and the clock qualify: rows 3-6, cols 2-4.
    assert_eq!(narrow.grid.rows, 4);
    assert_eq!(narrow.grid.cols, 3);
    assert_eq!((narrow.cells[0].row, narrow.cells[0].col), (1, 3));
    assert_eq!((narrow.cells[1].row, narrow.cells[1].col), (4, 1));
}

#[test]
fn exported_document_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");
    let cfg = sample_dashboard();

    export_to_path(&cfg, &rect((3, 2), (6, 5)), FilterOptions::default(), &path).unwrap();

    let registry = WidgetRegistry::with_defaults();
    let loaded = DashboardConfig::load(&path, &registry).unwrap();
    assert_eq!(loaded.grid, GridConfig { rows: 4, cols: 4 });
    assert_eq!(loaded.cells.len(), 2);
    assert_eq!(loaded.cells[0].widget, "gauge");
    // Sanitize on load layers kind defaults under the stored payload.
    assert_eq!(loaded.cells[0].settings["unit"], json!("rpm"));
    assert_eq!(loaded.cells[0].settings["min"], json!(0.0));
}

#[test]
fn empty_selection_exports_an_empty_grid_of_selection_size() {
    let cfg = sample_dashboard();
    let doc = export_selection(&cfg, &rect((4, 6), (5, 7)), FilterOptions::default());
    assert!(doc.cells.is_empty());
    assert_eq!(doc.grid, GridConfig { rows: 2, cols: 2 });
}
