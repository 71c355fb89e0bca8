pub mod config;
pub mod export;
pub mod layout;
pub mod logging;
pub mod selection;
pub mod widgets;

pub use config::{CellConfig, DashboardConfig, GridConfig};
pub use export::{export_selection, export_to_path};
pub use layout::normalize_cells;
pub use selection::{
    apply_selection_filter, minimal_bounding_box, BoundingBox, FilterOptions, GridPoint,
    SelectionFilterResult, SelectionRect,
};
pub use widgets::{WidgetDescriptor, WidgetRegistry};
