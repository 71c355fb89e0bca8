use crate::widgets::{merge_json, WidgetRegistry};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};

fn default_version() -> u32 {
    1
}

fn default_rows() -> u32 {
    8
}

fn default_cols() -> u32 {
    8
}

fn default_origin() -> u32 {
    1
}

fn default_span() -> u32 {
    1
}

/// Grid definition for the dashboard layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default = "default_cols")]
    pub cols: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

/// A placed widget on the dashboard grid.
///
/// Rows and columns are 1-based; a cell occupies the inclusive region
/// `[row, row+row_span-1] x [col, col+col_span-1]`. `settings` is an opaque
/// per-widget payload that the grid logic never inspects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CellConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub widget: String,
    #[serde(default = "default_origin")]
    pub row: u32,
    #[serde(default = "default_origin")]
    pub col: u32,
    #[serde(default = "default_span")]
    pub row_span: u32,
    #[serde(default = "default_span")]
    pub col_span: u32,
    #[serde(default)]
    pub settings: serde_json::Value,
}

impl CellConfig {
    pub fn with_widget(widget: &str, row: u32, col: u32) -> Self {
        Self {
            id: None,
            widget: widget.to_string(),
            row,
            col,
            row_span: default_span(),
            col_span: default_span(),
            settings: serde_json::Value::Object(Default::default()),
        }
    }

    /// Last row the cell occupies (inclusive).
    pub fn end_row(&self) -> u32 {
        self.row + self.row_span - 1
    }

    /// Last column the cell occupies (inclusive).
    pub fn end_col(&self) -> u32 {
        self.col + self.col_span - 1
    }
}

/// Primary dashboard document: grid size plus placed widget cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub cells: Vec<CellConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            grid: GridConfig::default(),
            cells: vec![
                CellConfig::with_widget("clock", 1, 1),
                CellConfig::with_widget("gauge", 1, 2),
                CellConfig::with_widget("label", 2, 1),
                CellConfig::with_widget("arrow", 2, 2),
            ],
        }
    }
}

impl DashboardConfig {
    /// Load a dashboard document from disk. A missing or empty file yields
    /// the default document; cells referencing unknown widget kinds are
    /// filtered out using the provided registry.
    pub fn load(path: impl AsRef<Path>, registry: &WidgetRegistry) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut cfg: DashboardConfig = serde_json::from_str(&content)?;
        let warnings = cfg.sanitize(registry);
        for w in warnings {
            tracing::warn!("{w}");
        }
        Ok(cfg)
    }

    /// Save the document to disk as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Drop cells with unsupported widget kinds and layer stored settings
    /// over the kind's defaults so missing keys pick up current defaults.
    pub fn sanitize(&mut self, registry: &WidgetRegistry) -> Vec<String> {
        let mut warnings = Vec::new();
        self.cells.retain(|cell| {
            if cell.widget.is_empty() {
                return false;
            }
            if !registry.contains(&cell.widget) {
                let msg = format!("unknown dashboard widget '{}' dropped", cell.widget);
                tracing::warn!(widget = %cell.widget, "unknown dashboard widget dropped");
                warnings.push(msg);
                return false;
            }
            true
        });
        for cell in &mut self.cells {
            let defaults = registry
                .default_settings(&cell.widget)
                .unwrap_or_else(|| json!({}));
            if cell.settings.is_null() {
                cell.settings = defaults;
            } else {
                cell.settings = merge_json(&defaults, &cell.settings);
            }
        }
        warnings
    }

    pub fn path_for(base: &str) -> PathBuf {
        let base = Path::new(base);
        if base.is_dir() {
            base.join("dashboard.json")
        } else {
            PathBuf::from(base)
        }
    }
}
