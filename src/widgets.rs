use serde_json::{json, Value};
use std::collections::HashMap;

/// Static description of a widget kind the dashboard can host.
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    default_settings: Value,
}

impl WidgetDescriptor {
    pub fn new(default_settings: Value) -> Self {
        Self { default_settings }
    }
}

/// Registry of the widget kinds a dashboard document may reference.
///
/// The registry only carries metadata (kind name and default settings);
/// rendering lives entirely outside this crate.
#[derive(Default)]
pub struct WidgetRegistry {
    map: HashMap<String, WidgetDescriptor>,
}

impl WidgetRegistry {
    /// Registry seeded with the built-in widget library.
    pub fn with_defaults() -> Self {
        let mut reg = Self::default();
        reg.register(
            "clock",
            WidgetDescriptor::new(json!({
                "show_seconds": true,
                "twenty_four_hour": true,
            })),
        );
        reg.register(
            "analog_clock",
            WidgetDescriptor::new(json!({
                "show_numbers": true,
            })),
        );
        reg.register(
            "gauge",
            WidgetDescriptor::new(json!({
                "min": 0.0,
                "max": 100.0,
                "unit": "",
            })),
        );
        reg.register(
            "label",
            WidgetDescriptor::new(json!({
                "text": "",
                "align": "center",
            })),
        );
        reg.register(
            "arrow",
            WidgetDescriptor::new(json!({
                "direction": "up",
            })),
        );
        reg
    }

    pub fn register(&mut self, name: &str, descriptor: WidgetDescriptor) {
        self.map.insert(name.to_string(), descriptor);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn default_settings(&self, name: &str) -> Option<Value> {
        self.map.get(name).map(|d| d.default_settings.clone())
    }

    /// Registered kind names, sorted for stable presentation.
    pub fn kinds(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Shallow-merge `updates` over `base`. Non-object updates win outright.
pub(crate) fn merge_json(base: &Value, updates: &Value) -> Value {
    match (base, updates) {
        (Value::Object(a), Value::Object(b)) => {
            let mut merged = a.clone();
            for (k, v) in b {
                merged.insert(k.clone(), v.clone());
            }
            Value::Object(merged)
        }
        _ => updates.clone(),
    }
}
