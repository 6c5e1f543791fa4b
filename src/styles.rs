//! Icon and color lookup for node and parameter types.
//!
//! Three tables are involved: `icons` keyed by node type or category,
//! `colors` keyed by category, and `types` mapping a node type (or a base
//! class it exposes) to its category. The defaults mirror the categories the
//! component catalog serves.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_COLOR_KEY: &str = "unknown";
const UNKNOWN_COLOR: &str = "#9CA3AF";

static DEFAULT_COLORS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    [
        ("prompts", "#4367BF"),
        ("llms", "#6344BE"),
        ("chains", "#FE7500"),
        ("agents", "#903BBE"),
        ("tools", "#FF3434"),
        ("memories", "#FF9135"),
        ("advanced", "#000000"),
        ("chat", "#454173"),
        ("thought", "#272541"),
        ("embeddings", "#42BAA7"),
        ("documentloaders", "#7AAE42"),
        ("vectorstores", "#AA8742"),
        ("textsplitters", "#B47CB5"),
        ("toolkits", "#DB2C2C"),
        ("wrappers", "#E6277A"),
        ("utilities", "#31A3CC"),
        ("output_parsers", "#E6A627"),
        ("retrievers", "#E6B25A"),
        ("str", "#049524"),
        (UNKNOWN_COLOR_KEY, UNKNOWN_COLOR),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
});

static DEFAULT_ICONS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    [
        ("prompts", "command-line"),
        ("llms", "light-bulb"),
        ("chains", "link"),
        ("agents", "rocket-launch"),
        ("tools", "wrench"),
        ("memories", "cpu-chip"),
        ("advanced", "computer-desktop"),
        ("chat", "bars-3-center-left"),
        ("thought", "chat-bubble-oval-left-ellipsis"),
        ("embeddings", "finger-print"),
        ("documentloaders", "paper-clip"),
        ("vectorstores", "circle-stack"),
        ("textsplitters", "scissors"),
        ("toolkits", "wrench-screwdriver"),
        ("wrappers", "gift"),
        ("utilities", "squares-2x2"),
        ("output_parsers", "adjustments-horizontal"),
        ("retrievers", "magnifying-glass"),
        ("str", "document-text"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
});

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeStyleTables {
    pub icons: HashMap<String, String>,
    pub colors: HashMap<String, String>,
    /// node type or base class -> category
    pub types: HashMap<String, String>,
}

impl Default for NodeStyleTables {
    fn default() -> Self {
        Self {
            icons: DEFAULT_ICONS.clone(),
            colors: DEFAULT_COLORS.clone(),
            types: HashMap::new(),
        }
    }
}

impl NodeStyleTables {
    pub fn new(
        icons: HashMap<String, String>,
        colors: HashMap<String, String>,
        types: HashMap<String, String>,
    ) -> Self {
        Self {
            icons,
            colors,
            types,
        }
    }

    /// Fills the alias table from the component catalog
    /// (`{category: {node_type: {base_classes: [...], ...}}}`). Each node type
    /// and each base class it exposes maps to the category.
    pub fn with_types_from_catalog(mut self, catalog: &Value) -> Self {
        let Some(categories) = catalog.as_object() else {
            log::warn!("Component catalog is not an object; type table left unchanged");
            return self;
        };
        for (category, components) in categories {
            let Some(components) = components.as_object() else {
                continue;
            };
            for (node_type, descriptor) in components {
                self.types.insert(node_type.clone(), category.clone());
                let base_classes = descriptor
                    .get("base_classes")
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_str);
                for base_class in base_classes {
                    self.types
                        .entry(base_class.to_string())
                        .or_insert_with(|| category.clone());
                }
            }
        }
        self
    }

    pub fn category_of(&self, type_name: &str) -> Option<&str> {
        self.types.get(type_name).map(String::as_str)
    }

    /// Direct entry first, then through the category alias.
    pub fn icon_for(&self, node_type: &str) -> Option<&str> {
        self.icons
            .get(node_type)
            .or_else(|| self.category_of(node_type).and_then(|c| self.icons.get(c)))
            .map(String::as_str)
    }

    /// Category color, or the `unknown` color.
    pub fn color_for(&self, type_name: &str) -> &str {
        self.category_of(type_name)
            .and_then(|c| self.colors.get(c))
            .map(String::as_str)
            .unwrap_or_else(|| self.unknown_color())
    }

    /// Injected tables may omit `unknown`; the built-in gray covers that.
    pub fn unknown_color(&self) -> &str {
        self.colors
            .get(UNKNOWN_COLOR_KEY)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_COLOR)
    }
}
