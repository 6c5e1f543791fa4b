use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Keys starting with this prefix carry template metadata (e.g. `_type`)
/// and never describe a parameter.
pub const METADATA_PREFIX: char = '_';

pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// Reads an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One parameter descriptor inside a node template.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NodeTemplateEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub field_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub advanced: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show: bool,
    /// value, placeholder, options, password... kept for the detail editor
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl NodeTemplateEntry {
    /// Rendered as an input slot on the node body.
    pub fn is_visible(&self) -> bool {
        self.show && !self.advanced
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TemplateItem {
    Param(NodeTemplateEntry),
    Metadata(Value),
}

/// Ordered parameter template of a node. Key order is the order of the
/// source document.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NodeTemplate {
    items: IndexMap<String, TemplateItem>,
}

impl NodeTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&TemplateItem> {
        self.items.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateItem)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parameter descriptors in template order, metadata keys skipped.
    pub fn params(&self) -> impl Iterator<Item = (&str, &NodeTemplateEntry)> {
        self.items.iter().filter_map(|(k, v)| match v {
            TemplateItem::Param(entry) => Some((k.as_str(), entry)),
            TemplateItem::Metadata(_) => None,
        })
    }

    pub fn param(&self, key: &str) -> Option<&NodeTemplateEntry> {
        match self.items.get(key) {
            Some(TemplateItem::Param(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Inserts a parameter, replacing any previous item under the same key
    /// while keeping its position.
    pub fn insert_param(&mut self, key: impl Into<String>, entry: NodeTemplateEntry) {
        self.items.insert(key.into(), TemplateItem::Param(entry));
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.items.insert(key.into(), TemplateItem::Metadata(value));
    }
}

impl<'de> Deserialize<'de> for NodeTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut items = IndexMap::with_capacity(raw.len());
        for (key, value) in raw {
            let item = if is_metadata_key(&key) {
                TemplateItem::Metadata(value)
            } else {
                let entry = serde_json::from_value::<NodeTemplateEntry>(value).map_err(|e| {
                    D::Error::custom(format!("invalid template field '{}': {}", key, e))
                })?;
                TemplateItem::Param(entry)
            };
            items.insert(key, item);
        }
        Ok(NodeTemplate { items })
    }
}

impl Serialize for NodeTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (key, item) in &self.items {
            match item {
                TemplateItem::Param(entry) => map.serialize_entry(key, entry)?,
                TemplateItem::Metadata(value) => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}
