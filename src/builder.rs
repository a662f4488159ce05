/*!
Schema builder capability and the JSON adapter.

The emitter writes attributes through the [`SchemaBuilder`] trait rather than
into a concrete document type, so hosts targeting a different schema format
implement the trait once and reuse the emission protocol unchanged.
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Semantic role a declaration plays in the surrounding document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderRole {
    /// Operation parameter
    #[serde(rename = "parameter")]
    Parameter,
    /// Schema property
    #[serde(rename = "property")]
    Property,
}

impl RenderRole {
    /// Singular role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parameter => "parameter",
            Self::Property => "property",
        }
    }

    /// Plural key under which declarations of this role are grouped
    pub fn group_key(&self) -> &'static str {
        match self {
            Self::Parameter => "parameters",
            Self::Property => "properties",
        }
    }
}

/// Builder context a schema fragment is written into.
///
/// Key order is part of the contract: implementations must preserve insertion
/// order and let a repeated `set_key` overwrite the earlier value.
pub trait SchemaBuilder {
    /// Write a key into the current scope, overwriting any previous value
    fn set_key(&mut self, key: &str, value: Value);

    /// Open a nested `schema` block inside the current scope
    fn nest_schema(&mut self, build: &mut dyn FnMut(&mut dyn SchemaBuilder));

    /// Open a named declaration for `role` and build its body
    fn open_declaration(
        &mut self,
        role: RenderRole,
        name: &str,
        build: &mut dyn FnMut(&mut dyn SchemaBuilder),
    );
}

/// [`SchemaBuilder`] adapter accumulating order-preserving JSON fragments.
///
/// Declarations are grouped under the role's plural key (`parameters`,
/// `properties`), keyed by declaration name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonSchemaBuilder {
    entries: Map<String, Value>,
}

impl JsonSchemaBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished fragment for a named declaration, if one was emitted
    pub fn declaration(&self, role: RenderRole, name: &str) -> Option<&Value> {
        self.entries.get(role.group_key())?.get(name)
    }

    /// Entire accumulated document fragment
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}

impl SchemaBuilder for JsonSchemaBuilder {
    fn set_key(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn nest_schema(&mut self, build: &mut dyn FnMut(&mut dyn SchemaBuilder)) {
        let mut inner = JsonSchemaBuilder::new();
        build(&mut inner);
        self.entries
            .insert("schema".to_string(), Value::Object(inner.entries));
    }

    fn open_declaration(
        &mut self,
        role: RenderRole,
        name: &str,
        build: &mut dyn FnMut(&mut dyn SchemaBuilder),
    ) {
        let mut inner = JsonSchemaBuilder::new();
        build(&mut inner);

        let group = self
            .entries
            .entry(role.group_key().to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(group) = group {
            group.insert(name.to_string(), Value::Object(inner.entries));
        }
    }
}
