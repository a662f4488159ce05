/*!
Block emission: rendering an attribute into a schema builder.

An attribute emits as either a primitive declaration (inline `type`/`format`)
or a reference declaration (nested `schema` block with a `$ref`), followed by
its metadata keys and then any caller-supplied overrides.
*/

use serde_json::Value;
use tracing::debug;

use crate::{
    attribute::{Attribute, AttributeMode},
    builder::{RenderRole, SchemaBuilder},
};

/// Deferred mutation applied to a declaration after its base keys are
/// written.
///
/// Overrides replay in insertion order against the declaration scope; a later
/// override setting the same key wins. No conflict detection is performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    /// Set (or overwrite) a single key in the declaration scope
    SetKey { key: String, value: Value },
}

impl Override {
    /// Convenience constructor for [`Override::SetKey`]
    pub fn set_key(key: impl Into<String>, value: Value) -> Self {
        Self::SetKey {
            key: key.into(),
            value,
        }
    }

    fn apply(&self, scope: &mut dyn SchemaBuilder) {
        match self {
            Self::SetKey { key, value } => scope.set_key(key, value.clone()),
        }
    }
}

impl Attribute {
    /// Write this attribute into `builder` as a declaration of `role`.
    ///
    /// Emission order is fixed: `type`/`format` (or the `$ref` schema block)
    /// first, then `name`, `in`, `description`, `required`, then overrides in
    /// insertion order. `format` is written even when absent (as `null`);
    /// callers relying on compact output filter empties downstream. The
    /// metadata keys are written in both modes, so a reference declaration
    /// still carries `required` and `in`.
    pub fn emit(&self, builder: &mut dyn SchemaBuilder, role: RenderRole) {
        debug!(name = %self.name, role = role.as_str(), "emitting attribute");

        builder.open_declaration(role, &self.name, &mut |scope| {
            match self.mode() {
                AttributeMode::Primitive => {
                    scope.set_key("type", string_or_null(self.ty.as_deref()));
                    scope.set_key("format", string_or_null(self.format.as_deref()));
                }
                AttributeMode::Reference => {
                    let reference = self.reference.clone().unwrap_or_default();
                    scope.nest_schema(&mut |schema| {
                        schema.set_key("$ref", Value::String(reference.clone()));
                    });
                }
            }

            scope.set_key("name", Value::String(self.name.clone()));
            scope.set_key("in", Value::String(self.location.as_str().to_string()));
            scope.set_key("description", Value::String(self.description.clone()));
            scope.set_key("required", Value::Bool(self.required));

            for op in self.overrides() {
                op.apply(scope);
            }
        });
    }

    /// Emit as an operation parameter, the common case
    pub fn emit_parameter(&self, builder: &mut dyn SchemaBuilder) {
        self.emit(builder, RenderRole::Parameter);
    }
}

fn string_or_null(value: Option<&str>) -> Value {
    match value {
        Some(v) => Value::String(v.to_string()),
        None => Value::Null,
    }
}
