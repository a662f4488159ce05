use serde::{Deserialize, Serialize};

use crate::{coercion, emitter::Override, error::AttributeResult};

/// Location of a parameter within a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParameterLocation {
    #[default]
    #[serde(rename = "body")]
    Body,
    #[serde(rename = "query")]
    Query,
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "path")]
    Path,
    #[serde(rename = "formData")]
    FormData,
}

impl ParameterLocation {
    /// Swagger spelling of the location
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Query => "query",
            Self::Header => "header",
            Self::Path => "path",
            Self::FormData => "formData",
        }
    }
}

/// Raw options supplied alongside an attribute declaration.
///
/// Every field is optional; construction fills in the defaults (`body`
/// location, empty description, not required). Deserializes from the option
/// structures a declaring DSL hands over, ignoring unrecognized keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeOptions {
    /// Human-readable description
    pub description: Option<String>,

    /// Whether the parameter must be present
    pub required: Option<bool>,

    /// Parameter location
    #[serde(rename = "in")]
    pub location: Option<ParameterLocation>,

    /// Explicit format, kept only for types the coercion table does not map
    pub format: Option<String>,

    /// Pointer to another schema definition (e.g. `#/definitions/User`)
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

impl AttributeOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the required flag
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set the parameter location
    pub fn with_location(mut self, location: ParameterLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set an explicit format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Point the attribute at another schema definition
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// How an attribute renders into the schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Inline `type`/`format` keys
    Primitive,
    /// Nested `schema` block holding a `$ref`
    Reference,
}

/// A single API attribute: a request/response field, header, or path
/// parameter, normalized into the Swagger 2.0 vocabulary.
///
/// The type/format pair is derived once, at construction, and is immutable
/// afterward; the only post-construction mutation is appending override
/// operations, which act on the rendered output rather than on the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name, case-sensitive, untransformed
    pub name: String,

    /// Parameter location
    pub location: ParameterLocation,

    /// Human-readable description
    pub description: String,

    /// Whether the parameter must be present
    pub required: bool,

    /// Coerced Swagger type; unset when the attribute is a reference
    pub ty: Option<String>,

    /// Coerced Swagger format refining `ty`
    pub format: Option<String>,

    /// Pointer to another schema definition
    pub reference: Option<String>,

    /// Deferred overrides, replayed in insertion order after emission
    overrides: Vec<Override>,
}

impl Attribute {
    /// Create an attribute from its raw declaration.
    ///
    /// Coercion runs first, before any other field is finalized, and is the
    /// only fallible step: `time` has no Swagger 2.0 representation. Missing
    /// options default rather than fail.
    pub fn new(
        name: impl Into<String>,
        app_type: &str,
        options: AttributeOptions,
    ) -> AttributeResult<Self> {
        let (ty, format) = coercion::coerce(app_type, options.format)?;
        let (ty, format) = match options.reference {
            Some(_) => (None, None),
            None => (Some(ty), format),
        };

        Ok(Self {
            name: name.into(),
            location: options.location.unwrap_or_default(),
            description: options.description.unwrap_or_default(),
            required: options.required.unwrap_or(false),
            ty,
            format,
            reference: options.reference,
            overrides: Vec::new(),
        })
    }

    /// Rendering mode, decided by the presence of a reference target
    pub fn mode(&self) -> AttributeMode {
        match self.reference {
            Some(_) => AttributeMode::Reference,
            None => AttributeMode::Primitive,
        }
    }

    /// Append an override, applied after the base keys during emission
    pub fn push_override(&mut self, op: Override) {
        self.overrides.push(op);
    }

    /// Overrides in insertion order
    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttributeError;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let attr = Attribute::new("age", "big_integer", AttributeOptions::new()).unwrap();
        assert_eq!(attr.name, "age");
        assert_eq!(attr.location, ParameterLocation::Body);
        assert_eq!(attr.description, "");
        assert!(!attr.required);
        assert_eq!(attr.ty.as_deref(), Some("integer"));
        assert_eq!(attr.format.as_deref(), Some("int64"));
        assert_eq!(attr.mode(), AttributeMode::Primitive);
    }

    #[test]
    fn test_options_are_applied() {
        let options = AttributeOptions::new()
            .with_description("account age in years")
            .with_required(true)
            .with_location(ParameterLocation::Query);
        let attr = Attribute::new("age", "integer", options).unwrap();

        assert_eq!(attr.description, "account age in years");
        assert!(attr.required);
        assert_eq!(attr.location, ParameterLocation::Query);
        assert_eq!(attr.ty.as_deref(), Some("integer"));
        assert_eq!(attr.format.as_deref(), Some("int32"));
    }

    #[test]
    fn test_unlisted_type_keeps_supplied_format() {
        let attr = Attribute::new(
            "avatar",
            "string",
            AttributeOptions::new().with_format("byte"),
        )
        .unwrap();
        assert_eq!(attr.ty.as_deref(), Some("string"));
        assert_eq!(attr.format.as_deref(), Some("byte"));

        let attr = Attribute::new("active", "boolean", AttributeOptions::new()).unwrap();
        assert_eq!(attr.ty.as_deref(), Some("boolean"));
        assert_eq!(attr.format, None);
    }

    #[test]
    fn test_reference_mode() {
        let attr = Attribute::new(
            "id",
            "anything",
            AttributeOptions::new().with_reference("#/definitions/User"),
        )
        .unwrap();
        assert_eq!(attr.mode(), AttributeMode::Reference);
        assert_eq!(attr.reference.as_deref(), Some("#/definitions/User"));
        assert_eq!(attr.ty, None);
        assert_eq!(attr.format, None);
    }

    #[test]
    fn test_time_fails_regardless_of_options() {
        let err = Attribute::new("at", "time", AttributeOptions::new()).unwrap_err();
        assert!(matches!(err, AttributeError::UnsupportedType { .. }));

        let options = AttributeOptions::new()
            .with_required(true)
            .with_reference("#/definitions/Time")
            .with_format("partial-time");
        let err = Attribute::new("at", "time", options).unwrap_err();
        assert!(matches!(err, AttributeError::UnsupportedType { .. }));
    }

    #[test]
    fn test_overrides_accumulate_in_order() {
        let mut attr = Attribute::new("age", "integer", AttributeOptions::new()).unwrap();
        attr.push_override(Override::set_key("minimum", json!(0)));
        attr.push_override(Override::set_key("maximum", json!(120)));

        assert_eq!(
            attr.overrides(),
            &[
                Override::set_key("minimum", json!(0)),
                Override::set_key("maximum", json!(120)),
            ]
        );
    }

    #[test]
    fn test_options_deserialize_ignoring_unknown_keys() {
        let options: AttributeOptions = serde_json::from_value(json!({
            "required": true,
            "in": "formData",
            "ref": "#/definitions/User",
            "unknown_key": 42,
        }))
        .unwrap();

        assert_eq!(options.required, Some(true));
        assert_eq!(options.location, Some(ParameterLocation::FormData));
        assert_eq!(options.reference.as_deref(), Some("#/definitions/User"));
        assert_eq!(options.description, None);
    }
}
