/*!
# swagger-attr

Swagger 2.0 attribute modeling and schema fragment emission.

This crate models a single API attribute (a request/response field, header,
or path parameter), coerces application-level type names into the restricted
Swagger 2.0 type/format vocabulary, and emits the attribute into a schema
builder as either a primitive field or a reference to another definition.

## Features

- Type coercion from application vocabulary (`big_integer`, `decimal`,
  `date_time`, ...) to valid Swagger 2.0 `{type, format}` pairs
- Primitive and `$ref` rendering modes decided by the declaration
- Ordered, last-write-wins override operations for host customization
- Pluggable output via the `SchemaBuilder` trait, with a JSON adapter

## Usage

```rust
use swagger_attr::{Attribute, AttributeOptions, JsonSchemaBuilder, RenderRole};

let attr = Attribute::new(
    "age",
    "big_integer",
    AttributeOptions::new().with_required(true),
).unwrap();

let mut builder = JsonSchemaBuilder::new();
attr.emit(&mut builder, RenderRole::Parameter);

let fragment = builder.declaration(RenderRole::Parameter, "age").unwrap();
assert_eq!(fragment["type"], "integer");
assert_eq!(fragment["format"], "int64");
```
*/

// Re-export main types
pub use crate::{
    attribute::{Attribute, AttributeMode, AttributeOptions, ParameterLocation},
    builder::{JsonSchemaBuilder, RenderRole, SchemaBuilder},
    emitter::Override,
    error::{AttributeError, AttributeResult},
};

// Core modules
pub mod attribute;
pub mod error;

// Type coercion
pub mod coercion;

// Schema emission
pub mod builder;
pub mod emitter;
