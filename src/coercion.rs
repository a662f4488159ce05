/*!
Type coercion from application-level type names to the Swagger 2.0 vocabulary.

Application models describe fields with a richer vocabulary (`big_integer`,
`decimal`, `date_time`, ...) than Swagger 2.0 allows. This module reconciles
the two: every recognized application type maps to a valid `(type, format)`
pair, types already in the Swagger vocabulary pass through verbatim, and the
single unrepresentable case (`time`) is rejected.
*/

use tracing::trace;

use crate::error::{AttributeError, AttributeResult};

/// Translate an application type into a Swagger 2.0 `(type, format)` pair.
///
/// Runs exactly once per attribute, at construction. Unrecognized types pass
/// through unchanged together with the caller-supplied format, so primitive
/// types that already match the Swagger vocabulary (`string`, `boolean`, ...)
/// need no mapping entry. `value` maps to a bare `string`, clearing any
/// supplied format. `time` fails: Swagger 2.0 has no representation for a
/// bare time-of-day.
pub fn coerce(
    app_type: &str,
    supplied_format: Option<String>,
) -> AttributeResult<(String, Option<String>)> {
    let (ty, format) = match app_type {
        "big_integer" => ("integer".to_string(), Some("int64".to_string())),
        "integer" => ("integer".to_string(), Some("int32".to_string())),
        "date" => ("string".to_string(), Some("date".to_string())),
        "date_time" => ("string".to_string(), Some("date-time".to_string())),
        "decimal" | "float" => ("number".to_string(), Some("float".to_string())),
        "value" => ("string".to_string(), None),
        "time" => return Err(AttributeError::unsupported_type(app_type)),
        other => (other.to_string(), supplied_format),
    };

    trace!(app_type, ty = %ty, format = ?format, "coerced application type");
    Ok((ty, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_types() {
        let cases = [
            ("big_integer", "integer", Some("int64")),
            ("integer", "integer", Some("int32")),
            ("date", "string", Some("date")),
            ("date_time", "string", Some("date-time")),
            ("decimal", "number", Some("float")),
            ("float", "number", Some("float")),
            ("value", "string", None),
        ];

        for (input, expected_ty, expected_format) in cases {
            let (ty, format) = coerce(input, None).unwrap();
            assert_eq!(ty, expected_ty, "type for {}", input);
            assert_eq!(
                format.as_deref(),
                expected_format,
                "format for {}",
                input
            );
        }
    }

    #[test]
    fn test_mapped_types_ignore_supplied_format() {
        let (ty, format) = coerce("big_integer", Some("int32".to_string())).unwrap();
        assert_eq!(ty, "integer");
        assert_eq!(format.as_deref(), Some("int64"));
    }

    #[test]
    fn test_value_clears_supplied_format() {
        let (ty, format) = coerce("value", Some("byte".to_string())).unwrap();
        assert_eq!(ty, "string");
        assert_eq!(format, None);
    }

    #[test]
    fn test_unlisted_types_pass_through() {
        let (ty, format) = coerce("string", None).unwrap();
        assert_eq!(ty, "string");
        assert_eq!(format, None);

        let (ty, format) = coerce("boolean", Some("custom".to_string())).unwrap();
        assert_eq!(ty, "boolean");
        assert_eq!(format.as_deref(), Some("custom"));
    }

    #[test]
    fn test_time_is_unsupported() {
        let err = coerce("time", None).unwrap_err();
        assert!(matches!(err, AttributeError::UnsupportedType { .. }));
        assert!(err.to_string().contains("not supported by Swagger 2.0"));
    }
}
