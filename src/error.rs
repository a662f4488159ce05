use thiserror::Error;

/// Result type for attribute operations
pub type AttributeResult<T> = Result<T, AttributeError>;

/// Errors that can occur while constructing attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// Application type with no Swagger 2.0 representation
    #[error("{app_type} is not supported by Swagger 2.0. maybe use date-time?")]
    UnsupportedType { app_type: String },
}

impl AttributeError {
    /// Create a new unsupported-type error
    pub fn unsupported_type<T: ToString>(app_type: T) -> Self {
        Self::UnsupportedType {
            app_type: app_type.to_string(),
        }
    }
}
