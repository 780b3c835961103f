use super::Error;

/// Error when a value written to a column violates the column's rules.
#[derive(Debug)]
pub(super) struct ValidationError {
    column: Box<str>,
    message: Box<str>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "validation failed for `{}`: {}", self.column, self.message)
    }
}

impl Error {
    /// Creates a validation error for the named column.
    pub fn validation(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            column: column.into().into(),
            message: message.into().into(),
        }))
    }

    /// Creates a validation error for a string whose length is out of bounds.
    pub fn validation_length(
        column: impl Into<String>,
        len: usize,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Error {
        let message = match (min, max) {
            (Some(min), Some(max)) => {
                format!("length {len} is outside the range {min}..={max}")
            }
            (Some(min), None) => format!("length {len} is shorter than {min}"),
            (None, Some(max)) => format!("length {len} is longer than {max}"),
            (None, None) => format!("length {len} is invalid"),
        };
        Error::validation(column, message)
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
