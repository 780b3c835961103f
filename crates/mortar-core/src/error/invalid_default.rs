use super::Error;

/// Error when a field's default value does not fit the field.
///
/// This occurs when:
/// - A literal default's type disagrees with the column's semantic type
/// - The symbolic `now` default is used on a non-`TIMESTAMP` column
/// - A `NULL` default is given to a required column
#[derive(Debug)]
pub(super) struct InvalidDefaultError {
    field: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidDefaultError {}

impl core::fmt::Display for InvalidDefaultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid default value for field `{}`: {}",
            self.field, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid default error.
    pub fn invalid_default(field: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDefault(InvalidDefaultError {
            field: field.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid default error.
    pub fn is_invalid_default(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDefault(_))
    }
}
