use super::Error;

/// Error when a field's column type is not one Mortar can store.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    field: Box<str>,
    db_type: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.db_type.is_empty() {
            write!(f, "field `{}` declares no type", self.field)
        } else {
            write!(
                f,
                "unsupported type `{}` for field `{}`",
                self.db_type, self.field
            )
        }
    }
}

impl Error {
    /// Creates an unsupported type error. An empty `db_type` means the field
    /// declared neither a semantic type nor a column type.
    pub fn unsupported_type(field: impl Into<String>, db_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            field: field.into().into(),
            db_type: db_type.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
