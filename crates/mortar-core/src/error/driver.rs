use super::Error;

/// Error returned by the database backend.
///
/// The backend error is stored unchanged. Its display output is the backend's
/// own message, and the original error is the `source()` of the returned
/// [`Error`].
#[derive(Debug)]
pub(super) struct DriverError {
    /// Backend-assigned error code, when the backend supplied one.
    code: Option<u16>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Creates an error from a backend failure that carries no error code,
    /// such as an I/O or protocol error.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            code: None,
            inner: Box::new(err),
        }))
    }

    /// Creates an error from a backend failure with a backend-assigned code.
    pub fn driver_with_code(code: u16, err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            code: Some(code),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error came from the database backend.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }

    /// The backend-assigned error code, if any.
    pub fn backend_code(&self) -> Option<u16> {
        match self.kind() {
            super::ErrorKind::Driver(err) => err.code,
            _ => None,
        }
    }
}
