mod connection_pool;
mod driver;
mod invalid_configuration;
mod invalid_default;
mod unsupported_type;
mod validation;

use connection_pool::ConnectionPoolError;
use driver::DriverError;
use invalid_configuration::InvalidConfigurationError;
use invalid_default::InvalidDefaultError;
use std::sync::Arc;
use unsupported_type::UnsupportedTypeError;
use validation::ValidationError;

/// An error that can occur in Mortar.
///
/// Errors are cheap to clone and one pointer wide. Backend errors are kept
/// verbatim and are reachable through [`std::error::Error::source`].
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    ConnectionPool(ConnectionPoolError),
    Driver(DriverError),
    InvalidConfiguration(InvalidConfigurationError),
    InvalidDefault(InvalidDefaultError),
    UnsupportedType(UnsupportedTypeError),
    Validation(ValidationError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            ConnectionPool(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidConfiguration(err) => core::fmt::Display::fmt(err, f),
            InvalidDefault(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
            Validation(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}
