use super::Error;

/// Error when the connection pool cannot serve a request.
///
/// This occurs when a query is issued before `init()` or after `close()`,
/// or when the pool lifecycle is driven out of order.
#[derive(Debug)]
pub(super) struct ConnectionPoolError {
    message: Box<str>,
}

impl std::error::Error for ConnectionPoolError {}

impl core::fmt::Display for ConnectionPoolError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection pool: {}", self.message)
    }
}

impl Error {
    /// Creates a connection pool error.
    pub fn connection_pool(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConnectionPool(ConnectionPoolError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a connection pool error.
    pub fn is_connection_pool(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionPool(_))
    }
}
