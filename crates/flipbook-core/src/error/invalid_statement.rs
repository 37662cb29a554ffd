use crate::Error;

/// Error when a statement cannot accept a pagination rewrite, for example
/// because one was already applied during the same call.
#[derive(Debug)]
pub(super) struct InvalidStatementError {
    pub(super) message: Box<str>,
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatementError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidStatement(_))
    }
}

impl std::fmt::Display for InvalidStatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}
