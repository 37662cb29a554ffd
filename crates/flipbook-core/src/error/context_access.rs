use crate::Error;

/// Error when a call's execution context does not expose the fields the
/// pagination rewrite must mutate.
///
/// These errors are fatal for the affected call: executing against
/// half-applied state would corrupt the result window or the downstream
/// cache key.
#[derive(Debug)]
pub(super) struct ContextAccessError {
    pub(super) message: Box<str>,
}

impl Error {
    /// Creates a context access error.
    pub fn context_access(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ContextAccess(ContextAccessError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a context access error.
    pub fn is_context_access(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ContextAccess(_))
    }
}

impl std::fmt::Display for ContextAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "execution context access failed: {}", self.message)
    }
}
