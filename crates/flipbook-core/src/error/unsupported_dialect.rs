use crate::Error;

/// Error when the configured database dialect has no pagination rewrite rule.
#[derive(Debug)]
pub(super) struct UnsupportedDialectError {
    pub(super) name: Box<str>,
}

impl Error {
    /// Creates an unsupported dialect error.
    ///
    /// Raised at interceptor construction when the configured database type
    /// has no implemented rewrite rule. A query must never run against a
    /// dialect that would silently skip pagination.
    pub fn unsupported_dialect(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedDialect(
            UnsupportedDialectError {
                name: name.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported dialect error.
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedDialect(_))
    }
}

impl std::fmt::Display for UnsupportedDialectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported database dialect: {}", self.name)
    }
}
