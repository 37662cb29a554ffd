use super::Rewriter;

use flipbook_core::{Error, Result};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Rewriter {
    pub fn sqlite() -> Rewriter {
        Rewriter {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Rewriter {
        Rewriter {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Rewriter {
        Rewriter {
            flavor: Flavor::Mysql,
        }
    }

    /// Select a rewriter from an externally configured database type name.
    ///
    /// A name with no implemented rewrite rule is a configuration error and
    /// is rejected here, before any query executes.
    pub fn from_database_type(name: &str) -> Result<Rewriter> {
        match name {
            "mysql" => Ok(Rewriter::mysql()),
            "postgresql" | "postgres" => Ok(Rewriter::postgresql()),
            "sqlite" => Ok(Rewriter::sqlite()),
            _ => Err(Error::unsupported_dialect(name)),
        }
    }

    /// Select a rewriter from a connection URL, keyed on the scheme.
    pub fn from_url(url: &str) -> Result<Rewriter> {
        let parsed = Url::parse(url).map_err(|err| {
            Error::invalid_connection_url(format!(
                "failed to parse connection URL; url={url}; {err}"
            ))
        })?;

        Rewriter::from_database_type(parsed.scheme())
    }
}
