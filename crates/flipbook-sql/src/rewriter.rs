mod flavor;
use flavor::Flavor;

use flipbook_core::stmt::PageBounds;

/// Produces dialect-correct SQL text carrying a pagination clause.
///
/// The rewrite is a textual append rather than SQL parsing: simple and fast,
/// and correct for the common case of a plain, non-compound SELECT with no
/// pre-existing limiting clause and no trailing terminator. Statements that
/// already page, or compound statements, are out of scope for this strategy.
#[derive(Debug)]
pub struct Rewriter {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

impl Rewriter {
    /// Append the dialect's pagination clause to the statement text.
    pub fn paginate(&self, sql: &str, bounds: PageBounds) -> String {
        use std::fmt::Write;

        let mut ret = String::with_capacity(sql.len() + 24);
        ret.push_str(sql);

        match self.flavor {
            Flavor::Mysql => {
                write!(&mut ret, " LIMIT {}, {}", bounds.offset, bounds.limit).unwrap();
            }
            Flavor::Postgresql | Flavor::Sqlite => {
                write!(&mut ret, " LIMIT {} OFFSET {}", bounds.limit, bounds.offset).unwrap();
            }
        }

        ret
    }

    /// Name of the dialect this rewriter targets.
    pub fn database_type(&self) -> &'static str {
        match self.flavor {
            Flavor::Mysql => "mysql",
            Flavor::Postgresql => "postgresql",
            Flavor::Sqlite => "sqlite",
        }
    }
}
