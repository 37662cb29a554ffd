mod context;
pub use context::{ExecContext, StatementContext};

mod hook;
pub use hook::{Outcome, PageHook};

pub use flipbook_core::{stmt, Error, Result};
pub use flipbook_sql::Rewriter;
