use flipbook_core::{
    stmt::{BoundStatement, ExecutionBounds, PageBounds},
    Error, Result,
};

/// Mutable view of one call's execution state, granted to the hook during
/// the statement-preparation window.
///
/// Implementations adapt a pipeline's own statement and bounds storage. The
/// contract on [`apply_page`] is all-or-nothing: statement text and
/// execution bounds change together, or not at all, so downstream readers
/// never observe rewritten SQL with stale bounds or the reverse. An adapter
/// that cannot reach the pipeline's fields must fail the call with
/// [`Error::context_access`] rather than half-apply.
///
/// [`apply_page`]: StatementContext::apply_page
pub trait StatementContext {
    /// SQL text of the statement about to run.
    fn sql(&self) -> &str;

    /// Execution bounds currently tracked for the call.
    fn bounds(&self) -> ExecutionBounds;

    /// Replace the statement text and execution bounds in one step.
    fn apply_page(&mut self, sql: String, bounds: PageBounds) -> Result<()>;
}

/// Call-scoped execution context owning the bound statement and its bounds.
///
/// Created by the pipeline per call and discarded at call completion. The
/// context moves through two states, unmodified and rewritten, with one
/// irreversible transition between them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecContext {
    statement: BoundStatement,
    bounds: ExecutionBounds,
    rewritten: bool,
}

impl ExecContext {
    pub fn new(statement: BoundStatement) -> ExecContext {
        ExecContext {
            statement,
            bounds: ExecutionBounds::UNBOUNDED,
            rewritten: false,
        }
    }

    /// The statement as the driver will execute it.
    pub fn statement(&self) -> &BoundStatement {
        &self.statement
    }

    pub fn bounds(&self) -> ExecutionBounds {
        self.bounds
    }

    /// Returns `true` once a pagination rewrite has been applied.
    pub fn is_rewritten(&self) -> bool {
        self.rewritten
    }

    /// Consume the context, returning the statement and bounds for the
    /// pipeline to execute.
    pub fn into_parts(self) -> (BoundStatement, ExecutionBounds) {
        (self.statement, self.bounds)
    }
}

impl StatementContext for ExecContext {
    fn sql(&self) -> &str {
        self.statement.sql()
    }

    fn bounds(&self) -> ExecutionBounds {
        self.bounds
    }

    fn apply_page(&mut self, sql: String, bounds: PageBounds) -> Result<()> {
        if self.rewritten {
            return Err(Error::invalid_statement(
                "statement already carries a pagination rewrite",
            ));
        }

        // Text and bounds move together.
        self.statement.set_sql(sql);
        self.bounds = bounds.into();
        self.rewritten = true;

        Ok(())
    }
}
