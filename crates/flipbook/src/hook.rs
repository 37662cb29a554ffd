use crate::context::StatementContext;

use flipbook_core::{
    stmt::{PageBounds, PageRequest, Params},
    Result,
};
use flipbook_sql::Rewriter;

/// Pre-execution hook that applies pagination at statement preparation.
///
/// The hook holds no state across calls beyond the dialect rewriter fixed at
/// construction, so a single instance serves concurrent calls.
#[derive(Debug)]
pub struct PageHook {
    rewriter: Rewriter,
}

/// What the hook did with one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The call did not request pagination; the statement passed through
    /// untouched.
    Unmodified,

    /// The statement was rewritten to return the given row window.
    Rewritten(PageBounds),
}

impl PageHook {
    pub fn new(rewriter: Rewriter) -> PageHook {
        PageHook { rewriter }
    }

    /// Construct a hook for an externally configured database type name.
    ///
    /// An unrecognized name fails here, at startup, never mid-query.
    pub fn from_database_type(name: &str) -> Result<PageHook> {
        Ok(PageHook::new(Rewriter::from_database_type(name)?))
    }

    /// Construct a hook from a connection URL, keyed on the scheme.
    pub fn from_url(url: &str) -> Result<PageHook> {
        Ok(PageHook::new(Rewriter::from_url(url)?))
    }

    /// The rewriter this hook applies.
    pub fn rewriter(&self) -> &Rewriter {
        &self.rewriter
    }

    /// Intercept one statement-preparation call.
    ///
    /// If the call's parameter bag requests pagination, the statement text
    /// and execution bounds are rewritten in place; otherwise the call
    /// passes through untouched. Runs synchronously on the per-query hot
    /// path.
    pub fn prepare(&self, params: &Params, cx: &mut impl StatementContext) -> Result<Outcome> {
        let Some(request) = PageRequest::from_params(params) else {
            tracing::trace!("no pagination requested");
            return Ok(Outcome::Unmodified);
        };

        let bounds = request.bounds();
        let sql = self.rewriter.paginate(cx.sql(), bounds);
        cx.apply_page(sql, bounds)?;

        tracing::debug!(
            offset = bounds.offset,
            limit = bounds.limit,
            dialect = self.rewriter.database_type(),
            "applied pagination rewrite"
        );

        Ok(Outcome::Rewritten(bounds))
    }
}
