use super::PageBounds;

/// Offset/limit pair tracked separately from the statement text for one
/// call.
///
/// Downstream result windowing and cache-key construction read these bounds,
/// so they must stay consistent with any pagination clause embedded in the
/// SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionBounds {
    offset: u64,
    limit: u64,
}

impl ExecutionBounds {
    /// Bounds of a call that did not request pagination.
    pub const UNBOUNDED: ExecutionBounds = ExecutionBounds {
        offset: 0,
        limit: u64::MAX,
    };

    pub fn new(offset: u64, limit: u64) -> ExecutionBounds {
        ExecutionBounds { offset, limit }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn is_unbounded(&self) -> bool {
        *self == ExecutionBounds::UNBOUNDED
    }
}

impl Default for ExecutionBounds {
    fn default() -> ExecutionBounds {
        ExecutionBounds::UNBOUNDED
    }
}

impl From<PageBounds> for ExecutionBounds {
    fn from(bounds: PageBounds) -> ExecutionBounds {
        ExecutionBounds {
            offset: bounds.offset,
            limit: bounds.limit,
        }
    }
}
