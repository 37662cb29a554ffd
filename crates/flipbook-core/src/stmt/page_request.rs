use super::{PageBounds, Params};

/// Parameter key carrying the 1-based page number.
const PAGE: &str = "page";

/// Parameter key carrying the page size.
const SIZE: &str = "size";

/// A caller's request for one page of results.
///
/// Page numbering is 1-based. Values are validated on construction: a
/// request with a page or size below 1 cannot be represented, so an invalid
/// offset can never reach the rewritten SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Create a page request, failing closed on non-positive input.
    pub fn new(page: i64, size: i64) -> Option<PageRequest> {
        if page < 1 || size < 1 {
            return None;
        }

        Some(PageRequest {
            page: page as u64,
            size: size as u64,
        })
    }

    /// Inspect a call's parameter bag for pagination intent.
    ///
    /// Recognizes integer-valued `page` and `size` entries. Any other shape
    /// (missing keys, non-integer values, non-positive values) means the
    /// call did not request pagination; it is never an error.
    pub fn from_params(params: &Params) -> Option<PageRequest> {
        let page = params.get(PAGE)?.as_i64()?;
        let size = params.get(SIZE)?.as_i64()?;
        PageRequest::new(page, size)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Convert the 1-based page request into a zero-based row window.
    pub fn bounds(&self) -> PageBounds {
        PageBounds {
            offset: (self.page - 1).saturating_mul(self.size),
            limit: self.size,
        }
    }
}
