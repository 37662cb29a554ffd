/// Zero-based row window computed from a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Number of rows to skip.
    pub offset: u64,

    /// Maximum number of rows to return. Always at least 1.
    pub limit: u64,
}
