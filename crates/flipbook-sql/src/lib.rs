pub mod rewriter;
pub use rewriter::Rewriter;
