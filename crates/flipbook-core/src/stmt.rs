mod bound_statement;
pub use bound_statement::BoundStatement;

mod execution_bounds;
pub use execution_bounds::ExecutionBounds;

mod page_bounds;
pub use page_bounds::PageBounds;

mod page_request;
pub use page_request::PageRequest;

mod params;
pub use params::Params;

mod value;
pub use value::Value;
