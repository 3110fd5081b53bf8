//! Natural-language query parsing and structured filtering.

pub mod filter;
pub mod parser;

pub use filter::apply_filters;
pub use parser::parse_natural_query;
