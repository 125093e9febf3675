//! Input parsing and data source handling.

mod parser;
mod resolve;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::SourceMetadata;
