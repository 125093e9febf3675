//! Typed tabular data model.

mod column;
mod frame;
mod types;

pub use column::{Column, ColumnData};
pub use frame::Table;
pub use types::ColumnType;

pub(crate) use column::format_number;
