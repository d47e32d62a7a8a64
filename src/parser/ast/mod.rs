pub mod query;
pub use query::*;

pub mod source;
pub use source::*;

pub mod projection_parser;
pub use projection_parser::*;

pub mod aggregate;
pub use aggregate::*;

pub mod operators;
pub use operators::*;

pub mod restriction;
pub use restriction::*;

pub mod where_parser;
pub use where_parser::*;

pub mod logical_parser;
pub use logical_parser::*;

pub mod group_by;
pub use group_by::*;

pub mod order_by;
pub use order_by::*;
