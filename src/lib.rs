pub mod parser;
pub use parser::{ParseError, ParseErrorKind, ParsedQuery, ParserConfig, QueryDescriptor, QueryParser};
pub use parser::ast::{AggregateFunction, AggregateKind, ComparatorOp, LogicalOperator, Restriction};
