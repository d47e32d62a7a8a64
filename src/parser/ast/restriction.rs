use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{ast::ComparatorOp, ParseError, ParseErrorKind, QueryParser};

/// A single filter condition: `field op value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    pub field: String,
    pub op: ComparatorOp,
    pub value: String,
}

impl Restriction {
    pub fn new(field: &str, op: ComparatorOp, value: &str) -> Self {
        Self {
            field: field.to_string(),
            op,
            value: value.to_string(),
        }
    }

    /// Parses the condition spanning `start..end`. The value loses its single quotes.
    pub fn parse(parser: &mut QueryParser, start: usize, end: usize) -> Result<Self, ParseError> {
        let Some((op, op_start, op_end)) = ComparatorOp::locate(parser, start, end) else {
            return ParseError::new(ParseErrorKind::UnparseableCondition, "No operator in condition", start, end, parser).err();
        };

        let field = parser.text_from_range(start, op_start);
        let field = field.trim();
        if field.is_empty() {
            return ParseError::new(ParseErrorKind::UnparseableCondition, "No field in condition", start, end, parser).err();
        }

        let value = parser.text_from_range(op_end, end).replace('\'', "");

        Ok(Self::new(field, op, value.trim()))
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}
