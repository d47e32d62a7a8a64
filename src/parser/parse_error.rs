use std::fmt::Display;

use crate::parser::QueryParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingSelect,
    MissingFrom,
    MissingSource,
    UnparseableCondition,
    UnbalancedQuote,
}

impl ParseErrorKind {
    /// Fatal kinds mean the query is malformed: fields or source cannot be extracted.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ParseErrorKind::UnparseableCondition | ParseErrorKind::UnbalancedQuote)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub fatal: bool,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: &str, start: usize, end: usize, parser: &QueryParser) -> Self {
        Self {
            kind,
            message: message.to_string(),
            text: parser.text_from_range(start, end),
            start,
            end,
            fatal: kind.is_fatal(),
        }
    }

    pub fn into_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    pub fn err<T>(self) -> Result<T, ParseError> {
        Err(self)
    }
}

impl Display for ParseError  {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "ParseError: {}\n  at [{}:{}] -> '{}'",
                self.message,
                self.start,
                self.end,
                self.text
            )
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use crate::parser::{ParseError, ParseErrorKind, QueryParser};

    #[test]
    pub fn test_display() {
        let parser = QueryParser::new("select a from f.csv where b");
        let err = ParseError::new(ParseErrorKind::UnparseableCondition, "No operator in condition", 26, 27, &parser);

        assert_eq!(err.to_string(), "ParseError: No operator in condition\n  at [26:27] -> 'b'");
        assert!(!err.fatal);
        assert!(err.into_fatal().fatal);
    }

    #[test]
    pub fn test_fatal_kinds() {
        assert!(ParseErrorKind::MissingSelect.is_fatal());
        assert!(ParseErrorKind::MissingFrom.is_fatal());
        assert!(ParseErrorKind::MissingSource.is_fatal());
        assert!(!ParseErrorKind::UnparseableCondition.is_fatal());
        assert!(!ParseErrorKind::UnbalancedQuote.is_fatal());
    }
}
