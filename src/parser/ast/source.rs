use crate::parser::{ParseError, ParseErrorKind, QueryParser};

/// Span of the source identifier: the token right after the first `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

pub struct SourceLocator;

impl SourceLocator {
    pub fn locate(parser: &mut QueryParser) -> Result<SourceSpan, ParseError> {
        let Some((from_start, from_end)) = parser.find_word(&parser.comparers.from, 0, parser.length) else {
            return ParseError::new(ParseErrorKind::MissingFrom, "Missing from clause", 0, parser.length, parser).err();
        };

        parser.position = from_end;
        match parser.read_token() {
            Some((start, end)) => Ok(SourceSpan { start, end }),
            None => ParseError::new(ParseErrorKind::MissingSource, "Missing source after from", from_start, from_end, parser).err(),
        }
    }

    pub fn source_identifier(query: &str) -> Result<String, ParseError> {
        let mut parser = QueryParser::new(query);
        let span = Self::locate(&mut parser)?;

        Ok(parser.text_from_range(span.start, span.end))
    }

    /// The query prefix ending exactly at the end of the source identifier token.
    pub fn base_query(query: &str) -> Result<String, ParseError> {
        let mut parser = QueryParser::new(query);
        let span = Self::locate(&mut parser)?;

        Ok(parser.text_from_range(0, span.end))
    }
}
