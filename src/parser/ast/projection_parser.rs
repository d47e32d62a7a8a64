use crate::parser::{ParseError, ParseErrorKind, QueryParser};

pub struct ProjectionParser;

impl ProjectionParser {
    /// Comma separated tokens between `select` and `from`, trimmed, in order.
    pub fn parse(query: &str) -> Result<Vec<String>, ParseError> {
        let parser = QueryParser::new(query);

        let Some((_, select_end)) = parser.find_word(&parser.comparers.select, 0, parser.length) else {
            return ParseError::new(ParseErrorKind::MissingSelect, "Missing select clause", 0, parser.length, &parser).err();
        };

        let Some((from_start, _)) = parser.find_word(&parser.comparers.from, select_end, parser.length) else {
            return ParseError::new(ParseErrorKind::MissingFrom, "Missing from clause", select_end, parser.length, &parser).err();
        };

        let fields: Vec<String> = parser
            .text_from_range(select_end, from_start)
            .split(',')
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();

        if fields.is_empty() {
            tracing::warn!(query, "select clause has no fields");
        }

        Ok(fields)
    }
}
