use crate::parser::{ast::Restriction, ParseError, QueryParser};

pub struct WhereParser;

impl WhereParser {
    /// Span of the condition text: after `where` up to the first unquoted
    /// whole word `order` or `group`, or the end of the query.
    pub fn clause_span(parser: &QueryParser) -> Option<(usize, usize)> {
        let (_, start) = parser.find_word(&parser.comparers.r#where, 0, parser.length)?;

        let terminators = [&parser.comparers.order, &parser.comparers.group];
        let end = parser
            .find_any(&terminators, start, parser.length)
            .map(|(_, terminator_start, _)| terminator_start)
            .unwrap_or(parser.length);

        Some((start, end))
    }

    /// Condition spans split on unquoted `and`/`or`, left to right.
    pub fn split_conditions(parser: &QueryParser, start: usize, end: usize) -> Vec<(usize, usize)> {
        let connectives = [&parser.comparers.and, &parser.comparers.or];
        let mut conditions = vec![];
        let mut pivot = start;

        while let Some((_, connective_start, connective_end)) = parser.find_any(&connectives, pivot, end) {
            conditions.push((pivot, connective_start));
            pivot = connective_end;
        }
        conditions.push((pivot, end));

        conditions
    }

    /// `None` when the query has no where clause. Conditions without an
    /// operator are skipped and reported in the returned diagnostics.
    pub fn parse(query: &str) -> (Option<Vec<Restriction>>, Vec<ParseError>) {
        let mut parser = QueryParser::new(query);
        let Some((start, end)) = Self::clause_span(&parser) else {
            return (None, vec![]);
        };

        let mut restrictions = vec![];
        let mut errors = vec![];
        for (condition_start, condition_end) in Self::split_conditions(&parser, start, end) {
            match Restriction::parse(&mut parser, condition_start, condition_end) {
                Ok(restriction) => restrictions.push(restriction),
                Err(err) => {
                    tracing::warn!(condition = %err.text.trim(), "skipping condition: {}", err.message);
                    errors.push(err);
                }
            }
        }

        (Some(restrictions), errors)
    }
}
