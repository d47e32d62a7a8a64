use crate::parser::{ast::{LogicalOperator, WhereParser}, QueryParser};

pub struct LogicalOperatorsParser;

impl LogicalOperatorsParser {
    /// Unquoted `and`/`or` words of the where clause, in order of appearance.
    /// `None` when the query has no where clause.
    pub fn parse(query: &str) -> Option<Vec<LogicalOperator>> {
        let parser = QueryParser::new(query);
        let (start, end) = WhereParser::clause_span(&parser)?;

        let connectives = [&parser.comparers.and, &parser.comparers.or];
        let mut operators = vec![];
        let mut pivot = start;
        while let Some((index, _, connective_end)) = parser.find_any(&connectives, pivot, end) {
            operators.push(if index == 0 { LogicalOperator::And } else { LogicalOperator::Or });
            pivot = connective_end;
        }

        Some(operators)
    }
}
