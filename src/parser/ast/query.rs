use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{ast::{AggregateFunction, AggregatesParser, GroupBy, LogicalOperator, LogicalOperatorsParser, OrderBy, ProjectionParser, Restriction, SourceLocator, WhereParser}, ParseError, ParseErrorKind, ParserConfig, QueryParser};

/// Structured form of a query, handed to the execution engine.
///
/// Clauses that are absent from the query are `None`, which is distinct from
/// a present clause that yielded an empty list.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub raw_query: String,
    pub base_query: String,
    pub source_identifier: String,
    pub selected_fields: Vec<String>,
    pub aggregate_functions: Option<Vec<AggregateFunction>>,
    pub restrictions: Option<Vec<Restriction>>,
    pub logical_operators: Option<Vec<LogicalOperator>>,
    pub group_by_fields: Option<Vec<String>>,
    pub order_by_fields: Option<Vec<String>>,
}

/// A best-effort descriptor plus everything that went wrong building it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub descriptor: QueryDescriptor,
    pub diagnostics: Vec<ParseError>,
}

impl ParsedQuery {
    pub fn is_malformed(&self) -> bool {
        self.diagnostics.iter().any(|diagnostic| diagnostic.fatal)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ParseError> {
        self.diagnostics.iter().filter(|diagnostic| !diagnostic.fatal)
    }

    /// The descriptor, or the first fatal diagnostic.
    pub fn into_result(self) -> Result<QueryDescriptor, ParseError> {
        match self.diagnostics.into_iter().find(|diagnostic| diagnostic.fatal) {
            Some(err) => Err(err),
            None => Ok(self.descriptor),
        }
    }
}

impl QueryDescriptor {
    /// Runs every extractor over `query`. A failing extractor only loses its
    /// own fragment; the others still run.
    pub fn parse(query: &str, config: &ParserConfig) -> ParsedQuery {
        let mut diagnostics: Vec<ParseError> = vec![];

        let parser = QueryParser::new(query);
        if let Some(position) = parser.unmatched_quote() {
            tracing::warn!(position, "unmatched quote, quoted text is scanned as plain words");
            diagnostics.push(ParseError::new(ParseErrorKind::UnbalancedQuote, "Unmatched quote", position, position + 1, &parser));
        }

        let source_identifier = SourceLocator::source_identifier(query).unwrap_or_else(|err| {
            diagnostics.push(err);
            String::new()
        });
        let base_query = SourceLocator::base_query(query).unwrap_or_default();

        let fields = ProjectionParser::parse(query).unwrap_or_else(|err| {
            // a missing from was already reported by the source locator
            if !diagnostics.iter().any(|diagnostic| diagnostic.kind == err.kind) {
                diagnostics.push(err);
            }
            vec![]
        });

        let aggregate_functions = AggregatesParser::parse(&fields);
        let selected_fields = if config.keep_aggregate_fields {
            fields
        } else {
            fields.into_iter().filter(|field| !AggregatesParser::is_aggregate(field)).collect()
        };

        let (restrictions, condition_errors) = WhereParser::parse(query);
        diagnostics.extend(condition_errors.into_iter().map(|err| {
            if config.strict_conditions { err.into_fatal() } else { err }
        }));

        let descriptor = QueryDescriptor {
            raw_query: query.to_string(),
            base_query,
            source_identifier,
            selected_fields,
            aggregate_functions,
            restrictions,
            logical_operators: LogicalOperatorsParser::parse(query),
            group_by_fields: GroupBy::parse(query),
            order_by_fields: OrderBy::parse(query),
        };

        tracing::debug!(
            source = %descriptor.source_identifier,
            fields = descriptor.selected_fields.len(),
            restrictions = descriptor.restrictions.as_ref().map_or(0, Vec::len),
            diagnostics = diagnostics.len(),
            "parsed query"
        );

        ParsedQuery { descriptor, diagnostics }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl TryFrom<&str> for QueryDescriptor {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        QueryDescriptor::parse(value, &ParserConfig::default()).into_result()
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

fn join_optional<T: fmt::Display>(values: &Option<Vec<T>>) -> String {
    match values {
        Some(values) => format!("[{}]", join(values)),
        None => "None".to_string(),
    }
}

impl fmt::Display for QueryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryDescriptor(source={}, fields=[{}], aggregates={}, restrictions={}, logical_operators={}, group_by={}, order_by={})",
               self.source_identifier,
               join(&self.selected_fields),
               join_optional(&self.aggregate_functions),
               join_optional(&self.restrictions),
               join_optional(&self.logical_operators),
               join_optional(&self.group_by_fields),
               join_optional(&self.order_by_fields))
    }
}
