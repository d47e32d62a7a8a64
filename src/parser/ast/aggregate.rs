use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static AGGREGATE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(min|max|sum|count|avg)\(([^)]*)\)").expect("aggregate call pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Min,
    Max,
    Sum,
    Count,
    Avg,
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateKind::Min => write!(f, "min"),
            AggregateKind::Max => write!(f, "max"),
            AggregateKind::Sum => write!(f, "sum"),
            AggregateKind::Count => write!(f, "count"),
            AggregateKind::Avg => write!(f, "avg"),
        }
    }
}

impl TryFrom<&str> for AggregateKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "min" => Ok(AggregateKind::Min),
            "max" => Ok(AggregateKind::Max),
            "sum" => Ok(AggregateKind::Sum),
            "count" => Ok(AggregateKind::Count),
            "avg" => Ok(AggregateKind::Avg),
            _ => Err(format!("Invalid aggregate function: '{}'", value)),
        }
    }
}

/// An aggregate call from the select list, e.g. `max(win_by_runs)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateFunction {
    pub kind: AggregateKind,
    pub field: String,
}

impl AggregateFunction {
    pub fn new(kind: AggregateKind, field: &str) -> Self {
        Self { kind, field: field.to_string() }
    }

    /// Parses a single select-list token; every kind requires the opening parenthesis.
    pub fn parse(token: &str) -> Option<Self> {
        let captures = AGGREGATE_CALL.captures(token.trim())?;
        let kind = AggregateKind::try_from(&captures[1]).ok()?;

        Some(Self::new(kind, captures[2].trim()))
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.field)
    }
}

pub struct AggregatesParser;

impl AggregatesParser {
    pub fn is_aggregate(token: &str) -> bool {
        AGGREGATE_CALL.is_match(token.trim())
    }

    /// `None` when no token is an aggregate call, never an empty list.
    pub fn parse(fields: &[String]) -> Option<Vec<AggregateFunction>> {
        let aggregates: Vec<AggregateFunction> = fields
            .iter()
            .filter_map(|field| AggregateFunction::parse(field))
            .collect();

        if aggregates.is_empty() {
            return None;
        }

        Some(aggregates)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{AggregateFunction, AggregateKind, AggregatesParser};

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    pub fn test_aggregates() {
        let result = AggregatesParser::parse(&fields(&["city", "max(win_by_runs)", "count(*)"]))
            .expect("Failed to parse aggregates");

        assert_eq!(result, vec![
            AggregateFunction::new(AggregateKind::Max, "win_by_runs"),
            AggregateFunction::new(AggregateKind::Count, "*"),
        ]);
    }

    #[test]
    pub fn test_aggregates_none() {
        assert_eq!(AggregatesParser::parse(&fields(&["city", "winner"])), None);
        assert_eq!(AggregatesParser::parse(&[]), None);
    }

    #[test]
    pub fn test_aggregate_requires_parenthesis() {
        assert_eq!(AggregateFunction::parse("avg_score"), None);
        assert_eq!(AggregateFunction::parse("average(x)"), None);
        assert_eq!(
            AggregateFunction::parse("avg(score)"),
            Some(AggregateFunction::new(AggregateKind::Avg, "score"))
        );
    }

    #[test]
    pub fn test_aggregate_keeps_field_case() {
        let result = AggregateFunction::parse("SUM( Win_By_Runs )").expect("Failed to parse aggregate");

        assert_eq!(result.kind, AggregateKind::Sum);
        assert_eq!(result.field, "Win_By_Runs");
    }

    #[test]
    pub fn test_kind_try_from() {
        assert_eq!(AggregateKind::try_from("MIN").unwrap(), AggregateKind::Min);
        assert!(AggregateKind::try_from("median").is_err());
    }
}
