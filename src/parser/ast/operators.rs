use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::QueryParser;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparatorOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq
}

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorOp::Eq => write!(f, "="),
            ComparatorOp::NotEq => write!(f, "!="),
            ComparatorOp::Lt => write!(f, "<"),
            ComparatorOp::LtEq => write!(f, "<="),
            ComparatorOp::Gt => write!(f, ">"),
            ComparatorOp::GtEq => write!(f, ">="),
        }
    }
}

impl fmt::Debug for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComparatorOp({})", self)
    }
}

impl TryFrom<&str> for ComparatorOp {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "=" => Ok(ComparatorOp::Eq),
            "!=" | "<>" => Ok(ComparatorOp::NotEq),
            "<" => Ok(ComparatorOp::Lt),
            "<=" => Ok(ComparatorOp::LtEq),
            ">" => Ok(ComparatorOp::Gt),
            ">=" => Ok(ComparatorOp::GtEq),
            _ => Err(format!("Invalid comparer operator: '{}'", value)),
        }
    }
}

impl ComparatorOp {
    /// Two-character operators at the cursor.
    pub fn check_double(parser: &QueryParser) -> Option<(ComparatorOp, usize)> {
        let comparers = &parser.comparers;
        if comparers.less_than_or_equal.compare(parser) {
            return Some((ComparatorOp::LtEq, comparers.less_than_or_equal.length));
        }

        if comparers.greater_than_or_equal.compare(parser) {
            return Some((ComparatorOp::GtEq, comparers.greater_than_or_equal.length));
        }

        if comparers.not_equal.compare(parser) {
            return Some((ComparatorOp::NotEq, comparers.not_equal.length));
        }

        None
    }

    /// Single-character operators at the cursor.
    pub fn check_single(parser: &QueryParser) -> Option<(ComparatorOp, usize)> {
        let comparers = &parser.comparers;
        if comparers.less_than.compare(parser) {
            return Some((ComparatorOp::Lt, comparers.less_than.length));
        }

        if comparers.greater_than.compare(parser) {
            return Some((ComparatorOp::Gt, comparers.greater_than.length));
        }

        if comparers.equal.compare(parser) {
            return Some((ComparatorOp::Eq, comparers.equal.length));
        }

        None
    }

    /// Locates the operator of the condition spanning `start..end`, outside quotes.
    ///
    /// The whole span is scanned for a two-character operator before any
    /// single-character one is tried, so `season>=2008` never splits at `>`.
    pub fn locate(parser: &mut QueryParser, start: usize, end: usize) -> Option<(ComparatorOp, usize, usize)> {
        let checks: [fn(&QueryParser) -> Option<(ComparatorOp, usize)>; 2] = [Self::check_double, Self::check_single];

        for check in checks {
            parser.position = start;
            let mut in_quote = false;
            while parser.position < end {
                if parser.balanced_quotes && QueryParser::is_quote(parser.current()) {
                    in_quote = !in_quote;
                } else if !in_quote {
                    if let Some((op, length)) = check(parser) {
                        if parser.position + length <= end {
                            return Some((op, parser.position, parser.position + length));
                        }
                    }
                }
                parser.next();
            }
        }

        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "and"),
            LogicalOperator::Or => write!(f, "or"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{ComparatorOp, LogicalOperator}, QueryParser};

    fn locate(text: &str) -> Option<(ComparatorOp, usize, usize)> {
        let mut parser = QueryParser::new(text);
        let length = parser.length;
        ComparatorOp::locate(&mut parser, 0, length)
    }

    #[test]
    pub fn test_locate_longest_match_first() {
        assert_eq!(locate("season>=2008"), Some((ComparatorOp::GtEq, 6, 8)));
        assert_eq!(locate("season <= 2008"), Some((ComparatorOp::LtEq, 7, 9)));
        assert_eq!(locate("toss_decision != bat"), Some((ComparatorOp::NotEq, 14, 16)));
    }

    #[test]
    pub fn test_locate_single() {
        assert_eq!(locate("city = bangalore"), Some((ComparatorOp::Eq, 5, 6)));
        assert_eq!(locate("win_by_runs>10"), Some((ComparatorOp::Gt, 11, 12)));
        assert_eq!(locate("a < 3"), Some((ComparatorOp::Lt, 2, 3)));
    }

    #[test]
    pub fn test_locate_double_anywhere_beats_single_earlier() {
        // a later `>=` wins over an earlier `=` because doubles are scanned first
        assert_eq!(locate("a = b >= c"), Some((ComparatorOp::GtEq, 6, 8)));
    }

    #[test]
    pub fn test_locate_ignores_quoted_operators() {
        assert_eq!(locate("name = 'a<=b'"), Some((ComparatorOp::Eq, 5, 6)));
        assert_eq!(locate("'x=y'"), None);
    }

    #[test]
    pub fn test_locate_with_unmatched_quote() {
        assert_eq!(locate("name = O'Brien"), Some((ComparatorOp::Eq, 5, 6)));
        assert_eq!(locate("name = O'Br<=x"), Some((ComparatorOp::LtEq, 11, 13)));
    }

    #[test]
    pub fn test_locate_none() {
        assert_eq!(locate("season 2008"), None);
    }

    #[test]
    pub fn test_try_from() {
        assert_eq!(ComparatorOp::try_from(">=").unwrap(), ComparatorOp::GtEq);
        assert_eq!(ComparatorOp::try_from("<>").unwrap(), ComparatorOp::NotEq);
        assert!(ComparatorOp::try_from("like").is_err());
    }

    #[test]
    pub fn test_display() {
        assert_eq!(ComparatorOp::NotEq.to_string(), "!=");
        assert_eq!(format!("{:?}", ComparatorOp::Gt), "ComparatorOp(>)");
        assert_eq!(LogicalOperator::Or.to_string(), "or");
    }

    #[test]
    pub fn test_serialize() {
        assert_eq!(serde_json::to_string(&ComparatorOp::LtEq).unwrap(), "\"<=\"");
        assert_eq!(serde_json::to_string(&LogicalOperator::And).unwrap(), "\"and\"");
    }
}
