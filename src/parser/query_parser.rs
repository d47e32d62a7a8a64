use crate::parser::{ast::QueryDescriptor, ParsedQuery, ParserConfig, QueryComparers, WordComparer};

/// Character cursor over an unmodified query string.
///
/// Offsets are character offsets into `text_v`; the text is never case-folded.
/// Single-quoted spans are skipped by scans only when every quote is paired;
/// with an unmatched quote the whole text is scanned as plain words.
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub balanced_quotes: bool,

    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        let quotes = text_v.iter().filter(|ch| Self::is_quote(**ch)).count();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            balanced_quotes: quotes % 2 == 0,
            comparers: QueryComparers::new(),
        }
    }

    /// Parses `query` into a best-effort descriptor plus diagnostics.
    pub fn parse_query(query: &str, config: &ParserConfig) -> ParsedQuery {
        QueryDescriptor::parse(query, config)
    }

    pub fn is_quote(ch: char) -> bool {
        ch == '\''
    }

    /// Offset of the last quote when the quotes are not paired.
    pub fn unmatched_quote(&self) -> Option<usize> {
        if self.balanced_quotes {
            return None;
        }
        self.text_v.iter().rposition(|ch| Self::is_quote(*ch))
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn char_at(&self, position: usize) -> char {
        if position < self.length {
            return self.text_v[position];
        }

        '\0'
    }

    pub fn current(&self) -> char {
        self.char_at(self.position)
    }

    pub fn next(&mut self) {
        self.position += 1;
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        if start >= end {
            return String::new();
        }
        self.text_v[start..end].iter().collect()
    }

    /// Finds the first of `comparers` matching in `from..to`, outside single
    /// quotes when they are balanced. Returns `(index of comparer, start, end)`.
    pub fn find_any(&self, comparers: &[&WordComparer], from: usize, to: usize) -> Option<(usize, usize, usize)> {
        let to = to.min(self.length);
        let mut in_quote = false;
        let mut position = from;

        while position < to {
            let ch = self.text_v[position];
            if self.balanced_quotes && Self::is_quote(ch) {
                in_quote = !in_quote;
                position += 1;
                continue;
            }

            if !in_quote {
                for (index, comparer) in comparers.iter().enumerate() {
                    if let Some(end) = comparer.match_at(self, position) {
                        if end <= to {
                            return Some((index, position, end));
                        }
                    }
                }
            }
            position += 1;
        }

        None
    }

    pub fn find_word(&self, comparer: &WordComparer, from: usize, to: usize) -> Option<(usize, usize)> {
        self.find_any(&[comparer], from, to)
            .map(|(_, start, end)| (start, end))
    }

    /// Moves the cursor over the next whitespace-delimited token and returns
    /// its span, or `None` at end of input.
    pub fn read_token(&mut self) -> Option<(usize, usize)> {
        self.next_non_whitespace();
        if self.eof() {
            return None;
        }

        let pivot = self.position;
        while !self.eof() && !WordComparer::is_block_delimiter(self.current()) {
            self.next();
        }

        Some((pivot, self.position))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ParserConfig, QueryParser};

    #[test]
    pub fn test_parse_query() {
        let parsed = QueryParser::parse_query("select city from data/ipl.csv where season >= 2008", &ParserConfig::default());

        assert!(!parsed.is_malformed());
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.descriptor.source_identifier, "data/ipl.csv");
        assert_eq!(parsed.descriptor.restrictions.map(|r| r.len()), Some(1));
    }

    #[test]
    pub fn test_find_word_skips_quoted_spans() {
        let parser = QueryParser::new("x = 'p and q' and y = 2");
        let found = parser.find_word(&parser.comparers.and, 0, parser.length);

        assert_eq!(found, Some((14, 17)));
    }

    #[test]
    pub fn test_find_word_with_unmatched_quote_scans_plain_text() {
        let parser = QueryParser::new("name = O'Brien group by city");

        assert!(!parser.balanced_quotes);
        assert_eq!(parser.unmatched_quote(), Some(8));
        assert_eq!(parser.find_word(&parser.comparers.group_by, 0, parser.length), Some((15, 23)));
    }

    #[test]
    pub fn test_unmatched_quote_none_when_paired() {
        let parser = QueryParser::new("x = 'a' and y = 'b'");

        assert!(parser.balanced_quotes);
        assert_eq!(parser.unmatched_quote(), None);
    }

    #[test]
    pub fn test_find_any_reports_comparer_index() {
        let parser = QueryParser::new("a = 1 or b = 2 and c = 3");
        let found = parser.find_any(&[&parser.comparers.and, &parser.comparers.or], 0, parser.length);

        assert_eq!(found, Some((1, 6, 8)));
    }

    #[test]
    pub fn test_find_word_respects_upper_bound() {
        let parser = QueryParser::new("a and b");

        assert_eq!(parser.find_word(&parser.comparers.and, 0, 4), None);
        assert_eq!(parser.find_word(&parser.comparers.and, 0, 5), Some((2, 5)));
    }

    #[test]
    pub fn test_read_token() {
        let mut parser = QueryParser::new("  data/ipl.csv   where");

        assert_eq!(parser.read_token(), Some((2, 14)));
        assert_eq!(parser.text_from_range(2, 14), "data/ipl.csv");
        assert_eq!(parser.read_token(), Some((17, 22)));
        assert_eq!(parser.read_token(), None);
    }

    #[test]
    pub fn test_text_from_range_is_char_based() {
        let parser = QueryParser::new("select cidade from çà.csv");

        assert_eq!(parser.text_from_range(19, 25), "çà.csv");
        assert_eq!(parser.text_from_range(19, 99), "çà.csv");
        assert_eq!(parser.text_from_range(5, 2), "");
    }
}
