use crate::parser::QueryParser;

pub struct GroupBy;

impl GroupBy {
    /// Fields after `group by`, up to the whitespace-delimited word `order`. Fields may be
    /// separated by commas, whitespace, or both.
    pub fn parse(query: &str) -> Option<Vec<String>> {
        let parser = QueryParser::new(query);
        let (_, start) = parser.find_word(&parser.comparers.group_by, 0, parser.length)?;

        let end = parser
            .find_word(&parser.comparers.order_token, start, parser.length)
            .map(|(order_start, _)| order_start)
            .unwrap_or(parser.length);

        let groups: Vec<String> = parser
            .text_from_range(start, end)
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        if groups.is_empty() {
            tracing::warn!(query, "group by clause has no fields");
        }

        Some(groups)
    }
}
