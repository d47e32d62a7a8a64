use crate::parser::QueryParser;

pub struct OrderBy;

impl OrderBy {
    /// Comma separated fields after `order by`, running to the end of the query.
    pub fn parse(query: &str) -> Option<Vec<String>> {
        let parser = QueryParser::new(query);
        let (_, start) = parser.find_word(&parser.comparers.order_by, 0, parser.length)?;

        let orders: Vec<String> = parser
            .text_from_range(start, parser.length)
            .split(',')
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();

        if orders.is_empty() {
            tracing::warn!(query, "order by clause has no fields");
        }

        Some(orders)
    }
}
