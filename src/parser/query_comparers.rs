use crate::parser::WordComparer;

#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub from: WordComparer,
    pub r#where: WordComparer,
    pub group_by: WordComparer,
    pub order_by: WordComparer,
    pub group: WordComparer,
    pub order: WordComparer,
    pub order_token: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub equal: WordComparer,
    pub not_equal: WordComparer,
    pub greater_than: WordComparer,
    pub greater_than_or_equal: WordComparer,
    pub less_than: WordComparer,
    pub less_than_or_equal: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_boundary(),
            from: WordComparer::new("FROM").with_whitespace_boundary(),
            r#where: WordComparer::new("WHERE").with_whitespace_boundary(),
            group_by: WordComparer::new("GROUP BY").with_whitespace_boundary(),
            order_by: WordComparer::new("ORDER BY").with_whitespace_boundary(),
            // clause terminators inside a where clause
            group: WordComparer::new("GROUP").with_word_boundary(),
            order: WordComparer::new("ORDER").with_word_boundary(),
            // group by terminator, `order-date` is still a field
            order_token: WordComparer::new("ORDER").with_whitespace_boundary(),
            and: WordComparer::new("AND").with_word_boundary(),
            or: WordComparer::new("OR").with_word_boundary(),
            equal: WordComparer::new("="),
            not_equal: WordComparer::new("!="),
            greater_than: WordComparer::new(">"),
            greater_than_or_equal: WordComparer::new(">="),
            less_than: WordComparer::new("<"),
            less_than_or_equal: WordComparer::new("<="),
        }
    }
}
