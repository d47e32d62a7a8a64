/// Parser configuration.
///
/// - `strict_conditions` turns a where-clause condition without a recognizable
///   operator into a fatal diagnostic instead of a skipped one.
/// - `keep_aggregate_fields` keeps aggregate calls such as `max(x)` verbatim in
///   `selected_fields`; when false they only appear in `aggregate_functions`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub strict_conditions: bool,
    pub keep_aggregate_fields: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { strict_conditions: false, keep_aggregate_fields: true }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            strict_conditions: true,
            ..Self::default()
        }
    }

    pub fn without_aggregate_fields() -> Self {
        Self {
            keep_aggregate_fields: false,
            ..Self::default()
        }
    }
}
