use crate::parser::QueryParser;

/// Case-insensitive keyword matcher over a [`QueryParser`] text.
///
/// A space inside the word (`GROUP BY`) matches any run of whitespace, so the
/// matched span can be longer than `length`.
#[derive(Debug, Default, Clone)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    word_boundary: bool,
    whitespace_boundary: bool,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_ascii_uppercase().chars().collect();
        Self {
            length: word.len(),
            word,
            word_boundary: false,
            whitespace_boundary: false,
        }
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    pub fn is_word_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }

    fn is_boundary(&self, ch: char) -> bool {
        if self.whitespace_boundary {
            return Self::is_block_delimiter(ch);
        }
        if self.word_boundary {
            return !Self::is_word_char(ch);
        }
        true
    }

    /// Returns the end offset (exclusive) of the match starting at `position`.
    pub fn match_at(&self, parser: &QueryParser, position: usize) -> Option<usize> {
        if position > 0 && !self.is_boundary(parser.char_at(position - 1)) {
            return None;
        }

        let mut cursor = position;
        for expected in self.word.iter() {
            if cursor >= parser.length {
                return None;
            }

            let current = parser.char_at(cursor);
            if *expected == ' ' {
                if !Self::is_block_delimiter(current) {
                    return None;
                }
                while cursor < parser.length && Self::is_block_delimiter(parser.char_at(cursor)) {
                    cursor += 1;
                }
                continue;
            }

            if *expected != current.to_ascii_uppercase() {
                return None;
            }
            cursor += 1;
        }

        if cursor < parser.length && !self.is_boundary(parser.char_at(cursor)) {
            return None;
        }

        Some(cursor)
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        self.match_at(parser, parser.position).is_some()
    }

    pub fn with_word_boundary(mut self) -> Self { self.word_boundary = true; self }
    pub fn with_whitespace_boundary(mut self) -> Self { self.whitespace_boundary = true; self }
}
