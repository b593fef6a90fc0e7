//! Character cursor over one line of input
//!
//! There is no separate token stream: the grammar rules look at the current
//! character and consume it in place. Positions are 0-based character offsets
//! and only ever move forward within one parse attempt.

/// Cursor state for a single parse attempt
#[derive(Debug, Clone)]
pub struct Cursor {
    input: Vec<char>,
    position: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Current character, or `None` at end of input
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Consume and return the current character
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Consume the current character if it equals `expected`
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume the maximal run of ASCII digits at the cursor
    pub fn eat_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.position += 1;
        }
        digits
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Input length in characters
    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_forward() {
        let mut cursor = Cursor::new("1+");
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.advance(), Some('1'));
        assert_eq!(cursor.advance(), Some('+'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_eat_digits_stops_at_non_digit() {
        let mut cursor = Cursor::new("123*4");
        assert_eq!(cursor.eat_digits(), "123");
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.eat_digits(), "");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_eat_only_matching_char() {
        let mut cursor = Cursor::new(")");
        assert!(!cursor.eat('('));
        assert!(cursor.eat(')'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_positions_count_chars_not_bytes() {
        let mut cursor = Cursor::new("é1");
        assert_eq!(cursor.len(), 2);
        cursor.advance();
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.position(), 1);
    }
}
