//! Symbol table of lexemes seen during one parse attempt

use rustc_hash::FxHashMap;
use std::fmt;

/// Kind of a recorded lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Operator,
    Number,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Operator => "Operator",
            TokenKind::Number => "Number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexeme -> kind mapping. Keys are unique; re-inserting a lexeme overwrites
/// it with the same kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    table: FxHashMap<String, TokenKind>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lexeme: impl Into<String>, kind: TokenKind) {
        let lexeme = lexeme.into();
        tracing::trace!(lexeme = %lexeme, kind = %kind, "symbol recorded");
        self.table.insert(lexeme, kind);
    }

    pub fn lookup(&self, lexeme: &str) -> Option<TokenKind> {
        self.table.get(lexeme).copied()
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        self.table.contains_key(lexeme)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.table.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries sorted by lexeme, for stable display
    pub fn sorted(&self) -> Vec<(&str, TokenKind)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (lexeme, kind) in self.sorted() {
            writeln!(f, "{} -> {}", lexeme, kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_single_key() {
        let mut symbols = SymbolTable::new();
        symbols.insert("1", TokenKind::Number);
        symbols.insert("+", TokenKind::Operator);
        symbols.insert("1", TokenKind::Number);

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols.lookup("1"), Some(TokenKind::Number));
        assert_eq!(symbols.lookup("+"), Some(TokenKind::Operator));
        assert_eq!(symbols.lookup("-"), None);
    }

    #[test]
    fn test_display_is_sorted() {
        let mut symbols = SymbolTable::new();
        symbols.insert("3", TokenKind::Number);
        symbols.insert("*", TokenKind::Operator);
        symbols.insert("12", TokenKind::Number);

        assert_eq!(
            symbols.to_string(),
            "* -> Operator\n12 -> Number\n3 -> Number\n"
        );
    }

    #[test]
    fn test_new_table_is_empty() {
        let symbols = SymbolTable::new();
        assert!(symbols.is_empty());
        assert!(!symbols.contains("1"));
    }
}
