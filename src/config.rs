//! Command-line options and runtime configuration

use clap::Parser;

/// Word that ends an interactive session (matched case-insensitively)
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// Spaces per depth level when rendering a tree
pub const DEFAULT_INDENT: usize = 2;

#[derive(Debug, Parser)]
#[command(name = "exprtree")]
#[command(about = "Parse arithmetic expressions into a parse tree and symbol table")]
pub struct Cli {
    /// Expressions to parse; when given, each is reported and the program exits
    pub exprs: Vec<String>,

    /// Use the line-oriented prompt on stdin/stdout instead of the TUI
    #[arg(long)]
    pub plain: bool,

    /// Word that ends the session
    #[arg(long, value_name = "WORD", default_value = DEFAULT_EXIT_WORD)]
    pub exit_word: String,

    /// Spaces per depth level in rendered trees
    #[arg(long, value_name = "N", default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Emit logs to stderr while the TUI is running
    #[arg(long)]
    pub log: bool,
}

/// Settings shared by the prompt loop and the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub exit_word: String,
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl Config {
    /// Whether `line` is the exit word (case-insensitive, exact match)
    pub fn is_exit(&self, line: &str) -> bool {
        line.eq_ignore_ascii_case(&self.exit_word)
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            exit_word: cli.exit_word.clone(),
            indent: cli.indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_word_ignores_case() {
        let config = Config::default();
        assert!(config.is_exit("exit"));
        assert!(config.is_exit("EXIT"));
        assert!(config.is_exit("ExIt"));
        assert!(!config.is_exit(" exit"));
        assert!(!config.is_exit("exit1"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["exprtree"]);
        assert!(cli.exprs.is_empty());
        assert!(!cli.plain);
        assert_eq!(Config::from(&cli), Config::default());
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from(["exprtree", "--exit-word", "quit", "--indent", "4", "1+2"]);
        assert_eq!(cli.exprs, vec!["1+2".to_string()]);
        let config = Config::from(&cli);
        assert_eq!(config.exit_word, "quit");
        assert_eq!(config.indent, 4);
    }
}
