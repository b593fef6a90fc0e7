//! Line-oriented prompt loop and plain-text reports
//!
//! Thin caller of [`crate::parser::parse`]: one line is one attempt, and a
//! failed attempt only prints its error before the next prompt.

use crate::config::Config;
use crate::parser::{parse, render_tree, ParseError, ParseOutcome};
use std::io::{self, BufRead, Write};

/// Plain-text report for one attempt
pub fn format_report(result: &Result<ParseOutcome, ParseError>, indent: usize) -> String {
    match result {
        Ok(outcome) => format!(
            "Parse Tree:\n{}\nSymbol Table:\n{}\nInput accepted based on Grammar: {}\n",
            render_tree(&outcome.tree, indent),
            outcome.symbols,
            outcome.valid
        ),
        Err(err) => format!("Error: {}\n", err),
    }
}

/// Parse `line` and write its report. Returns whether the parse succeeded.
pub fn report_line<W: Write>(line: &str, config: &Config, output: &mut W) -> io::Result<bool> {
    let result = parse(line);
    output.write_all(format_report(&result, config.indent).as_bytes())?;
    Ok(result.is_ok())
}

/// Prompt, read and report until the exit word or end of input.
///
/// Lines are decoded lossily: invalid UTF-8 becomes U+FFFD and is reported as
/// an unexpected character like any other bad input.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W, config: &Config) -> io::Result<()> {
    let mut buf = Vec::new();

    loop {
        write!(
            output,
            "Enter an expression (or type '{}' to quit): ",
            config.exit_word
        )?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line: &str = &text;
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if config.is_exit(line) {
            tracing::debug!("exit word received");
            break;
        }

        report_line(line, config, output)?;
    }

    Ok(())
}
