//! Main TUI application state and logic

use crate::config::Config;
use crate::parser::{parse, ParseError, ParseOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which scrollable pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tree,
    Symbols,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    pub config: Config,

    /// Current contents of the input line
    pub input: String,

    /// Result of parsing `input`; `None` while the line is empty
    pub result: Option<Result<ParseOutcome, ParseError>>,

    /// Submitted lines, oldest first
    pub history: Vec<String>,

    /// Position while browsing history (None = editing a fresh line)
    pub history_index: Option<usize>,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub tree_scroll: usize,
    pub symbols_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        let status_message = format!("Type an expression, or '{}' to quit", config.exit_word);
        App {
            config,
            input: String::new(),
            result: None,
            history: Vec::new(),
            history_index: None,
            focused_pane: FocusedPane::Tree,
            tree_scroll: 0,
            symbols_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input on top, panes in the middle, status bar at the bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let error_position = match &self.result {
            Some(Err(err)) => Some(err.position()),
            _ => None,
        };
        let outcome = match &self.result {
            Some(Ok(outcome)) => Some(outcome),
            _ => None,
        };

        super::panes::render_input_pane(frame, rows[0], &self.input, error_position);

        super::panes::render_tree_pane(
            frame,
            columns[0],
            outcome.map(|o| &o.tree),
            self.config.indent,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_symbols_pane(
            frame,
            columns[1],
            outcome.map(|o| &o.symbols),
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        super::panes::render_status_bar(
            frame,
            rows[2],
            &self.status_message,
            self.result.as_ref(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.history_index = None;
                self.reparse();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.history_index = None;
                self.reparse();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => self.history_prev(),
            KeyCode::Down => self.history_next(),
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Tree => &mut self.tree_scroll,
            FocusedPane::Symbols => &mut self.symbols_scroll,
        }
    }

    /// Parse the current line as a fresh attempt
    fn reparse(&mut self) {
        self.tree_scroll = 0;
        self.symbols_scroll = 0;
        self.result = if self.input.is_empty() {
            None
        } else {
            Some(parse(&self.input))
        };
    }

    /// Record the current line, or quit on the exit word
    fn submit(&mut self) {
        if self.config.is_exit(&self.input) {
            self.should_quit = true;
            return;
        }

        // An empty submission is still an attempt
        let result = parse(&self.input);
        self.status_message = match &result {
            Ok(outcome) => format!(
                "Parsed {} ({} symbols)",
                outcome.tree.to_infix(),
                outcome.symbols.len()
            ),
            Err(err) => format!("Error: {}", err),
        };
        self.result = Some(result);

        if !self.input.is_empty() && self.history.last() != Some(&self.input) {
            self.history.push(self.input.clone());
        }
        self.history_index = None;
    }

    fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            Some(i) => i.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.load_history(index);
    }

    fn history_next(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => self.load_history(i + 1),
            Some(_) => {
                self.history_index = None;
                self.input.clear();
                self.reparse();
            }
            None => {}
        }
    }

    fn load_history(&mut self, index: usize) {
        self.history_index = Some(index);
        self.input = self.history[index].clone();
        self.reparse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_reparses() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "1+");
        assert!(matches!(
            app.result,
            Some(Err(ParseError::UnexpectedEndOfInput { position: 2 }))
        ));

        type_str(&mut app, "2");
        let outcome = app.result.as_ref().unwrap().as_ref().unwrap();
        assert_eq!(outcome.tree.to_infix(), "(1 + 2)");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_exit_word_quits() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "Exit");
        press(&mut app, KeyCode::Enter);
        assert!(app.should_quit);
    }

    #[test]
    fn test_history_recall() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "1*2");
        press(&mut app, KeyCode::Enter);
        app.input.clear();
        type_str(&mut app, "3");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "3");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "1*2");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "3");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "");
        assert_eq!(app.history_index, None);
    }

    #[test]
    fn test_empty_submission_skips_history() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert!(matches!(
            app.result,
            Some(Err(ParseError::UnexpectedEndOfInput { position: 0 }))
        ));
        assert_eq!(app.history, vec!["5".to_string()]);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "5");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Symbols);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
    }
}
