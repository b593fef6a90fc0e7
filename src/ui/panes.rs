//! Stateless render functions for each pane
//!
//! - input line with a caret and error marker
//! - parse tree (indented pre-order walk)
//! - symbol table
//! - status bar with validity or error and keybindings

use crate::parser::{Node, ParseError, ParseOutcome, SymbolTable, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` to the content and return the visible window
fn visible_window<T>(items: Vec<T>, area: Rect, scroll_offset: &mut usize) -> Vec<T> {
    let total_items = items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect()
}

/// Render the input line. The character at the error position, if any, is
/// highlighted.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    error_position: Option<usize>,
) {
    let block = Block::default()
        .title(" Expression ")
        .borders(Borders::ALL)
        .border_style(border_style(true))
        .padding(Padding::new(1, 0, 0, 0));

    let mut spans: Vec<Span> = input
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let style = if Some(i) == error_position {
                Style::default()
                    .fg(Color::Black)
                    .bg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Span::styled(ch.to_string(), style)
        })
        .collect();

    // Error at end of input: highlight the caret cell instead
    let caret_style = if error_position == Some(input.chars().count()) {
        Style::default().bg(DEFAULT_THEME.error)
    } else {
        Style::default().bg(DEFAULT_THEME.fg)
    };
    spans.push(Span::styled(" ", caret_style));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the parse tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: Option<&Node>,
    indent: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Parse Tree ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(tree) = tree else {
        let paragraph = Paragraph::new("(no tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = tree
        .walk()
        .map(|(node, depth)| {
            let color = match node {
                Node::Number(_) => DEFAULT_THEME.number,
                Node::BinaryOp { .. } => DEFAULT_THEME.operator,
            };
            ListItem::new(Line::from(vec![
                Span::raw(" ".repeat(depth * indent)),
                Span::styled(node.value().to_string(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let list = List::new(visible_window(all_items, area, scroll_offset)).block(block);
    frame.render_widget(list, area);
}

/// Render the symbol table pane
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    symbols: Option<&SymbolTable>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Symbol Table ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let symbols = match symbols {
        Some(symbols) if !symbols.is_empty() => symbols,
        _ => {
            let paragraph = Paragraph::new("(empty)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = symbols
        .sorted()
        .into_iter()
        .map(|(lexeme, kind)| {
            let color = match kind {
                TokenKind::Number => DEFAULT_THEME.number,
                TokenKind::Operator => DEFAULT_THEME.operator,
            };
            ListItem::new(Line::from(vec![
                Span::styled(lexeme.to_string(), Style::default().fg(color)),
                Span::styled(" -> ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(kind.to_string(), Style::default().fg(DEFAULT_THEME.primary)),
            ]))
        })
        .collect();

    let list = List::new(visible_window(all_items, area, scroll_offset)).block(block);
    frame.render_widget(list, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    result: Option<&Result<ParseOutcome, ParseError>>,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let (badge, badge_color, detail) = match result {
        None => (" EMPTY ".to_string(), DEFAULT_THEME.comment, message.to_string()),
        Some(Ok(outcome)) => (
            format!(" ACCEPTED: {} ", outcome.valid),
            if outcome.valid {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.secondary
            },
            message.to_string(),
        ),
        Some(Err(err)) => (format!(" {} ", err.kind()), DEFAULT_THEME.error, err.to_string()),
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", detail),
            Style::default().bg(DEFAULT_THEME.status_bg).fg(DEFAULT_THEME.fg),
        ),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    let keys = Span::styled(
        " Enter:submit  ↑↓:history  Tab:focus  PgUp/PgDn:scroll  Esc:quit ",
        Style::default().bg(DEFAULT_THEME.status_bg).fg(DEFAULT_THEME.comment),
    );
    let right_paragraph = Paragraph::new(Line::from(keys))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(left_paragraph, layout[0]);
    frame.render_widget(right_paragraph, layout[1]);
}
