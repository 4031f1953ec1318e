//! TUI rendering with ratatui

use super::app::{App, Focus, MessageStyle};
use crate::core::{LetterState, MAX_CONSTRAINTS};
use crate::solver::Suggestion;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Suggestions listed beside the board
const LISTED_SUGGESTIONS: usize = 10;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Board and suggestions
            Constraint::Length(3),  // Search space gauge
            Constraint::Length(7),  // Messages
            Constraint::Length(1),  // Key help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_suggestions(f, app, main_chunks[1]);
    render_search_space(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_help(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE PROVER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tile_color(state: LetterState) -> Color {
    match state {
        LetterState::Absent => Color::DarkGray,
        LetterState::Present => Color::Yellow,
        LetterState::Exact => Color::Green,
    }
}

fn tile(letter: char, background: Color, selected: bool) -> Span<'static> {
    let mut style = Style::default()
        .fg(Color::White)
        .bg(background)
        .add_modifier(Modifier::BOLD);
    if selected {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_CONSTRAINTS + 1);

    for (index, row) in app.rows.iter().enumerate() {
        let focused = app.focus == Focus::Row(index);
        let mut spans = vec![Span::raw(if focused { "▶ " } else { "  " })];
        for (position, (&letter, &state)) in row
            .guess
            .chars()
            .iter()
            .zip(row.pattern.states())
            .enumerate()
        {
            spans.push(tile(
                char::from(letter),
                tile_color(state),
                focused && position == app.cursor,
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if app.rows.len() < MAX_CONSTRAINTS {
        let focused = app.focus == Focus::Draft;
        let mut spans = vec![Span::raw(if focused { "▶ " } else { "  " })];
        let draft: Vec<char> = app.draft.chars().collect();
        for position in 0..5 {
            let letter = draft.get(position).copied().unwrap_or('_');
            spans.push(tile(letter, Color::Black, focused && position == draft.len()));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let title = format!(
        " Board | {} of {MAX_CONSTRAINTS} turns left ",
        app.turns_left()
    );
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn suggestion_line(rank: usize, suggestion: &Suggestion) -> Line<'static> {
    let word_style = if suggestion.in_candidates {
        Style::default().fg(Color::Green)
    } else if suggestion.in_answers {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::raw(format!("{rank:>2}. ")),
        Span::styled(suggestion.word.text().to_uppercase(), word_style),
        Span::styled(
            format!("  {:>7.2}  {:>4}", suggestion.expected_remaining, suggestion.worst_bucket),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if suggestion.safe {
        spans.push(Span::styled(
            "  safe",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let result = &app.solver;
    let mut lines = Vec::new();

    match &result.recommended {
        Some(recommended) => lines.push(Line::from(vec![
            Span::raw("Recommended: "),
            Span::styled(
                recommended.word.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(if recommended.safe { "  (proven win)" } else { "" }),
        ])),
        None => lines.push(Line::from("No recommendation")),
    }
    lines.push(Line::from(Span::styled(
        "     guess  expected  worst",
        Style::default().fg(Color::DarkGray),
    )));
    for (rank, suggestion) in result.suggestions.iter().take(LISTED_SUGGESTIONS).enumerate() {
        lines.push(suggestion_line(rank + 1, suggestion));
    }

    let status = if app.is_solving() { "solving…" } else { "ready" };
    let title = format!(" Suggestions | {} | {status} ", result.mode);
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

/// Percentage of the answer list eliminated so far
fn eliminated_percent(remaining: usize, total: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    let kept = remaining.min(total) as f64 / total as f64;
    ((1.0 - kept) * 100.0).round() as u16
}

fn render_search_space(f: &mut Frame, app: &App, area: Rect) {
    let total = app.corpus.answers().len();
    let gauge = Gauge::default()
        .block(Block::default().title(" Search Space ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_percent(app.candidate_count, total))
        .label(format!("{} of {total} candidates remain", app.candidate_count));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: commit | Space/0-2: tile | ←→: tile | ↑↓: row | Del: delete row | Tab: use pick | Ctrl-N: new | Esc: quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elimination_gauge() {
        assert_eq!(eliminated_percent(100, 100), 0);
        assert_eq!(eliminated_percent(25, 100), 75);
        assert_eq!(eliminated_percent(0, 100), 100);
        assert_eq!(eliminated_percent(5, 0), 0);
    }

    #[test]
    fn tile_colors_follow_state() {
        assert_eq!(tile_color(LetterState::Exact), Color::Green);
        assert_eq!(tile_color(LetterState::Present), Color::Yellow);
        assert_eq!(tile_color(LetterState::Absent), Color::DarkGray);
    }
}
