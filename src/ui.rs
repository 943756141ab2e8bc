//! Stateless screen rendering.

use crate::app::App;
use crate::input::KEY_HELP;
use crate::view::BoardView;
use noughts::{Mark, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title, board, status and key help panes.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Keys
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts and Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.view());

    let view = app.view();
    let status = Paragraph::new(view.status_line(&app.engine().level_string()))
        .style(status_style(view.outcome()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView) {
    let separator = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for column in 0..3 {
            if column > 0 {
                spans.push(Span::styled("│", separator));
            }
            spans.push(square_span(view.mark_at(column, row), row * 3 + column + 1));
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::styled("───┼───┼───", separator));
        }
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(board, center_rect(area, 15, 7));
}

/// Marks in bold colour; empty squares show their key in grey.
fn square_span(mark: Option<Mark>, square: usize) -> Span<'static> {
    match mark {
        Some(Mark::Cross) => Span::styled(
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::Nought) => Span::styled(
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            format!(" {} ", square),
            Style::default().fg(Color::DarkGray),
        ),
    }
}

fn status_style(outcome: Option<Outcome>) -> Style {
    match outcome {
        None => Style::default().fg(Color::Yellow),
        Some(Outcome::Winner(Mark::Cross)) => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        }
        Some(Outcome::Winner(Mark::Nought)) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        Some(Outcome::Draw) => Style::default().fg(Color::Magenta),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
