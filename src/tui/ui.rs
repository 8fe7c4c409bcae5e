//! Stateless UI rendering for the river crossing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use strictly_river::{Bank, Entity, Puzzle};

use super::app::App;
use super::input::entity_key;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(9), // River
            Constraint::Length(3), // Status
            Constraint::Min(4),    // History
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly River - The Farmer's Crossing")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_river(frame, chunks[1], app.puzzle());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_history(frame, chunks[3], app.puzzle());

    let mut help = String::from("1-6 board/unboard  c/Enter cross  r reset  q quit");
    if app.solution_unlocked() {
        help.push_str("  s show solution");
    }
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_river(frame: &mut Frame, area: Rect, puzzle: &Puzzle) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    draw_bank(frame, cols[0], puzzle, Bank::Left);
    draw_boat(frame, cols[1], puzzle);
    draw_bank(frame, cols[2], puzzle, Bank::Right);
}

fn entity_line(entity: Entity) -> Line<'static> {
    let style = if entity == Entity::Farmer {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!("[{}] ", entity_key(entity)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(entity.label(), style),
    ])
}

fn draw_bank(frame: &mut Frame, area: Rect, puzzle: &Puzzle, bank: Bank) {
    let report = puzzle.evaluate_bank(bank);
    let border = if report.is_safe() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = puzzle
        .state()
        .occupants(bank)
        .iter()
        .map(entity_line)
        .collect::<Vec<_>>();

    let block = Block::default()
        .title(format!(" {} bank ", bank))
        .title_bottom(Line::from(format!(" {} ", report.status())).alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_style(border);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_boat(frame: &mut Frame, area: Rect, puzzle: &Puzzle) {
    let state = puzzle.state();
    let mut lines = vec![Line::from("~~~~~~~~~~~~~~~~~~~~")];
    lines.extend(state.passengers().iter().map(entity_line));
    if state.passengers().is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let alignment = match state.boat() {
        Bank::Left => Alignment::Left,
        Bank::Right => Alignment::Right,
    };

    let block = Block::default()
        .title(" boat ")
        .title_alignment(alignment)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    frame.render_widget(
        Paragraph::new(lines).alignment(alignment).block(block),
        area,
    );
}

fn draw_history(frame: &mut Frame, area: Rect, puzzle: &Puzzle) {
    let items = puzzle
        .log()
        .newest_first()
        .map(|record| ListItem::new(record.to_string()))
        .collect::<Vec<_>>();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" History - {} ", puzzle.outcome()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}
