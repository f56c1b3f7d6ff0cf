//! TUI rendering with ratatui
//!
//! Layout for the word game interface.

use super::app::{App, MessageStyle};
use crate::output::formatters::{length_badge, list_position_color};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Score a gauge full bar represents
const GAUGE_TARGET_SCORE: usize = 50;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let root = app.game.session().root().text().to_uppercase();
    let header = Paragraph::new(format!("🔤 WORD SCRAMBLE — {root}"))
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

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.session().used_words();
    let total = used.len();

    let items: Vec<ListItem> = if total == 0 {
        vec![ListItem::new("No words found yet — start typing!")
            .style(Style::default().fg(Color::DarkGray))]
    } else {
        used.iter()
            .enumerate()
            .map(|(i, word)| {
                // Shade through the spectrum from top to bottom
                let (r, g, b) = list_position_color(i, total);
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", length_badge(word.len())),
                        Style::default().fg(Color::Rgb(r, g, b)),
                    ),
                    Span::raw(word.text().to_uppercase()),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Found Words ({total}) "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Score gauge
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.game.session().score();
    let percent = ((score * 100) / GAUGE_TARGET_SCORE).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!("{score} points"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let games_text = format!("Games: {}", app.stats.games_played);
    let games = Paragraph::new(games_text).alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let words_text = format!("Words found: {}", app.stats.total_words_found);
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let best_text = format!("Best score: {}", app.stats.best_score);
    let best = Paragraph::new(best_text).alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
