//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::PuzzleView;
use crate::output::formatters::{attempt_hearts, score_line, spaced_letters};
use crate::session::Phase;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    match app.session.state().phase() {
        Phase::Welcome => render_welcome(f, app),
        Phase::AwaitingAnswer | Phase::RoundOver => render_game(f, app),
    }
}

fn render_welcome<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Menu
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, "\u{2728} SPELLSPROUT - Spelling Practice \u{2728}", chunks[0]);

    let menu = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Pick a game:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("    1.  \u{1f3a7} Spelling Practice  - listen and type the word"),
        Line::from("    2.  \u{1f3b2} Unscramble the Word - put the letters in order"),
        Line::from("    3.  \u{1f3af} Fill in the Blanks  - complete the missing letters"),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Word set: "),
            Span::styled(
                app.session.active_set().name().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " ({} words) - press 's' to switch",
                app.session.active_set().len()
            )),
        ]),
    ];

    let paragraph = Paragraph::new(menu).block(
        Block::default()
            .title(" Welcome ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status_line(f, "1/2/3: Play | s: Word Set | q: Quit", chunks[3]);
}

fn render_game<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Puzzle + info
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let title = app
        .current_plan
        .as_ref()
        .map_or("Spellsprout", |plan| plan.mode.title());
    render_header(f, title, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Puzzle
            Constraint::Percentage(40), // Score + messages
        ])
        .split(chunks[1]);

    render_puzzle(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);

    let help = if app.session.state().phase() == Phase::RoundOver {
        "Next word is on its way... | Esc: Menu | q: Quit"
    } else {
        "Enter: Answer | Tab: Hear Again | Esc: Menu"
    };
    render_status_line(f, help, chunks[3]);
}

fn render_header(f: &mut Frame, title: &str, area: Rect) {
    let header = Paragraph::new(title)
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

fn render_puzzle<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = if let Some(plan) = &app.current_plan {
        let puzzle_line = match &plan.view {
            PuzzleView::Listen => Line::from(Span::styled(
                "\u{1f442} Listen and Type".to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            PuzzleView::Scrambled(text) => Line::from(Span::styled(
                spaced_letters(text),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            PuzzleView::Blanks(text) => Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        };

        let hint_line = match plan.view {
            PuzzleView::Listen => {
                Line::from("Type the word you hear. Press Tab to hear it again.")
            }
            _ => Line::from(format!("Hint: {}", plan.hint)),
        };

        vec![
            Line::from(""),
            puzzle_line.alignment(Alignment::Center),
            Line::from(""),
            hint_line.alignment(Alignment::Center),
        ]
    } else {
        vec![Line::from("")]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Your Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let state = app.session.state();
    let score = vec![
        Line::from(score_line(state.score(), state.total_rounds())),
        Line::from(vec![
            Span::raw("Tries: "),
            Span::styled(
                attempt_hearts(state.attempts()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];
    let score_panel = Paragraph::new(score).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(score_panel, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
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

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, color) = if app.session.state().phase() == Phase::RoundOver {
        (" Get ready... ", Color::Green)
    } else {
        (" Type your answer ", Color::Yellow)
    };

    let shown = spaced_letters(&app.input_buffer.to_uppercase());
    let input = Paragraph::new(shown)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status_line(f: &mut Frame, help: &str, area: Rect) {
    let help_widget = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}
