use focus_quest::progression::PlayerRecord;
use focus_quest::timer::format_mm_ss;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BANNER: [&str; 3] = [
    "╔═╗╔═╗╔═╗╦ ╦╔═╗   ╔═╗ ╦ ╦╔═╗╔═╗╔╦╗",
    "╠╣ ║ ║║  ║ ║╚═╗   ║═╬╗║ ║║╣ ╚═╗ ║ ",
    "╚  ╚═╝╚═╝╚═╝╚═╝   ╚═╝╚╚═╝╚═╝╚═╝ ╩ ",
];

/// Draws the title scene: banner, saved progress, and key hints.
pub fn draw_title_scene(
    frame: &mut Frame,
    area: Rect,
    record: &PlayerRecord,
    focus_seconds: f64,
    notice: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Min(6),    // Progress
            Constraint::Length(1), // Notice
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let banner: Vec<Line> = BANNER
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        chunks[0],
    );

    draw_progress(frame, chunks[1], record, focus_seconds);

    if let Some(notice) = notice {
        let notice = Paragraph::new(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(notice, chunks[2]);
    }

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::Cyan)),
        Span::raw("Start   "),
        Span::styled("[X] ", Style::default().fg(Color::Cyan)),
        Span::raw("Reset Data   "),
        Span::styled("[Q] ", Style::default().fg(Color::Cyan)),
        Span::raw("Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[3]);
}

fn draw_progress(frame: &mut Frame, area: Rect, record: &PlayerRecord, focus_seconds: f64) {
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Level     ", label),
            Span::styled(
                record.level.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("EXP       ", label),
            Span::styled(record.experience.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Gold      ", label),
            Span::styled(record.gold.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Sessions  ", label),
            Span::styled(
                record.total_focus_sessions.to_string(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Focus for {}. Your hero fights while you work.",
                format_mm_ss(focus_seconds)
            ),
            Style::default().fg(Color::White),
        )),
    ];

    let progress = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Your Hero "))
        .alignment(Alignment::Center);
    frame.render_widget(progress, area);
}
