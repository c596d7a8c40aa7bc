use focus_quest::progression::PlayerRecord;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the player-data reset confirmation as an overlay
pub fn draw_reset_confirm(frame: &mut Frame, record: &PlayerRecord) {
    let size = frame.size();

    let dialog_width = 44.min(size.width.saturating_sub(4));
    let dialog_height = 13.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let title = Line::from(vec![Span::styled(
        " Reset Player Data ",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )]);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This will erase:",
            Style::default().fg(Color::Red),
        )),
        Line::from(format!("  - Level {}", record.level)),
        Line::from(format!("  - {} EXP", record.experience)),
        Line::from(format!("  - {} Gold", record.gold)),
        Line::from(format!("  - {} focus sessions", record.total_focus_sessions)),
        Line::from(""),
        Line::from("The hero starts over at level 1."),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "[Y] Yes, reset",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[N] Cancel",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, dialog_area);
}
