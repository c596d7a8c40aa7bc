use super::screen::ScreenModel;
use focus_quest::battle::LogKind;
use focus_quest::view::Button;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the focus screen: timer and stats on top, battle log below,
/// controls at the bottom.
pub fn draw_main_scene(frame: &mut Frame, area: Rect, screen: &ScreenModel) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Timer + stats
            Constraint::Min(5),    // Battle log
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[0]);

    draw_timer_panel(frame, top[0], screen);
    draw_stats_panel(frame, top[1], screen);
    draw_battle_log(frame, v_chunks[1], screen);
    draw_controls(frame, v_chunks[2], screen);
}

fn draw_timer_panel(frame: &mut Frame, area: Rect, screen: &ScreenModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Focus ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2), // Time
            Constraint::Length(1), // Progress
            Constraint::Min(0),
        ])
        .split(inner);

    let state = if screen.pause_enabled {
        ("FOCUSING", Color::Green)
    } else if screen.reset_enabled {
        ("PAUSED", Color::Yellow)
    } else {
        ("READY", Color::DarkGray)
    };

    let time = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            screen.timer_text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(state.0, Style::default().fg(state.1)),
    ])])
    .alignment(Alignment::Center);
    frame.render_widget(time, rows[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(screen.timer_progress)
        .label(format!("{:.0}%", screen.timer_progress * 100.0));
    frame.render_widget(gauge, rows[2]);
}

fn draw_stats_panel(frame: &mut Frame, area: Rect, screen: &ScreenModel) {
    let block = Block::default().borders(Borders::ALL).title(" Hero ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Level + gold
            Constraint::Length(1), // Exp bar
            Constraint::Length(1), // Sessions
            Constraint::Min(0),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            screen.level_text.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(screen.gold_text.clone(), Style::default().fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[0]);

    let exp_bar = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio(screen.exp_progress)
        .label(screen.exp_text.clone());
    frame.render_widget(exp_bar, rows[1]);

    let sessions = Paragraph::new(Span::styled(
        screen.sessions_text.clone(),
        Style::default().fg(Color::Magenta),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(sessions, rows[2]);
}

fn log_color(kind: LogKind) -> Color {
    match kind {
        LogKind::Attack => Color::White,
        LogKind::Victory => Color::Red,
        LogKind::LevelUp => Color::Yellow,
        LogKind::Experience => Color::Green,
        LogKind::Gold => Color::Yellow,
        LogKind::Separator => Color::Reset,
        LogKind::Banner => Color::Cyan,
    }
}

/// Draws the battle log, scrolled so the newest line sits at the bottom.
fn draw_battle_log(frame: &mut Frame, area: Rect, screen: &ScreenModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Battle ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = screen
        .log_lines
        .iter()
        .map(|(kind, message)| {
            let style = match kind {
                LogKind::LevelUp | LogKind::Banner => Style::default()
                    .fg(log_color(*kind))
                    .add_modifier(Modifier::BOLD),
                _ => Style::default().fg(log_color(*kind)),
            };
            Line::from(Span::styled(message.clone(), style))
        })
        .collect();

    let offset = screen.log_scroll_offset(inner.height as usize);
    let log = Paragraph::new(lines).scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(log, inner);
}

fn button_span(screen: &ScreenModel, button: Button, key: &str) -> Vec<Span<'static>> {
    let (key_style, label_style) = if screen.is_enabled(button) {
        (
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    vec![
        Span::styled(format!("[{}] ", key), key_style),
        Span::styled(button.label(), label_style),
        Span::raw("   "),
    ]
}

fn draw_controls(frame: &mut Frame, area: Rect, screen: &ScreenModel) {
    let mut spans = Vec::new();
    spans.extend(button_span(screen, Button::Start, "S"));
    spans.extend(button_span(screen, Button::Pause, "P"));
    spans.extend(button_span(screen, Button::Reset, "R"));
    spans.push(Span::styled("[T] ", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw("Title   "));
    spans.push(Span::styled("[Q] ", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw("Quit"));

    let controls = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Controls "))
        .alignment(Alignment::Center);
    frame.render_widget(controls, area);
}
