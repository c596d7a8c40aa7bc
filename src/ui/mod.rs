mod main_scene;
pub mod reset_confirm;
pub mod screen;
mod title_scene;

use focus_quest::utils::persistence::KeyValueStore;
use focus_quest::view::Scene;
use focus_quest::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use screen::ScreenModel;

/// Smallest terminal the scenes lay out in.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 16;

/// Draws whichever scene is current, plus any overlay.
pub fn draw_ui<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, screen: &ScreenModel) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let warning = Paragraph::new(Span::styled(
            format!("Terminal too small ({}x{})", size.width, size.height),
            Style::default().fg(Color::Red),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(warning, size);
        return;
    }

    // Version line along the bottom edge
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    match app.scene() {
        Scene::Title => title_scene::draw_title_scene(
            frame,
            chunks[0],
            app.store().record(),
            app.config().focus_duration_seconds,
            app.notice(),
        ),
        Scene::Main => main_scene::draw_main_scene(frame, chunks[0], screen),
    }

    let footer = Paragraph::new(Span::styled(
        focus_quest::utils::build_info::version_line(),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(footer, chunks[1]);

    if app.confirming_reset() {
        reset_confirm::draw_reset_confirm(frame, app.store().record());
    }
}
