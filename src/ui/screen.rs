//! Terminal-side view model. The controller renders into it; the draw
//! functions read from it every frame.

use focus_quest::battle::{BattleLog, LogKind};
use focus_quest::view::{Button, DisplaySurface, SliderField, TextField};

#[derive(Debug, Clone, Default)]
pub struct ScreenModel {
    pub timer_text: String,
    pub timer_progress: f64,
    pub level_text: String,
    pub exp_text: String,
    pub exp_progress: f64,
    pub gold_text: String,
    pub sessions_text: String,
    pub log_lines: Vec<(LogKind, String)>,
    /// Keep the newest log line in view.
    pub follow_log: bool,
    pub start_enabled: bool,
    pub pause_enabled: bool,
    pub reset_enabled: bool,
}

impl ScreenModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, button: Button) -> bool {
        match button {
            Button::Start => self.start_enabled,
            Button::Pause => self.pause_enabled,
            Button::Reset => self.reset_enabled,
        }
    }

    /// First line to show so the newest lines fill a panel `height` tall.
    pub fn log_scroll_offset(&self, height: usize) -> usize {
        if self.follow_log {
            self.log_lines.len().saturating_sub(height)
        } else {
            0
        }
    }
}

impl DisplaySurface for ScreenModel {
    fn set_text(&mut self, field: TextField, text: &str) {
        let text = text.to_string();
        match field {
            TextField::Timer => self.timer_text = text,
            TextField::Level => self.level_text = text,
            TextField::Experience => self.exp_text = text,
            TextField::Gold => self.gold_text = text,
            TextField::Sessions => self.sessions_text = text,
            TextField::BattleLog => {
                self.log_lines = text
                    .lines()
                    .map(|line| (LogKind::Attack, line.to_string()))
                    .collect();
            }
        }
    }

    fn set_slider(&mut self, slider: SliderField, value: f64) {
        let value = value.clamp(0.0, 1.0);
        match slider {
            SliderField::TimerProgress => self.timer_progress = value,
            SliderField::Experience => self.exp_progress = value,
        }
    }

    fn set_enabled(&mut self, button: Button, enabled: bool) {
        match button {
            Button::Start => self.start_enabled = enabled,
            Button::Pause => self.pause_enabled = enabled,
            Button::Reset => self.reset_enabled = enabled,
        }
    }

    fn scroll_to_end(&mut self, field: TextField) {
        if field == TextField::BattleLog {
            self.follow_log = true;
        }
    }

    fn set_battle_log(&mut self, log: &BattleLog) {
        self.log_lines = log
            .entries()
            .map(|entry| (entry.kind, entry.message.clone()))
            .collect();
    }
}
