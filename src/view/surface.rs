//! The narrow interface the controller renders through. Any front-end that
//! can set text, move a slider, toggle a button and scroll a panel can host
//! the game.

use crate::battle::BattleLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Timer,
    Level,
    Experience,
    Gold,
    Sessions,
    BattleLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderField {
    TimerProgress,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Start,
    Pause,
    Reset,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::Start => "Start",
            Button::Pause => "Pause",
            Button::Reset => "Reset",
        }
    }
}

pub trait DisplaySurface {
    fn set_text(&mut self, field: TextField, text: &str);
    fn set_slider(&mut self, slider: SliderField, value: f64);
    fn set_enabled(&mut self, button: Button, enabled: bool);
    fn scroll_to_end(&mut self, field: TextField);

    /// Shows the battle log. Surfaces that can color lines by kind override
    /// this; the default renders plain text.
    fn set_battle_log(&mut self, log: &BattleLog) {
        self.set_text(TextField::BattleLog, &log.text());
    }
}

/// Which main-screen buttons accept presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
}

impl ButtonStates {
    pub fn from_flags(running: bool, paused: bool) -> Self {
        Self {
            start: !running || paused,
            pause: running && !paused,
            reset: running || paused,
        }
    }

    pub fn is_enabled(&self, button: Button) -> bool {
        match button {
            Button::Start => self.start,
            Button::Pause => self.pause,
            Button::Reset => self.reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_states_idle() {
        let states = ButtonStates::from_flags(false, false);
        assert!(states.start);
        assert!(!states.pause);
        assert!(!states.reset);
    }

    #[test]
    fn test_button_states_running() {
        let states = ButtonStates::from_flags(true, false);
        assert!(!states.start);
        assert!(states.pause);
        assert!(states.reset);
    }

    #[test]
    fn test_button_states_paused() {
        let states = ButtonStates::from_flags(true, true);
        assert!(states.start);
        assert!(!states.pause);
        assert!(states.reset);
        assert!(states.is_enabled(Button::Reset));
    }
}
