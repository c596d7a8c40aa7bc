//! Main-scene controller: routes button presses to the timer, bridges
//! timer events to the battle loop and the progression store, and renders
//! through a [`DisplaySurface`] only when something changed.

use super::navigation::{self, Navigator};
use super::surface::{Button, ButtonStates, DisplaySurface, SliderField, TextField};
use crate::battle::{BattleOutcome, BattleSimulator};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::progression::ProgressionStore;
use crate::timer::{CountdownTimer, TimerEvent};
use crate::utils::persistence::KeyValueStore;
use rand::Rng;

pub struct MainController {
    timer: CountdownTimer,
    battle: BattleSimulator,
    dirty: bool,
    shown_time: String,
}

impl MainController {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self::from_parts(
            CountdownTimer::new(config.focus_duration_seconds)?,
            BattleSimulator::from_config(config)?,
        ))
    }

    pub fn from_parts(timer: CountdownTimer, battle: BattleSimulator) -> Self {
        Self {
            shown_time: timer.formatted(),
            timer,
            battle,
            dirty: true,
        }
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn battle(&self) -> &BattleSimulator {
        &self.battle
    }

    pub fn buttons(&self) -> ButtonStates {
        ButtonStates::from_flags(self.timer.is_running(), self.timer.is_paused())
    }

    /// Handles a button press. Presses on disabled buttons are ignored and
    /// return false.
    pub fn press<S: KeyValueStore>(
        &mut self,
        button: Button,
        store: &mut ProgressionStore<S>,
    ) -> bool {
        if !self.buttons().is_enabled(button) {
            tracing::debug!(button = button.label(), "ignored press on disabled button");
            return false;
        }

        let event = match button {
            Button::Start => self.timer.start(),
            Button::Pause => self.timer.pause(),
            Button::Reset => Some(self.timer.reset()),
        };
        if let Some(event) = event {
            self.handle_timer_event(event, store);
        }
        self.dirty = true;
        true
    }

    /// One step of the host loop: countdown first, then any battles due.
    pub fn tick<S: KeyValueStore, R: Rng>(
        &mut self,
        delta_seconds: f64,
        store: &mut ProgressionStore<S>,
        rng: &mut R,
    ) -> Vec<BattleOutcome> {
        if let Some(event) = self.timer.tick(delta_seconds) {
            self.handle_timer_event(event, store);
            self.dirty = true;
        }

        let outcomes = self.battle.tick(delta_seconds, store, rng);
        if !outcomes.is_empty() {
            self.dirty = true;
        }

        let time = self.timer.formatted();
        if time != self.shown_time {
            self.shown_time = time;
            self.dirty = true;
        }
        outcomes
    }

    fn handle_timer_event<S: KeyValueStore>(
        &mut self,
        event: TimerEvent,
        store: &mut ProgressionStore<S>,
    ) {
        tracing::info!(?event, "timer event");
        match event {
            TimerEvent::Started | TimerEvent::Resumed => {
                self.battle.start();
            }
            TimerEvent::Paused => {
                self.battle.stop();
            }
            TimerEvent::Reset => {
                self.battle.stop();
                self.battle.clear();
            }
            TimerEvent::Completed => {
                self.battle.stop();
                store.add_focus_session();
                self.battle
                    .push_banner(completion_banner(self.timer.duration()));
            }
        }
    }

    /// Marks the view stale, e.g. after the store changed elsewhere.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    /// Pushes the full view state to `surface` and clears the dirty flag.
    pub fn render<S: KeyValueStore, D: DisplaySurface>(
        &mut self,
        store: &ProgressionStore<S>,
        surface: &mut D,
    ) {
        self.shown_time = self.timer.formatted();
        surface.set_text(TextField::Timer, &self.shown_time);
        surface.set_slider(SliderField::TimerProgress, self.timer.progress());

        surface.set_text(TextField::Level, &format!("Lv. {}", store.level()));
        surface.set_text(
            TextField::Experience,
            &format!("Exp: {}/{}", store.exp_progress(), store.exp_span()),
        );
        surface.set_slider(SliderField::Experience, store.level_progress());
        surface.set_text(TextField::Gold, &format!("Gold: {}", store.gold()));
        surface.set_text(
            TextField::Sessions,
            &format!("Sessions: {}", store.total_focus_sessions()),
        );

        surface.set_battle_log(self.battle.log());
        surface.scroll_to_end(TextField::BattleLog);

        let buttons = self.buttons();
        for button in [Button::Start, Button::Pause, Button::Reset] {
            surface.set_enabled(button, buttons.is_enabled(button));
        }

        self.dirty = false;
    }

    /// Renders only if something changed since the last render.
    pub fn render_if_dirty<S: KeyValueStore, D: DisplaySurface>(
        &mut self,
        store: &ProgressionStore<S>,
        surface: &mut D,
    ) -> bool {
        if !self.dirty {
            return false;
        }
        self.render(store, surface);
        true
    }

    /// Leaves the main scene. The battle loop stops with it.
    pub fn go_to_title<N: Navigator>(&mut self, navigator: &mut N) {
        self.battle.stop();
        navigation::go_to_title(navigator);
    }
}

/// "🎉 25 minute focus session complete!"
pub fn completion_banner(duration_seconds: f64) -> String {
    let seconds = duration_seconds.round() as u64;
    if seconds >= 60 && seconds % 60 == 0 {
        format!("🎉 {} minute focus session complete!", seconds / 60)
    } else {
        format!("🎉 {} second focus session complete!", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{BattleMessages, LogKind};
    use crate::utils::persistence::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingSurface {
        texts: HashMap<TextField, String>,
        sliders: HashMap<SliderField, f64>,
        enabled: HashMap<Button, bool>,
        scrolled: Vec<TextField>,
    }

    impl DisplaySurface for RecordingSurface {
        fn set_text(&mut self, field: TextField, text: &str) {
            self.texts.insert(field, text.to_string());
        }
        fn set_slider(&mut self, slider: SliderField, value: f64) {
            self.sliders.insert(slider, value);
        }
        fn set_enabled(&mut self, button: Button, enabled: bool) {
            self.enabled.insert(button, enabled);
        }
        fn scroll_to_end(&mut self, field: TextField) {
            self.scrolled.push(field);
        }
    }

    fn controller(duration: f64, interval: f64) -> MainController {
        MainController::from_parts(
            CountdownTimer::new(duration).unwrap(),
            BattleSimulator::new(interval, 10, 5, 50, BattleMessages::default()).unwrap(),
        )
    }

    fn store() -> ProgressionStore<MemoryStore> {
        ProgressionStore::with_defaults(MemoryStore::new())
    }

    #[test]
    fn test_start_bridges_to_battle() {
        let mut c = controller(60.0, 3.0);
        let mut s = store();
        assert!(c.press(Button::Start, &mut s));
        assert!(c.battle().is_active());
        assert!(c.timer().is_running());
    }

    #[test]
    fn test_pause_stops_battle_and_resume_restarts_it() {
        let mut c = controller(60.0, 3.0);
        let mut s = store();
        c.press(Button::Start, &mut s);
        assert!(c.press(Button::Pause, &mut s));
        assert!(!c.battle().is_active());

        assert!(c.press(Button::Start, &mut s));
        assert!(c.timer().is_running());
        assert!(!c.timer().is_paused());
        assert!(c.battle().is_active());
    }

    #[test]
    fn test_disabled_buttons_are_ignored() {
        let mut c = controller(60.0, 3.0);
        let mut s = store();
        assert!(!c.press(Button::Pause, &mut s));
        assert!(!c.press(Button::Reset, &mut s));
        c.press(Button::Start, &mut s);
        assert!(!c.press(Button::Start, &mut s));
    }

    #[test]
    fn test_reset_clears_log() {
        let mut c = controller(60.0, 1.0);
        let mut s = store();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        c.press(Button::Start, &mut s);
        c.tick(2.0, &mut s, &mut rng);
        assert!(!c.battle().log().is_empty());

        c.press(Button::Reset, &mut s);
        assert!(c.battle().log().is_empty());
        assert!(!c.battle().is_active());
        assert_eq!(c.timer().remaining(), 60.0);
    }

    #[test]
    fn test_completion_counts_session_and_shows_banner_once() {
        let mut c = controller(5.0, 100.0);
        let mut s = store();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        c.press(Button::Start, &mut s);
        for _ in 0..8 {
            c.tick(1.0, &mut s, &mut rng);
        }
        assert_eq!(s.total_focus_sessions(), 1);
        assert!(!c.battle().is_active());
        let banners = c
            .battle()
            .log()
            .entries()
            .filter(|e| e.kind == LogKind::Banner)
            .count();
        assert_eq!(banners, 1);
    }

    #[test]
    fn test_render_populates_surface() {
        let mut c = controller(1500.0, 3.0);
        let mut s = store();
        s.add_experience(120);
        s.add_gold(7);
        let mut surface = RecordingSurface::default();
        c.render(&s, &mut surface);

        assert_eq!(surface.texts[&TextField::Timer], "25:00");
        assert_eq!(surface.texts[&TextField::Level], "Lv. 2");
        assert_eq!(surface.texts[&TextField::Experience], "Exp: 20/50");
        assert_eq!(surface.texts[&TextField::Gold], "Gold: 7");
        assert_eq!(surface.texts[&TextField::Sessions], "Sessions: 0");
        assert_eq!(surface.sliders[&SliderField::TimerProgress], 0.0);
        assert!((surface.sliders[&SliderField::Experience] - 0.4).abs() < 1e-9);
        assert!(surface.enabled[&Button::Start]);
        assert!(!surface.enabled[&Button::Pause]);
        assert!(!surface.enabled[&Button::Reset]);
        assert_eq!(surface.scrolled, vec![TextField::BattleLog]);
    }

    #[test]
    fn test_render_only_when_dirty() {
        let mut c = controller(60.0, 30.0);
        let mut s = store();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut surface = RecordingSurface::default();
        assert!(c.render_if_dirty(&s, &mut surface));
        assert!(!c.render_if_dirty(&s, &mut surface));

        // Idle ticks change nothing
        c.tick(0.1, &mut s, &mut rng);
        assert!(!c.needs_render());

        c.press(Button::Start, &mut s);
        assert!(c.render_if_dirty(&s, &mut surface));

        // 60.0 -> 59.6 flips the display from 01:00 to 00:59
        c.tick(0.4, &mut s, &mut rng);
        assert!(c.render_if_dirty(&s, &mut surface));

        // 59.6 -> 59.2 stays on 00:59
        c.tick(0.4, &mut s, &mut rng);
        assert!(!c.needs_render());
        c.tick(0.7, &mut s, &mut rng);
        assert!(c.needs_render());
    }

    #[test]
    fn test_go_to_title_stops_battle() {
        use crate::view::navigation::{Scene, SceneRouter};
        let mut c = controller(60.0, 3.0);
        let mut s = store();
        let mut router = SceneRouter::new(Scene::Main);
        c.press(Button::Start, &mut s);
        c.go_to_title(&mut router);
        assert!(!c.battle().is_active());
        assert_eq!(router.current(), Scene::Title);
    }

    #[test]
    fn test_completion_banner_text() {
        assert_eq!(
            completion_banner(1500.0),
            "🎉 25 minute focus session complete!"
        );
        assert_eq!(completion_banner(5.0), "🎉 5 second focus session complete!");
        assert_eq!(completion_banner(90.0), "🎉 90 second focus session complete!");
    }
}
