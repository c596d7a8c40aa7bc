//! Integration test: scene flow through key presses
//!
//! Drives `App` with mapped keys the way the terminal loop does: title to
//! main and back, a full session, and the reset-data confirmation.

use crossterm::event::KeyCode;
use focus_quest::input::{map_key, InputAction};
use focus_quest::{App, GameConfig, LogKind, MemoryStore, Scene, TICK_INTERVAL_MS};
use focus_quest::{Button, DisplaySurface};
use focus_quest::view::{SliderField, TextField};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

const TICK: f64 = TICK_INTERVAL_MS as f64 / 1000.0;

#[derive(Default)]
struct TextSurface {
    texts: HashMap<TextField, String>,
    renders: usize,
}

impl DisplaySurface for TextSurface {
    fn set_text(&mut self, field: TextField, text: &str) {
        if field == TextField::Timer {
            self.renders += 1;
        }
        self.texts.insert(field, text.to_string());
    }
    fn set_slider(&mut self, _slider: SliderField, _value: f64) {}
    fn set_enabled(&mut self, _button: Button, _enabled: bool) {}
    fn scroll_to_end(&mut self, _field: TextField) {}
}

fn new_app(duration: f64) -> App<MemoryStore> {
    let config = GameConfig {
        focus_duration_seconds: duration,
        battle_interval_seconds: 1.0,
        ..GameConfig::default()
    };
    App::new(config, MemoryStore::new()).unwrap()
}

/// Maps and applies one key, returning whether anything handled it.
fn press(app: &mut App<MemoryStore>, code: KeyCode) -> bool {
    match map_key(app.scene(), app.confirming_reset(), code) {
        Some(action) => app.apply(action),
        None => false,
    }
}

fn run_seconds(app: &mut App<MemoryStore>, rng: &mut ChaCha8Rng, seconds: f64) {
    let ticks = (seconds / TICK).round() as usize;
    for _ in 0..ticks {
        app.tick(TICK, rng);
    }
}

#[test]
fn test_starts_on_title() {
    let app = new_app(60.0);
    assert_eq!(app.scene(), Scene::Title);
    assert!(app.main().is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig {
        exp_multiplier: 1.0,
        ..GameConfig::default()
    };
    assert!(App::new(config, MemoryStore::new()).is_err());
}

#[test]
fn test_full_session_from_title() {
    let mut app = new_app(5.0);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert!(press(&mut app, KeyCode::Enter));
    assert_eq!(app.scene(), Scene::Main);
    assert!(press(&mut app, KeyCode::Char('s')));
    run_seconds(&mut app, &mut rng, 6.0);

    assert_eq!(app.store().total_focus_sessions(), 1);
    assert!(app.store().gold() > 0);
    let main = app.main().unwrap();
    assert!(main.timer().is_completed());
    assert_eq!(
        main.battle().log().last().map(|e| e.kind),
        Some(LogKind::Banner)
    );

    // Starting again runs a second full session
    assert!(press(&mut app, KeyCode::Char(' ')));
    run_seconds(&mut app, &mut rng, 6.0);
    assert_eq!(app.store().total_focus_sessions(), 2);
}

#[test]
fn test_disabled_buttons_ignored() {
    let mut app = new_app(60.0);
    press(&mut app, KeyCode::Enter);
    assert!(!press(&mut app, KeyCode::Char('p')));
    assert!(!press(&mut app, KeyCode::Char('r')));
    assert!(press(&mut app, KeyCode::Char('s')));
    assert!(!press(&mut app, KeyCode::Char('s')));
    assert!(press(&mut app, KeyCode::Char('p')));
    assert!(press(&mut app, KeyCode::Char('r')));
}

#[test]
fn test_title_round_trip_starts_fresh_session() {
    let mut app = new_app(60.0);
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));
    run_seconds(&mut app, &mut rng, 3.5);
    let gold = app.store().gold();
    assert!(gold > 0);

    assert!(press(&mut app, KeyCode::Char('t')));
    assert_eq!(app.scene(), Scene::Title);
    assert!(app.main().is_none());
    // Nothing runs on the title scene
    run_seconds(&mut app, &mut rng, 5.0);
    assert_eq!(app.store().gold(), gold);

    press(&mut app, KeyCode::Enter);
    let main = app.main().unwrap();
    assert_eq!(main.timer().remaining(), 60.0);
    assert!(main.battle().log().is_empty());
    assert!(!main.battle().is_active());
}

#[test]
fn test_data_reset_needs_confirmation() {
    let mut app = new_app(60.0);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));
    run_seconds(&mut app, &mut rng, 12.5);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.scene(), Scene::Title);
    assert!(app.store().experience() > 0);

    // Declining keeps progress
    assert!(press(&mut app, KeyCode::Char('x')));
    assert!(app.confirming_reset());
    assert!(press(&mut app, KeyCode::Char('n')));
    assert!(!app.confirming_reset());
    assert!(app.store().experience() > 0);

    // Other keys do nothing while the dialog is open
    press(&mut app, KeyCode::Char('x'));
    assert!(!press(&mut app, KeyCode::Enter));
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.scene(), Scene::Title);
    assert!(!app.should_quit());

    assert!(press(&mut app, KeyCode::Char('y')));
    assert_eq!(app.store().experience(), 0);
    assert_eq!(app.store().level(), 1);
    assert_eq!(app.notice(), Some("Player data reset."));
}

#[test]
fn test_actions_outside_their_scene_ignored() {
    let mut app = new_app(60.0);
    assert!(!app.apply(InputAction::Start));
    assert!(!app.apply(InputAction::GoToTitle));
    assert!(!app.apply(InputAction::ConfirmDataReset));
    press(&mut app, KeyCode::Enter);
    assert!(!app.apply(InputAction::RequestDataReset));
    assert!(!app.apply(InputAction::GoToMain));
}

#[test]
fn test_quit_from_either_scene() {
    let mut app = new_app(60.0);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = new_app(60.0);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_render_main_only_when_changed() {
    let mut app = new_app(60.0);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut surface = TextSurface::default();

    assert!(!app.render_main(&mut surface));
    press(&mut app, KeyCode::Enter);
    assert!(app.render_main(&mut surface));
    assert_eq!(surface.texts[&TextField::Timer], "01:00");
    assert_eq!(surface.texts[&TextField::Level], "Lv. 1");
    assert!(!app.render_main(&mut surface));

    press(&mut app, KeyCode::Char('s'));
    run_seconds(&mut app, &mut rng, 1.5);
    assert!(app.render_main(&mut surface));
    assert_eq!(surface.texts[&TextField::Timer], "00:58");
    assert_eq!(surface.texts[&TextField::Gold], "Gold: 5");
    assert_eq!(surface.renders, 2);
}
