//! Top-level game state: the progression store, the current scene, and the
//! main-scene controller while that scene is showing.

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::input::InputAction;
use crate::progression::ProgressionStore;
use crate::utils::persistence::KeyValueStore;
use crate::view::{go_to_main, Button, DisplaySurface, MainController, Scene, SceneRouter};
use rand::Rng;

pub struct App<S: KeyValueStore> {
    config: GameConfig,
    store: ProgressionStore<S>,
    router: SceneRouter,
    main: Option<MainController>,
    confirming_reset: bool,
    notice: Option<String>,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Validates `config`, loads the player record and opens on the title scene.
    pub fn new(config: GameConfig, backend: S) -> Result<Self> {
        config.validate()?;
        // Fail at startup rather than on the first trip to the main scene.
        MainController::new(&config)?;
        let store = ProgressionStore::from_config(backend, &config);
        Ok(Self {
            config,
            store,
            router: SceneRouter::new(Scene::Title),
            main: None,
            confirming_reset: false,
            notice: None,
            should_quit: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> Scene {
        self.router.current()
    }

    pub fn store(&self) -> &ProgressionStore<S> {
        &self.store
    }

    pub fn main(&self) -> Option<&MainController> {
        self.main.as_ref()
    }

    pub fn confirming_reset(&self) -> bool {
        self.confirming_reset
    }

    /// One-line status shown on the title scene, e.g. after a data reset.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an action. Returns false when it does not apply to the
    /// current scene or names a disabled button.
    pub fn apply(&mut self, action: InputAction) -> bool {
        let handled = match (self.router.current(), action) {
            (_, InputAction::Quit) if !self.confirming_reset => {
                self.should_quit = true;
                true
            }
            (Scene::Title, InputAction::ConfirmDataReset) if self.confirming_reset => {
                self.store.reset();
                self.confirming_reset = false;
                self.notice = Some("Player data reset.".to_string());
                true
            }
            (Scene::Title, InputAction::CancelDataReset) if self.confirming_reset => {
                self.confirming_reset = false;
                true
            }
            (_, _) if self.confirming_reset => false,
            (Scene::Title, InputAction::RequestDataReset) => {
                self.confirming_reset = true;
                self.notice = None;
                true
            }
            (Scene::Title, InputAction::GoToMain) => {
                go_to_main(&mut self.router);
                true
            }
            (Scene::Main, InputAction::Start) => self.press(Button::Start),
            (Scene::Main, InputAction::Pause) => self.press(Button::Pause),
            (Scene::Main, InputAction::Reset) => self.press(Button::Reset),
            (Scene::Main, InputAction::GoToTitle) => {
                if let Some(main) = self.main.as_mut() {
                    main.go_to_title(&mut self.router);
                }
                true
            }
            _ => false,
        };

        if self.router.take_changed() {
            self.enter_scene();
        }
        handled
    }

    fn press(&mut self, button: Button) -> bool {
        match self.main.as_mut() {
            Some(main) => main.press(button, &mut self.store),
            None => false,
        }
    }

    /// Entering the main scene starts from a fresh timer and empty log;
    /// leaving it drops them.
    fn enter_scene(&mut self) {
        match self.router.current() {
            Scene::Main => match MainController::new(&self.config) {
                Ok(controller) => {
                    self.notice = None;
                    self.main = Some(controller);
                }
                Err(e) => {
                    tracing::error!(error = %e, "could not open main scene");
                    self.router = SceneRouter::new(Scene::Title);
                }
            },
            Scene::Title => {
                self.main = None;
            }
        }
        tracing::info!(scene = self.router.current().name(), "entered scene");
    }

    /// Advances the main scene, if showing.
    pub fn tick<R: Rng>(&mut self, delta_seconds: f64, rng: &mut R) {
        if let Some(main) = self.main.as_mut() {
            main.tick(delta_seconds, &mut self.store, rng);
        }
    }

    /// Renders the main scene into `surface` if it changed. Returns true if
    /// anything was rendered.
    pub fn render_main<D: DisplaySurface>(&mut self, surface: &mut D) -> bool {
        match self.main.as_mut() {
            Some(main) => main.render_if_dirty(&self.store, surface),
            None => false,
        }
    }
}
