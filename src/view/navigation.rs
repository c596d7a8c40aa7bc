/// The two destinations of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    Title,
    Main,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Title => "title",
            Scene::Main => "main",
        }
    }
}

/// Receives scene changes. The core only requests them; the host decides
/// what switching means.
pub trait Navigator {
    fn navigate(&mut self, destination: Scene);
}

/// Records the current scene and whether it changed since last checked.
#[derive(Debug, Default)]
pub struct SceneRouter {
    current: Scene,
    changed: bool,
}

impl SceneRouter {
    pub fn new(initial: Scene) -> Self {
        Self {
            current: initial,
            changed: false,
        }
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Returns true once after each navigation.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl Navigator for SceneRouter {
    fn navigate(&mut self, destination: Scene) {
        tracing::debug!(from = self.current.name(), to = destination.name(), "navigate");
        self.current = destination;
        self.changed = true;
    }
}

pub fn go_to_title<N: Navigator>(navigator: &mut N) {
    navigator.navigate(Scene::Title);
}

pub fn go_to_main<N: Navigator>(navigator: &mut N) {
    navigator.navigate(Scene::Main);
}
