//! View layer: the main-scene controller, the display surface it renders
//! through, and scene navigation.

pub mod controller;
pub mod navigation;
pub mod surface;

pub use controller::{completion_banner, MainController};
pub use navigation::{go_to_main, go_to_title, Navigator, Scene, SceneRouter};
pub use surface::{Button, ButtonStates, DisplaySurface, SliderField, TextField};
