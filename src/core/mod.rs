pub mod config;
pub mod constants;
pub mod error;
pub mod progression;

pub use config::{ConfigOverrides, GameConfig};
pub use error::{FocusError, Result};
pub use progression::LevelCurve;
