//! Focus Quest - a terminal focus timer with an idle RPG riding along.
//!
//! While a focus session counts down, a hero fights on a fixed interval and
//! earns experience and gold that persist between runs. The game logic lives
//! here; the terminal front-end is in the binary.

pub mod app;
pub mod battle;
pub mod core;
pub mod input;
pub mod progression;
pub mod timer;
pub mod utils;
pub mod view;

// UI module is not exposed as it's tightly coupled to the terminal

pub use app::App;
pub use battle::{BattleLog, BattleMessages, BattleSimulator, LogKind};
pub use self::core::constants::*;
pub use self::core::{ConfigOverrides, FocusError, GameConfig, LevelCurve, Result};
pub use progression::{PlayerRecord, ProgressionStore};
pub use timer::{CountdownTimer, TimerEvent, TimerPhase};
pub use utils::{JsonFileStore, KeyValueStore, MemoryStore};
pub use view::{Button, ButtonStates, DisplaySurface, MainController, Scene};
