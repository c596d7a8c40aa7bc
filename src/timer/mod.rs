//! Focus countdown timer.

pub mod logic;
pub mod types;

pub use logic::{format_mm_ss, CountdownTimer};
pub use types::{TimerEvent, TimerPhase};
