//! Battle simulator: flavor-text fights on a fixed interval that pay out
//! experience and gold.

pub mod logic;
pub mod types;

pub use logic::{BattleOutcome, BattleSimulator};
pub use types::{BattleLog, BattleLogEntry, BattleMessages, LogKind};
