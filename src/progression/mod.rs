//! Player progression: the persisted record and the store that owns it.

pub mod store;
pub mod types;

pub use store::ProgressionStore;
pub use types::PlayerRecord;
