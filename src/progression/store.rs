//! The progression store owns the player record and saves it after every
//! change. It is built once at startup and handed by `&mut` to whatever
//! needs to grant rewards.

use super::types::PlayerRecord;
use crate::core::config::GameConfig;
use crate::core::constants::{MAX_LEVEL, SAVE_KEY};
use crate::core::progression::LevelCurve;
use crate::utils::persistence::KeyValueStore;

pub struct ProgressionStore<S: KeyValueStore> {
    record: PlayerRecord,
    curve: LevelCurve,
    key: String,
    backend: S,
}

impl<S: KeyValueStore> ProgressionStore<S> {
    /// Loads the record stored under `key`, or starts fresh.
    ///
    /// Never fails: a missing key, unreadable file or malformed record all
    /// produce the default record.
    pub fn load(backend: S, curve: LevelCurve, key: impl Into<String>) -> Self {
        let key = key.into();
        let record = read_record(&backend, &key, &curve);
        Self {
            record,
            curve,
            key,
            backend,
        }
    }

    pub fn with_defaults(backend: S) -> Self {
        Self::load(backend, LevelCurve::default(), SAVE_KEY)
    }

    pub fn from_config(backend: S, config: &GameConfig) -> Self {
        Self::load(backend, config.level_curve(), config.save_key.clone())
    }

    pub fn record(&self) -> &PlayerRecord {
        &self.record
    }

    pub fn curve(&self) -> &LevelCurve {
        &self.curve
    }

    pub fn level(&self) -> u32 {
        self.record.level
    }

    pub fn experience(&self) -> u64 {
        self.record.experience
    }

    pub fn gold(&self) -> u64 {
        self.record.gold
    }

    pub fn total_focus_sessions(&self) -> u64 {
        self.record.total_focus_sessions
    }

    /// Cumulative experience needed for the next level.
    pub fn exp_required_for_next_level(&self) -> u64 {
        self.curve.threshold(self.record.level + 1)
    }

    /// Experience earned since reaching the current level.
    pub fn exp_progress(&self) -> u64 {
        self.curve
            .progress_in_level(self.record.level, self.record.experience)
    }

    /// Experience between the current level and the next.
    pub fn exp_span(&self) -> u64 {
        self.curve.level_span(self.record.level)
    }

    /// Fraction of the current level completed, in `[0, 1]`.
    pub fn level_progress(&self) -> f64 {
        let span = self.exp_span();
        if span == 0 {
            return 1.0;
        }
        (self.exp_progress() as f64 / span as f64).clamp(0.0, 1.0)
    }

    /// Adds experience and applies every level-up it pays for.
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u64) -> u32 {
        if amount == 0 {
            return 0;
        }
        self.record.experience = self.record.experience.saturating_add(amount);

        let mut gained = 0;
        while self.record.level < MAX_LEVEL
            && self.record.experience >= self.curve.threshold(self.record.level + 1)
        {
            self.record.level += 1;
            gained += 1;
            tracing::info!(level = self.record.level, "level up");
        }

        self.persist();
        gained
    }

    pub fn add_gold(&mut self, amount: u64) {
        if amount == 0 {
            return;
        }
        self.record.gold = self.record.gold.saturating_add(amount);
        self.persist();
    }

    pub fn add_focus_session(&mut self) {
        self.record.total_focus_sessions += 1;
        tracing::info!(
            total = self.record.total_focus_sessions,
            "focus session completed"
        );
        self.persist();
    }

    /// Wipes progress back to a fresh record and saves it.
    pub fn reset(&mut self) {
        self.record = PlayerRecord::default();
        self.persist();
        tracing::info!("player data reset");
    }

    /// Re-reads the record from the backend, discarding in-memory state.
    pub fn reload(&mut self) {
        self.record = read_record(&self.backend, &self.key, &self.curve);
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn persist(&mut self) {
        match self.backend.save(&self.key, &self.record) {
            Ok(()) => tracing::debug!(key = %self.key, "player data saved"),
            Err(e) => tracing::warn!(key = %self.key, error = %e, "failed to save player data"),
        }
    }
}

fn read_record<S: KeyValueStore>(backend: &S, key: &str, curve: &LevelCurve) -> PlayerRecord {
    let mut record = match backend.load::<PlayerRecord>(key) {
        Ok(Some(record)) => {
            tracing::info!(key, "loaded player data");
            record
        }
        Ok(None) => {
            tracing::info!(key, "no saved player data, starting fresh");
            PlayerRecord::default()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read player data, starting fresh");
            PlayerRecord::default()
        }
    };

    // The level is derived from experience; trust experience when they disagree.
    let level = curve.level_for_experience(record.experience);
    if record.level != level {
        tracing::warn!(
            stored = record.level,
            derived = level,
            "stored level does not match experience, correcting"
        );
        record.level = level;
    }
    record
}
