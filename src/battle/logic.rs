//! Interval-driven battle loop.
//!
//! While active, the simulator accumulates tick time and fights one battle
//! each time a full interval has passed. Stopping discards the partial
//! interval, so a restart always waits a full interval before the next fight.

use super::types::{BattleLog, BattleMessages, LogKind};
use crate::core::config::GameConfig;
use crate::core::error::{FocusError, Result};
use crate::progression::ProgressionStore;
use crate::utils::persistence::KeyValueStore;
use rand::Rng;

/// What one battle granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub exp_gained: u64,
    pub gold_gained: u64,
    /// Level reached, if this battle's experience caused a level-up.
    pub new_level: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct BattleSimulator {
    interval: f64,
    exp_per_battle: u64,
    gold_per_battle: u64,
    messages: BattleMessages,
    log: BattleLog,
    active: bool,
    elapsed: f64,
}

impl BattleSimulator {
    pub fn new(
        interval_seconds: f64,
        exp_per_battle: u64,
        gold_per_battle: u64,
        log_capacity: usize,
        messages: BattleMessages,
    ) -> Result<Self> {
        if !interval_seconds.is_finite() || interval_seconds <= 0.0 {
            return Err(FocusError::invalid_config(
                "battle_interval_seconds",
                format!("must be a positive number of seconds, got {}", interval_seconds),
            ));
        }
        Ok(Self {
            interval: interval_seconds,
            exp_per_battle,
            gold_per_battle,
            messages,
            log: BattleLog::new(log_capacity),
            active: false,
            elapsed: 0.0,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(
            config.battle_interval_seconds,
            config.exp_per_battle,
            config.gold_per_battle,
            config.battle_log_capacity,
            config.messages.clone(),
        )
    }

    /// Begins fighting. Returns false if already active.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.elapsed = 0.0;
        tracing::debug!("battle loop started");
        true
    }

    /// Cancels the pending battle. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.elapsed = 0.0;
        tracing::debug!("battle loop stopped");
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Seconds until the next battle, if active.
    pub fn time_until_next(&self) -> Option<f64> {
        self.active.then(|| (self.interval - self.elapsed).max(0.0))
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Appends an announcement line outside the battle cycle.
    pub fn push_banner(&mut self, message: impl Into<String>) {
        self.log.push(LogKind::Banner, message);
    }

    /// Advances the interval clock, fighting every battle that came due.
    pub fn tick<S: KeyValueStore, R: Rng>(
        &mut self,
        delta_seconds: f64,
        store: &mut ProgressionStore<S>,
        rng: &mut R,
    ) -> Vec<BattleOutcome> {
        let mut outcomes = Vec::new();
        if !self.active || delta_seconds.is_nan() || delta_seconds <= 0.0 {
            return outcomes;
        }

        self.elapsed += delta_seconds;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            outcomes.push(self.perform_battle(store, rng));
        }
        outcomes
    }

    /// Fights one battle: flavor lines, rewards, and a level-up line when
    /// this battle's experience raised the level.
    pub fn perform_battle<S: KeyValueStore, R: Rng>(
        &mut self,
        store: &mut ProgressionStore<S>,
        rng: &mut R,
    ) -> BattleOutcome {
        self.log.push(LogKind::Attack, self.messages.pick_attack(rng));
        self.log.push(LogKind::Victory, self.messages.pick_victory(rng));

        let level_before = store.level();
        store.add_experience(self.exp_per_battle);
        store.add_gold(self.gold_per_battle);

        let new_level = (store.level() > level_before).then(|| store.level());
        if let Some(level) = new_level {
            let line = self.messages.pick_level_up(rng);
            self.log
                .push(LogKind::LevelUp, format!("{} Reached level {}!", line, level));
        }

        self.log
            .push(LogKind::Experience, format!("EXP +{}", self.exp_per_battle));
        self.log
            .push(LogKind::Gold, format!("Gold +{}", self.gold_per_battle));
        self.log.push(LogKind::Separator, "");

        BattleOutcome {
            exp_gained: self.exp_per_battle,
            gold_gained: self.gold_per_battle,
            new_level,
        }
    }
}
