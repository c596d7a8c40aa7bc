//! Game configuration: built-in defaults, an optional JSON file, and
//! command-line overrides layered on top.

use super::constants::*;
use super::error::{FocusError, Result};
use super::progression::LevelCurve;
use crate::battle::BattleMessages;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub focus_duration_seconds: f64,
    pub battle_interval_seconds: f64,
    pub exp_per_battle: u64,
    pub gold_per_battle: u64,
    pub base_exp_required: u64,
    pub exp_multiplier: f64,
    pub battle_log_capacity: usize,
    pub save_key: String,
    pub messages: BattleMessages,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            focus_duration_seconds: FOCUS_DURATION_SECONDS,
            battle_interval_seconds: BATTLE_INTERVAL_SECONDS,
            exp_per_battle: EXP_PER_BATTLE,
            gold_per_battle: GOLD_PER_BATTLE,
            base_exp_required: BASE_EXP_REQUIRED,
            exp_multiplier: EXP_MULTIPLIER,
            battle_log_capacity: BATTLE_LOG_CAPACITY,
            save_key: SAVE_KEY.to_string(),
            messages: BattleMessages::default(),
        }
    }
}

/// Values supplied on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub focus_duration_seconds: Option<f64>,
    pub battle_interval_seconds: Option<f64>,
    pub exp_per_battle: Option<u64>,
    pub gold_per_battle: Option<u64>,
    pub base_exp_required: Option<u64>,
    pub exp_multiplier: Option<f64>,
    pub battle_log_capacity: Option<usize>,
}

impl GameConfig {
    /// Loads a config file, falling back to defaults when the file is absent.
    ///
    /// A file that exists but cannot be parsed is an error: a typo in a
    /// duration should stop the game rather than silently run a default.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)?;
        tracing::info!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(v) = overrides.focus_duration_seconds {
            self.focus_duration_seconds = v;
        }
        if let Some(v) = overrides.battle_interval_seconds {
            self.battle_interval_seconds = v;
        }
        if let Some(v) = overrides.exp_per_battle {
            self.exp_per_battle = v;
        }
        if let Some(v) = overrides.gold_per_battle {
            self.gold_per_battle = v;
        }
        if let Some(v) = overrides.base_exp_required {
            self.base_exp_required = v;
        }
        if let Some(v) = overrides.exp_multiplier {
            self.exp_multiplier = v;
        }
        if let Some(v) = overrides.battle_log_capacity {
            self.battle_log_capacity = v;
        }
        self
    }

    /// Rejects values the timer, battle loop or level curve cannot run with.
    pub fn validate(&self) -> Result<()> {
        positive_seconds("focus_duration_seconds", self.focus_duration_seconds)?;
        positive_seconds("battle_interval_seconds", self.battle_interval_seconds)?;
        if self.exp_per_battle == 0 {
            return Err(FocusError::invalid_config("exp_per_battle", "must be positive"));
        }
        if self.gold_per_battle == 0 {
            return Err(FocusError::invalid_config("gold_per_battle", "must be positive"));
        }
        if self.base_exp_required == 0 {
            return Err(FocusError::invalid_config(
                "base_exp_required",
                "must be positive",
            ));
        }
        // A multiplier of 1 or less never raises the bar, so level-up would never stop.
        if !self.exp_multiplier.is_finite() || self.exp_multiplier <= 1.0 {
            return Err(FocusError::invalid_config(
                "exp_multiplier",
                format!("must be greater than 1.0, got {}", self.exp_multiplier),
            ));
        }
        if self.battle_log_capacity == 0 {
            return Err(FocusError::invalid_config(
                "battle_log_capacity",
                "must be positive",
            ));
        }
        if self.save_key.trim().is_empty() {
            return Err(FocusError::invalid_config("save_key", "must not be empty"));
        }
        Ok(())
    }

    pub fn level_curve(&self) -> LevelCurve {
        LevelCurve::new(self.base_exp_required, self.exp_multiplier)
    }
}

fn positive_seconds(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FocusError::invalid_config(
            field,
            format!("must be a positive number of seconds, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.focus_duration_seconds, 1500.0);
        assert_eq!(config.battle_interval_seconds, 3.0);
        assert_eq!(config.exp_per_battle, 10);
        assert_eq!(config.gold_per_battle, 5);
        assert_eq!(config.battle_log_capacity, 50);
        assert_eq!(config.save_key, "PlayerData");
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let mut config = GameConfig::default();
        config.focus_duration_seconds = 0.0;
        assert!(matches!(
            config.validate(),
            Err(FocusError::InvalidConfig {
                field: "focus_duration_seconds",
                ..
            })
        ));

        config.focus_duration_seconds = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flat_multiplier_rejected() {
        let mut config = GameConfig::default();
        config.exp_multiplier = 1.0;
        assert!(config.validate().is_err());
        config.exp_multiplier = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = GameConfig {
            battle_log_capacity: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"focus_duration_seconds": 300.0}"#).unwrap();
        assert_eq!(config.focus_duration_seconds, 300.0);
        assert_eq!(config.exp_per_battle, EXP_PER_BATTLE);
        assert_eq!(config.messages, BattleMessages::default());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = ConfigOverrides {
            focus_duration_seconds: Some(60.0),
            gold_per_battle: Some(7),
            ..ConfigOverrides::default()
        };
        let config = GameConfig::default().with_overrides(&overrides);
        assert_eq!(config.focus_duration_seconds, 60.0);
        assert_eq!(config.gold_per_battle, 7);
        assert_eq!(config.exp_per_battle, EXP_PER_BATTLE);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = std::env::temp_dir().join("focus-quest-no-such-config-12345.json");
        let config = GameConfig::load(&path).expect("missing file is not an error");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let path = std::env::temp_dir().join(format!(
            "focus-quest-corrupt-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(FocusError::Json(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_level_curve_from_config() {
        let config = GameConfig {
            base_exp_required: 40,
            exp_multiplier: 2.0,
            ..GameConfig::default()
        };
        assert_eq!(config.level_curve().threshold(3), 80);
    }
}
