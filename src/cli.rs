//! Command-line arguments.

use clap::{Parser, Subcommand};
use focus_quest::ConfigOverrides;
use std::path::PathBuf;

/// Focus Quest - a focus timer with an idle RPG riding along
#[derive(Parser, Debug)]
#[command(name = "focus-quest")]
#[command(about = "Focus timer with an idle RPG riding along", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and build information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Config file (defaults to config.json in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding save.json and the log file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep progress in memory only; nothing is written to the save file
    #[arg(long)]
    pub ephemeral: bool,

    /// Focus session length in minutes
    #[arg(long, conflicts_with = "focus_seconds")]
    pub focus_minutes: Option<f64>,

    /// Focus session length in seconds
    #[arg(long)]
    pub focus_seconds: Option<f64>,

    /// Seconds between battles
    #[arg(long)]
    pub battle_interval: Option<f64>,

    /// Experience granted per battle
    #[arg(long)]
    pub exp_per_battle: Option<u64>,

    /// Gold granted per battle
    #[arg(long)]
    pub gold_per_battle: Option<u64>,

    /// Experience needed to reach level 2
    #[arg(long)]
    pub base_exp: Option<u64>,

    /// Growth factor of the experience curve
    #[arg(long)]
    pub exp_multiplier: Option<f64>,

    /// Maximum battle log lines kept
    #[arg(long)]
    pub log_capacity: Option<usize>,

    /// Subcommand (if not provided, starts the game)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show level, experience, gold and completed sessions
    Status,
    /// Reset player data to a fresh record
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            focus_duration_seconds: self
                .focus_seconds
                .or(self.focus_minutes.map(|m| m * 60.0)),
            battle_interval_seconds: self.battle_interval,
            exp_per_battle: self.exp_per_battle,
            gold_per_battle: self.gold_per_battle,
            base_exp_required: self.base_exp,
            exp_multiplier: self.exp_multiplier,
            battle_log_capacity: self.log_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_starts_game() {
        let cli = Cli::try_parse_from(["focus-quest"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.ephemeral);
        assert!(cli.overrides().focus_duration_seconds.is_none());
    }

    #[test]
    fn test_focus_minutes_converted() {
        let cli = Cli::try_parse_from(["focus-quest", "--focus-minutes", "5"]).unwrap();
        assert_eq!(cli.overrides().focus_duration_seconds, Some(300.0));
    }

    #[test]
    fn test_minutes_and_seconds_conflict() {
        let result =
            Cli::try_parse_from(["focus-quest", "--focus-minutes", "5", "--focus-seconds", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reset_subcommand() {
        let cli = Cli::try_parse_from(["focus-quest", "reset", "--yes"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Reset { yes: true })));
    }

    #[test]
    fn test_overrides_forwarded() {
        let cli = Cli::try_parse_from([
            "focus-quest",
            "--battle-interval",
            "1.5",
            "--gold-per-battle",
            "9",
            "--log-capacity",
            "20",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.battle_interval_seconds, Some(1.5));
        assert_eq!(overrides.gold_per_battle, Some(9));
        assert_eq!(overrides.battle_log_capacity, Some(20));
    }
}
