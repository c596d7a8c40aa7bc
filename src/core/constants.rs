// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;
pub const FOCUS_DURATION_SECONDS: f64 = 25.0 * 60.0;
pub const BATTLE_INTERVAL_SECONDS: f64 = 3.0;

// Battle rewards
pub const EXP_PER_BATTLE: u64 = 10;
pub const GOLD_PER_BATTLE: u64 = 5;

// Leveling curve: threshold(level) = round(BASE * MULTIPLIER^(level - 2))
pub const BASE_EXP_REQUIRED: u64 = 100;
pub const EXP_MULTIPLIER: f64 = 1.5;
pub const MAX_LEVEL: u32 = 999;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 50;

// Save system
pub const SAVE_KEY: &str = "PlayerData";
pub const SAVE_FILE_NAME: &str = "save.json";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "focus-quest.log";
pub const APP_DIR_NAME: &str = "focus-quest";
pub const LOG_FILTER_ENV: &str = "FOCUS_QUEST_LOG";
