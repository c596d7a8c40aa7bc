use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What a log line reports, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Attack,
    Victory,
    LevelUp,
    Experience,
    Gold,
    Separator,
    /// Session-level announcements such as focus completion.
    Banner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleLogEntry {
    pub kind: LogKind,
    pub message: String,
}

/// Bounded battle log; pushing past capacity drops the oldest line.
#[derive(Debug, Clone)]
pub struct BattleLog {
    entries: VecDeque<BattleLogEntry>,
    capacity: usize,
}

impl BattleLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, kind: LogKind, message: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(BattleLogEntry {
            kind,
            message: message.into(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &BattleLogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&BattleLogEntry> {
        self.entries.back()
    }

    /// All lines joined with newlines, oldest first.
    pub fn text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Flavor text tables the simulator draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleMessages {
    pub attack: Vec<String>,
    pub victory: Vec<String>,
    pub level_up: Vec<String>,
}

const DEFAULT_ATTACK: [&str; 4] = [
    "The hero attacks!",
    "The hero swings their sword!",
    "The hero casts a spell!",
    "The hero unleashes a special move!",
];

const DEFAULT_VICTORY: [&str; 4] = [
    "Defeated the enemy!",
    "Victory!",
    "Enemy destroyed!",
    "A flawless victory!",
];

const DEFAULT_LEVEL_UP: [&str; 3] = ["Level up!", "A new power awakens!", "Power up!"];

impl Default for BattleMessages {
    fn default() -> Self {
        fn owned(lines: &[&str]) -> Vec<String> {
            lines.iter().map(|s| s.to_string()).collect()
        }
        Self {
            attack: owned(&DEFAULT_ATTACK),
            victory: owned(&DEFAULT_VICTORY),
            level_up: owned(&DEFAULT_LEVEL_UP),
        }
    }
}

impl BattleMessages {
    pub fn pick_attack<R: Rng>(&self, rng: &mut R) -> String {
        pick(&self.attack, &DEFAULT_ATTACK, rng)
    }

    pub fn pick_victory<R: Rng>(&self, rng: &mut R) -> String {
        pick(&self.victory, &DEFAULT_VICTORY, rng)
    }

    pub fn pick_level_up<R: Rng>(&self, rng: &mut R) -> String {
        pick(&self.level_up, &DEFAULT_LEVEL_UP, rng)
    }
}

/// Chooses from `lines`, or from `fallback` when a config left a table empty.
fn pick<R: Rng>(lines: &[String], fallback: &[&str], rng: &mut R) -> String {
    match lines.choose(rng) {
        Some(line) => line.clone(),
        None => fallback.choose(rng).copied().unwrap_or_default().to_string(),
    }
}
