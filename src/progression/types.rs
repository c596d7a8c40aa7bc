use serde::{Deserialize, Serialize};

/// Persistent player progress. Field names on disk are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    pub level: u32,
    pub experience: u64,
    pub gold: u64,
    pub total_focus_sessions: u64,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            gold: 0,
            total_focus_sessions: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = PlayerRecord::default();
        assert_eq!(record.level, 1);
        assert_eq!(record.experience, 0);
        assert_eq!(record.gold, 0);
        assert_eq!(record.total_focus_sessions, 0);
    }

    #[test]
    fn test_persisted_field_names() {
        let record = PlayerRecord {
            level: 3,
            experience: 160,
            gold: 40,
            total_focus_sessions: 2,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["level"], 3);
        assert_eq!(json["experience"], 160);
        assert_eq!(json["gold"], 40);
        assert_eq!(json["totalFocusSessions"], 2);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let record: PlayerRecord = serde_json::from_str(r#"{"gold": 12}"#).unwrap();
        assert_eq!(record.level, 1);
        assert_eq!(record.gold, 12);
    }
}
