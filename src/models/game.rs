//! Match record, participants, and match state/type tags.

use crate::models::group::GroupId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match (compared lexicographically).
pub type MatchId = String;

/// Pool key used when neither participant carries a round-robin group.
pub const DEFAULT_POOL: &str = "default";

/// Lifecycle state of a match as reported by the API.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    Created,
    Ongoing,
    Finished,
}

impl MatchState {
    pub const ALL: [MatchState; 3] = [MatchState::Created, MatchState::Ongoing, MatchState::Finished];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchState::Created => "created",
            MatchState::Ongoing => "ongoing",
            MatchState::Finished => "finished",
        }
    }
}

/// Bracket side or format a match belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Winner,
    Loser,
    Bracket,
    #[serde(rename = "roundrobin")]
    RoundRobin,
    #[default]
    #[serde(other)]
    Other,
}

impl MatchType {
    /// Tiebreak rank for bracket ordering: winner side, then loser side, then the rest.
    pub fn priority(self) -> u8 {
        match self {
            MatchType::Winner => 1,
            MatchType::Loser => 2,
            _ => 3,
        }
    }
}

/// One side of a match. An empty `id` means the slot is not filled yet.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Round-robin pool the participant was drawn into, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group_id: None,
        }
    }

    /// Same participant drawn into the given pool.
    pub fn in_pool(mut self, pool: impl Into<String>) -> Self {
        self.group_id = Some(pool.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    fn pool(&self) -> Option<&str> {
        self.group_id.as_deref().filter(|g| !g.is_empty())
    }
}

/// A single match as delivered by the tournament API.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub state: MatchState,
    #[serde(rename = "type", default)]
    pub kind: MatchType,
    #[serde(default)]
    pub round: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_loser_bracket: Option<String>,
    /// Table (court) label, usually numeric.
    #[serde(default)]
    pub table: String,
    #[serde(rename = "start_date", default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(rename = "finish_date", default)]
    pub finish_time: Option<DateTime<Utc>>,
    #[serde(rename = "tournament_table_id")]
    pub group_id: GroupId,
    #[serde(default)]
    pub p1: Participant,
    #[serde(default)]
    pub p2: Participant,
}

impl MatchRecord {
    /// Create a match in the given state with empty optional fields.
    pub fn new(
        id: impl Into<MatchId>,
        state: MatchState,
        group_id: GroupId,
        p1: Participant,
        p2: Participant,
    ) -> Self {
        Self {
            id: id.into(),
            state,
            kind: MatchType::Other,
            round: 0,
            bracket: None,
            next_loser_bracket: None,
            table: String::new(),
            start_time: None,
            finish_time: None,
            group_id,
            p1,
            p2,
        }
    }

    /// Both participant slots are filled.
    pub fn is_valid(&self) -> bool {
        !self.p1.is_empty() && !self.p2.is_empty()
    }

    /// Start time, with the upstream zero time treated as absent.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        present(self.start_time)
    }

    /// Finish time, with the upstream zero time treated as absent.
    pub fn finish(&self) -> Option<DateTime<Utc>> {
        present(self.finish_time)
    }

    /// Round-robin pool: first non-empty participant group, else [`DEFAULT_POOL`].
    pub fn pool_key(&self) -> &str {
        self.p1
            .pool()
            .or_else(|| self.p2.pool())
            .unwrap_or(DEFAULT_POOL)
    }

    /// Case-insensitive substring match on either participant's name. `needle` must be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        contains_folded(&self.p1.name, needle) || contains_folded(&self.p2.name, needle)
    }
}

/// `haystack` contains the lowercase `needle`, ignoring case. ASCII names are compared in place.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle.is_ascii() {
        haystack
            .as_bytes()
            .windows(needle.len())
            .any(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
    } else {
        haystack.to_lowercase().contains(needle)
    }
}

fn present(ts: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    ts.filter(|t| t.timestamp() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pool_key_prefers_first_participant() {
        let m = MatchRecord::new(
            "m1",
            MatchState::Created,
            1,
            Participant::new("a", "A").in_pool("g1"),
            Participant::new("b", "B").in_pool("g2"),
        );
        assert_eq!(m.pool_key(), "g1");
    }

    #[test]
    fn pool_key_falls_back_to_default() {
        let m = MatchRecord::new(
            "m1",
            MatchState::Created,
            1,
            Participant::new("a", "A").in_pool(""),
            Participant::new("b", "B"),
        );
        assert_eq!(m.pool_key(), DEFAULT_POOL);
    }

    #[test]
    fn name_search_ignores_case() {
        let m = MatchRecord::new(
            "m1",
            MatchState::Created,
            1,
            Participant::new("a", "John SMITH"),
            Participant::new("b", "Jüri ÕUN"),
        );
        assert!(m.name_contains("smith"));
        assert!(m.name_contains("õun"));
        assert!(m.name_contains("jüri"));
        assert!(!m.name_contains("smithson"));
        assert!(contains_folded("Al", ""));
        assert!(!contains_folded("Al", "alice"));
    }

    #[test]
    fn zero_time_is_absent() {
        let mut m = MatchRecord::new("m1", MatchState::Finished, 1, Participant::default(), Participant::default());
        m.finish_time = Some(Utc.timestamp_opt(0, 0).unwrap());
        assert_eq!(m.finish(), None);
        m.finish_time = Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        assert!(m.finish().is_some());
    }

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "id": "m7",
            "state": "ongoing",
            "type": "double_elimination",
            "round": 2,
            "table": "4",
            "start_date": "2024-05-01T10:00:00Z",
            "tournament_table_id": 5,
            "p1": { "id": "a", "name": "Alice", "group_id": "A" },
            "p2": { "id": "", "name": "" }
        }"#;
        let m: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.kind, MatchType::Other);
        assert_eq!(m.group_id, 5);
        assert_eq!(m.pool_key(), "A");
        assert!(!m.is_valid());
        assert!(m.finish_time.is_none());
    }
}
