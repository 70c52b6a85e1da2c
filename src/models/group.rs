//! Tournament groups (classes/tables) and the lookup index used while ordering matches.

use crate::models::filter::ActiveGroups;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Identifier of a tournament group (also called a tournament table).
pub type GroupId = i64;

/// Competition format of a group.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    RoundRobin,
    RoundRobinFullPlacement,
    ChampionsLeague,
    Dynamic,
    #[default]
    #[serde(other)]
    Other,
}

impl GroupType {
    /// Formats whose `roundrobin` matches are interleaved across pools.
    pub fn is_round_robin(self) -> bool {
        matches!(
            self,
            GroupType::RoundRobin
                | GroupType::RoundRobinFullPlacement
                | GroupType::ChampionsLeague
                | GroupType::Dynamic
        )
    }
}

/// A group as delivered by the tournament API.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    pub id: GroupId,
    /// Matches follow a fixed timetable instead of bracket progression.
    #[serde(default)]
    pub time_table: bool,
    #[serde(rename = "type", default)]
    pub kind: GroupType,
    /// Sub-group ids of a multi-stage format; aliases of this group when filtering.
    #[serde(default)]
    pub stages: Vec<GroupId>,
}

impl GroupDescriptor {
    pub fn new(id: GroupId, kind: GroupType) -> Self {
        Self {
            id,
            kind,
            ..Self::default()
        }
    }

    pub fn with_time_table(mut self) -> Self {
        self.time_table = true;
        self
    }

    pub fn with_stages(mut self, stages: impl IntoIterator<Item = GroupId>) -> Self {
        self.stages = stages.into_iter().collect();
        self
    }
}

/// Group descriptors keyed by id. Unknown ids behave as plain, non-timetabled groups.
#[derive(Clone, Debug, Default)]
pub struct GroupIndex {
    groups: HashMap<GroupId, GroupDescriptor>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: GroupId) -> Option<&GroupDescriptor> {
        self.groups.get(&id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn is_time_table(&self, id: GroupId) -> bool {
        self.get(id).is_some_and(|g| g.time_table)
    }

    pub fn is_round_robin_group(&self, id: GroupId) -> bool {
        self.get(id).is_some_and(|g| g.kind.is_round_robin())
    }

    /// Selected ids plus the stage ids of each selected group (one level deep).
    pub fn expand(&self, active: &ActiveGroups) -> HashSet<GroupId> {
        active.ids().iter().fold(HashSet::new(), |mut allowed, &id| {
            allowed.insert(id);
            if let Some(group) = self.get(id) {
                allowed.extend(group.stages.iter().copied());
            }
            allowed
        })
    }
}

impl FromIterator<GroupDescriptor> for GroupIndex {
    fn from_iter<I: IntoIterator<Item = GroupDescriptor>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().map(|g| (g.id, g)).collect(),
        }
    }
}
