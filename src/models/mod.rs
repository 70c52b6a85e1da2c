//! Data structures for the match list: matches, groups, filter criteria.

mod filter;
mod game;
mod group;

pub use filter::{ActiveGroups, FilterError, FilterOptions, StateFilter};
pub use game::{MatchId, MatchRecord, MatchState, MatchType, Participant, DEFAULT_POOL};
pub use group::{GroupDescriptor, GroupId, GroupIndex, GroupType};
