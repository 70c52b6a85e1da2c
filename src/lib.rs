//! Table tennis match list: models and ordering logic for the results and schedule pages.

pub mod logic;
pub mod models;

pub use logic::{
    compare_finished, compare_ongoing, compare_timetable, filter_matches, finished_order,
    interleave_pools,
    is_round_robin_match, order_created, partition, process, table_number, timetable_order,
    OrderedMatches, PartitionCounts,
};
pub use models::{
    ActiveGroups, FilterError, FilterOptions, GroupDescriptor, GroupId, GroupIndex, GroupType,
    MatchId, MatchRecord, MatchState, MatchType, Participant, StateFilter, DEFAULT_POOL,
};
