//! Match list logic: filtering, per-section ordering, round-robin interleaving.

mod filtering;
mod ordering;
mod pipeline;
mod round_robin;

pub use filtering::filter_matches;
pub use ordering::{
    compare_finished, compare_ongoing, compare_timetable, finished_order, table_number,
    timetable_order,
};
pub use pipeline::{partition, process, OrderedMatches, PartitionCounts};
pub use round_robin::{interleave_pools, is_round_robin_match, order_created};
