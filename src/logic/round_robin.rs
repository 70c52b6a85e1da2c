//! Upcoming-match ordering for round-robin groups: spread pools so no pool plays twice in a row.

use crate::logic::ordering::timetable_order;
use crate::models::{GroupIndex, MatchRecord, MatchType};

/// A round-robin match in a round-robin style group.
pub fn is_round_robin_match(m: &MatchRecord, groups: &GroupIndex) -> bool {
    m.kind == MatchType::RoundRobin && groups.is_round_robin_group(m.group_id)
}

/// Order upcoming (created) matches.
///
/// Round-robin matches are interleaved across pools and placed first; the rest follow in
/// timetable order. With no round-robin matches this is plain timetable order.
pub fn order_created<'a>(created: Vec<&'a MatchRecord>, groups: &GroupIndex) -> Vec<&'a MatchRecord> {
    let (round_robin, others): (Vec<_>, Vec<_>) = created
        .into_iter()
        .partition(|m| is_round_robin_match(m, groups));

    if round_robin.is_empty() {
        return timetable_order(others, groups);
    }

    let mut ordered = interleave_pools(round_robin);
    ordered.extend(timetable_order(others, groups));
    ordered
}

/// Take one match per pool per pass until every pool is drained.
///
/// Pools are visited in order of first appearance; each pool is sorted by match id.
pub fn interleave_pools(matches: Vec<&MatchRecord>) -> Vec<&MatchRecord> {
    let mut pools = group_by_pool(matches);
    for pool in &mut pools {
        pool.sort_by(|a, b| a.id.cmp(&b.id));
    }

    let longest = pools.iter().map(Vec::len).max().unwrap_or(0);
    (0..longest)
        .flat_map(|pass| pools.iter().filter_map(move |pool| pool.get(pass).copied()))
        .collect()
}

fn group_by_pool(matches: Vec<&MatchRecord>) -> Vec<Vec<&MatchRecord>> {
    let (_, pools) = matches.into_iter().fold(
        (Vec::<&str>::new(), Vec::<Vec<&MatchRecord>>::new()),
        |(mut keys, mut pools), m| {
            let key = m.pool_key();
            match keys.iter().position(|k| *k == key) {
                Some(i) => pools[i].push(m),
                None => {
                    keys.push(key);
                    pools.push(vec![m]);
                }
            }
            (keys, pools)
        },
    );
    pools
}
