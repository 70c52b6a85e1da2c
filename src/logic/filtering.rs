//! Narrowing the match list: state, active groups (with stage aliases), filled slots, and name search.

use crate::models::{FilterOptions, GroupIndex, MatchRecord};

/// Keep the matches that pass every filter, in input order.
///
/// 1. State filter (skipped for `StateFilter::All`).
/// 2. Group filter: selected ids plus their stage ids (only when groups are selected).
/// 3. Both participant slots filled.
/// 4. Participant name contains the search text, case-insensitive (only when the search is not blank).
pub fn filter_matches<'a>(
    matches: &'a [MatchRecord],
    filters: &FilterOptions,
    groups: &GroupIndex,
) -> Vec<&'a MatchRecord> {
    let allowed_groups = filters.active_groups.as_ref().map(|a| groups.expand(a));
    let needle = filters.search_needle();

    matches
        .iter()
        .filter(|m| filters.states.allows(m.state))
        .filter(|m| allowed_groups.as_ref().map_or(true, |ids| ids.contains(&m.group_id)))
        .filter(|m| m.is_valid())
        .filter(|m| needle.as_deref().map_or(true, |n| m.name_contains(n)))
        .collect()
}
