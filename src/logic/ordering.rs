//! Comparators for each display section: ongoing by table, finished by recency, upcoming by timetable.

use crate::models::{GroupIndex, MatchRecord};
use std::cmp::Ordering;

/// Integer value of a table label: optional sign and leading digits after trimming, else 0.
/// Values past the `i64` range saturate.
pub fn table_number(label: &str) -> i64 {
    let s = label.trim();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |n, d| {
            n.saturating_mul(10)
                .saturating_add(sign * i64::from(d - b'0'))
        })
}

/// Ongoing matches: numeric table label, then match id.
pub fn compare_ongoing(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    table_number(&a.table)
        .cmp(&table_number(&b.table))
        .then_with(|| a.id.cmp(&b.id))
}

/// Finished matches: most recently finished first. Equal when either finish time is missing.
pub fn compare_finished(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    match (a.finish(), b.finish()) {
        (Some(fa), Some(fb)) => fb.cmp(&fa),
        _ => Ordering::Equal,
    }
}

/// Order finished matches by [`compare_finished`] without relying on it being a total order.
///
/// Matches with no finish time keep their positions. The timestamped ones are sorted most
/// recent first (stable on equal times) into the remaining positions, so every pair is in
/// an order the comparator accepts.
pub fn finished_order<'a>(mut matches: Vec<&'a MatchRecord>) -> Vec<&'a MatchRecord> {
    let slots: Vec<usize> = (0..matches.len())
        .filter(|&i| matches[i].finish().is_some())
        .collect();
    let mut timed: Vec<&'a MatchRecord> = slots.iter().map(|&i| matches[i]).collect();
    timed.sort_by(|a, b| compare_finished(a, b));
    for (slot, m) in slots.into_iter().zip(timed) {
        matches[slot] = m;
    }
    matches
}

/// Upcoming matches.
///
/// Timetabled groups come first, ordered by start time (a missing start counts as the earliest).
/// Bracket groups follow, ordered by round, then winner side before loser side before anything
/// else, then match id.
pub fn compare_timetable(a: &MatchRecord, b: &MatchRecord, groups: &GroupIndex) -> Ordering {
    match (groups.is_time_table(a.group_id), groups.is_time_table(b.group_id)) {
        (true, true) => a.start().cmp(&b.start()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a
            .round
            .cmp(&b.round)
            .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
            .then_with(|| a.id.cmp(&b.id)),
    }
}

/// Stable single-pass sort with [`compare_timetable`].
pub fn timetable_order<'a>(mut matches: Vec<&'a MatchRecord>, groups: &GroupIndex) -> Vec<&'a MatchRecord> {
    matches.sort_by(|a, b| compare_timetable(a, b, groups));
    matches
}
