//! The full match-list pipeline: filter, split by state, order each section, concatenate.

use crate::logic::filtering::filter_matches;
use crate::logic::ordering::{compare_ongoing, finished_order};
use crate::logic::round_robin::order_created;
use crate::models::{FilterOptions, GroupIndex, MatchRecord, MatchState};
use serde::Serialize;

/// Match totals per display section.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PartitionCounts {
    pub ongoing: usize,
    pub created: usize,
    pub finished: usize,
}

/// The filtered matches split into ordered display sections.
#[derive(Clone, Debug, Default)]
pub struct OrderedMatches<'a> {
    pub ongoing: Vec<&'a MatchRecord>,
    pub created: Vec<&'a MatchRecord>,
    pub finished: Vec<&'a MatchRecord>,
}

impl<'a> OrderedMatches<'a> {
    pub fn counts(&self) -> PartitionCounts {
        PartitionCounts {
            ongoing: self.ongoing.len(),
            created: self.created.len(),
            finished: self.finished.len(),
        }
    }

    /// Display sequence: ongoing, then upcoming, then finished.
    pub fn concat(self) -> Vec<&'a MatchRecord> {
        let mut all = self.ongoing;
        all.extend(self.created);
        all.extend(self.finished);
        all
    }
}

/// Filter and order matches, keeping the sections separate.
///
/// Never fails and never touches `matches`; unknown groups, bad table labels and missing
/// timestamps fall back to neutral values.
pub fn partition<'a>(
    matches: &'a [MatchRecord],
    filters: &FilterOptions,
    groups: &GroupIndex,
) -> OrderedMatches<'a> {
    let mut sections = filter_matches(matches, filters, groups).into_iter().fold(
        OrderedMatches::default(),
        |mut acc, m| {
            match m.state {
                MatchState::Ongoing => acc.ongoing.push(m),
                MatchState::Created => acc.created.push(m),
                MatchState::Finished => acc.finished.push(m),
            }
            acc
        },
    );

    sections.ongoing.sort_by(|a, b| compare_ongoing(a, b));
    sections.finished = finished_order(std::mem::take(&mut sections.finished));
    sections.created = order_created(std::mem::take(&mut sections.created), groups);

    let counts = sections.counts();
    log::debug!(
        "Ordered {} of {} matches ({} ongoing, {} created, {} finished)",
        counts.ongoing + counts.created + counts.finished,
        matches.len(),
        counts.ongoing,
        counts.created,
        counts.finished
    );
    sections
}

/// Filter and order matches into the display sequence.
pub fn process<'a>(
    matches: &'a [MatchRecord],
    filters: &FilterOptions,
    groups: &GroupIndex,
) -> Vec<&'a MatchRecord> {
    partition(matches, filters, groups).concat()
}
