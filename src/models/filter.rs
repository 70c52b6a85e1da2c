//! Filter criteria for the match list (state, active groups, participant search).

use crate::models::game::MatchState;
use crate::models::group::GroupId;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Errors from turning raw query values into filters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FilterError {
    /// A state name other than `all`, `created`, `ongoing` or `finished`.
    UnknownState(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::UnknownState(s) => write!(f, "Unknown match state: {}", s),
        }
    }
}

impl std::error::Error for FilterError {}

/// Which match states to keep.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum StateFilter {
    #[default]
    All,
    Only(BTreeSet<MatchState>),
}

impl StateFilter {
    pub fn only(states: impl IntoIterator<Item = MatchState>) -> Self {
        StateFilter::Only(states.into_iter().collect())
    }

    pub fn allows(&self, state: MatchState) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(states) => states.contains(&state),
        }
    }
}

impl FromStr for MatchState {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchState::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FilterError::UnknownState(s.to_string()))
    }
}

/// `"all"` or an empty string keeps every state; otherwise a comma-separated list of states.
/// `"all"` anywhere in the list wins.
impl FromStr for StateFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        if tokens.is_empty() || tokens.iter().any(|t| t.eq_ignore_ascii_case("all")) {
            return Ok(StateFilter::All);
        }
        tokens
            .into_iter()
            .map(MatchState::from_str)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(StateFilter::Only)
    }
}

/// Explicitly selected group ids, before stage expansion.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActiveGroups(Vec<GroupId>);

impl ActiveGroups {
    /// Parse a comma-separated id list. Tokens that are not integers are dropped.
    pub fn parse(s: &str) -> Self {
        Self(s.split(',').filter_map(|t| t.trim().parse().ok()).collect())
    }

    pub fn ids(&self) -> &[GroupId] {
        &self.0
    }
}

impl From<&str> for ActiveGroups {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Vec<GroupId>> for ActiveGroups {
    fn from(ids: Vec<GroupId>) -> Self {
        Self(ids)
    }
}

/// Everything the match list can be narrowed by.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterOptions {
    pub states: StateFilter,
    /// `None` keeps every group.
    pub active_groups: Option<ActiveGroups>,
    pub search: String,
}

impl FilterOptions {
    /// Build filters from raw query-string values. Missing values mean "no restriction".
    pub fn from_query(
        states: Option<&str>,
        groups: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, FilterError> {
        let states = match states {
            Some(s) => s.parse()?,
            None => StateFilter::All,
        };
        let active_groups = groups
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(ActiveGroups::parse);
        Ok(Self {
            states,
            active_groups,
            search: search.unwrap_or_default().to_string(),
        })
    }

    pub fn with_states(mut self, states: StateFilter) -> Self {
        self.states = states;
        self
    }

    pub fn with_groups(mut self, groups: impl Into<ActiveGroups>) -> Self {
        self.active_groups = Some(groups.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Lowercased, trimmed search text, or `None` when the search box is blank.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}
