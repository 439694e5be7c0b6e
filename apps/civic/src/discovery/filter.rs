use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::models::Candidate;

/// Position chips shown above the candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCategory {
    #[default]
    All,
    CityCouncil,
    StateAssembly,
    Congress,
}

impl PositionCategory {
    pub const ALL: [PositionCategory; 4] = [
        PositionCategory::All,
        PositionCategory::CityCouncil,
        PositionCategory::StateAssembly,
        PositionCategory::Congress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PositionCategory::All => "All",
            PositionCategory::CityCouncil => "City Council",
            PositionCategory::StateAssembly => "State Assembly",
            PositionCategory::Congress => "Congress",
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PositionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();
        PositionCategory::ALL
            .into_iter()
            .find(|c| c.label().replace(' ', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown position category '{s}'"))
    }
}

/// Everything the user (or a deep link) has narrowed the list by.
/// A fresh mount starts from `FilterState::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: PositionCategory,
    pub issue: Option<String>,
}

impl FilterState {
    /// Builds the initial state from a deep link such as
    /// `civic://candidates?issue=Climate%20Action`, a router path such as
    /// `/candidates?issue=housing`, or a bare `issue=housing`.
    /// A blank `issue` value counts as no filter.
    pub fn from_deep_link(link: &str) -> Self {
        FilterState {
            issue: issue_from_link(link),
            ..FilterState::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: PositionCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        let issue = issue.into();
        self.issue = (!issue.trim().is_empty()).then_some(issue);
        self
    }

    /// True iff the candidate passes the text, category and issue predicates.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        matches_query(candidate, &self.query)
            && matches_category(candidate, self.category)
            && matches_issue(candidate, self.issue.as_deref())
    }
}

fn issue_from_link(link: &str) -> Option<String> {
    let link = link.trim();
    // Router paths like `/candidates?issue=x` have no scheme; keep only the query.
    let parsed = Url::parse(link).or_else(|_| {
        let query = link.split_once('?').map_or(link, |(_, query)| query);
        Url::parse(&format!("civic://link?{query}"))
    });
    parsed
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == "issue")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Query is a case-insensitive substring of name, position or any issue tag.
pub fn matches_query(candidate: &Candidate, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    contains_ci(&candidate.name, &q)
        || contains_ci(&candidate.position, &q)
        || candidate.issues.iter().any(|issue| contains_ci(issue, &q))
}

/// Substring match on the position label, not an exact enum comparison.
pub fn matches_category(candidate: &Candidate, category: PositionCategory) -> bool {
    category == PositionCategory::All
        || contains_ci(&candidate.position, &category.label().to_lowercase())
}

pub fn matches_issue(candidate: &Candidate, issue: Option<&str>) -> bool {
    match issue {
        None => true,
        Some(issue) => {
            let wanted = issue.to_lowercase();
            candidate.issues.iter().any(|tag| contains_ci(tag, &wanted))
        }
    }
}

/// The visible set: candidates passing every active filter, in source order.
pub fn visible_candidates<'a>(
    candidates: &'a [Candidate],
    filter: &FilterState,
) -> Vec<&'a Candidate> {
    candidates.iter().filter(|c| filter.matches(c)).collect()
}

/// Message shown in place of the list when the visible set is empty.
pub fn empty_state_message(filter: &FilterState) -> String {
    match filter.issue.as_deref() {
        Some(issue) => {
            format!("No candidates found for \"{issue}\". Try clearing the issue filter.")
        }
        None => "No candidates found. Try adjusting your search or filters.".to_string(),
    }
}

pub fn results_header(count: usize) -> String {
    format!("{count} Candidates Found")
}
