use std::fmt::Write;
use std::str::FromStr;

use crate::models::{Election, ElectionKind, ElectionStatus};
use crate::views::format_date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElectionTab {
    #[default]
    Upcoming,
    Micro,
    Past,
}

impl ElectionTab {
    pub fn label(self) -> &'static str {
        match self {
            ElectionTab::Upcoming => "Upcoming",
            ElectionTab::Micro => "Micro Elections",
            ElectionTab::Past => "Past",
        }
    }

    pub fn includes(self, election: &Election) -> bool {
        match self {
            ElectionTab::Upcoming => election.status == ElectionStatus::Upcoming,
            ElectionTab::Micro => election.kind == ElectionKind::Micro,
            ElectionTab::Past => election.status == ElectionStatus::Completed,
        }
    }
}

impl FromStr for ElectionTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(ElectionTab::Upcoming),
            "micro" => Ok(ElectionTab::Micro),
            "past" => Ok(ElectionTab::Past),
            other => Err(format!("unknown tab '{other}', expected upcoming, micro or past")),
        }
    }
}

pub fn kind_color(kind: ElectionKind) -> &'static str {
    match kind {
        ElectionKind::General => "#1E40AF",
        ElectionKind::Primary => "#7C3AED",
        ElectionKind::Micro => "#059669",
    }
}

pub fn elections_in_tab(elections: &[Election], tab: ElectionTab) -> Vec<&Election> {
    elections.iter().filter(|e| tab.includes(e)).collect()
}

pub fn render_elections(elections: &[Election], tab: ElectionTab) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Elections: {}\n", tab.label());

    let shown = elections_in_tab(elections, tab);
    if shown.is_empty() {
        let _ = writeln!(out, "No elections found. Check back later for updates.");
        return out;
    }
    for election in shown {
        let _ = writeln!(
            out,
            "{} [{:?} {}]",
            election.title,
            election.kind,
            kind_color(election.kind)
        );
        let _ = writeln!(out, "  {}", format_date(election.date));
        let _ = writeln!(out, "  {}", election.description);
        if let Some(candidates) = &election.candidates {
            let _ = writeln!(out, "  {} candidates", candidates.len());
        }
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_tabs_filter_by_status_and_kind() {
        let elections = fixtures::elections();
        assert_eq!(elections_in_tab(&elections, ElectionTab::Upcoming).len(), 3);
        assert_eq!(elections_in_tab(&elections, ElectionTab::Micro).len(), 2);
        assert!(elections_in_tab(&elections, ElectionTab::Past).is_empty());
    }

    #[test]
    fn test_render_formats_dates_and_empty_tab() {
        let elections = fixtures::elections();
        let upcoming = render_elections(&elections, ElectionTab::Upcoming);
        assert!(upcoming.contains("Nov 5, 2024"));
        assert!(upcoming.contains("3 candidates"));
        assert!(upcoming.contains("NYC General Election 2024 [General #1E40AF]"));

        let past = render_elections(&elections, ElectionTab::Past);
        assert!(past.contains("No elections found"));
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(kind_color(ElectionKind::General), "#1E40AF");
        assert_eq!(kind_color(ElectionKind::Primary), "#7C3AED");
        assert_eq!(kind_color(ElectionKind::Micro), "#059669");
    }
}
