use std::fmt::Write;

use crate::discovery::filter::results_header;
use crate::discovery::{CandidateDiscovery, DataSource};
use crate::models::Candidate;
use crate::profile::MatchTier;
use crate::views::progress_bar;

pub fn render_candidate_card(candidate: &Candidate) -> String {
    let mut out = String::new();
    let flag = if candidate.has_contradictions { " ⚠" } else { "" };
    let _ = writeln!(out, "{}{flag}", candidate.name);
    let _ = writeln!(out, "  {}", candidate.position);
    let _ = writeln!(out, "  {} • {}", candidate.district, candidate.party);
    match candidate.match_percentage {
        Some(p) => {
            let p = p.min(100);
            let tier = MatchTier::from_percentage(p);
            let _ = writeln!(
                out,
                "  {} {p}% {} ({})",
                progress_bar(p.into(), 100),
                tier.label(),
                tier.color()
            );
        }
        None => {
            let _ = writeln!(out, "  Take the quiz to see your match");
        }
    }
    if !candidate.issues.is_empty() {
        let _ = writeln!(out, "  Issues: {}", candidate.issues.join(", "));
    }
    out
}

/// Whole discovery screen: banner, result count, then cards or the empty state.
pub fn render_discovery(discovery: &CandidateDiscovery) -> String {
    if discovery.is_loading() {
        return "Loading candidates...\n".to_string();
    }

    let mut out = String::new();
    if let Some(error) = discovery.error() {
        let _ = writeln!(out, "! {error}");
        let _ = writeln!(out, "! Run again to retry.\n");
    } else if discovery.source() == Some(DataSource::Fallback) {
        let _ = writeln!(out, "(offline: showing sample candidates)\n");
    }

    let visible = discovery.visible();
    let _ = writeln!(out, "{}\n", results_header(visible.len()));
    match discovery.empty_state_message() {
        Some(message) => {
            let _ = writeln!(out, "{message}");
        }
        None => {
            for candidate in visible {
                let _ = writeln!(out, "{}", render_candidate_card(candidate));
            }
        }
    }
    out
}
