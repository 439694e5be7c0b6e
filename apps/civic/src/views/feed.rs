use std::fmt::Write;

use crate::models::{CivicEvent, Urgency};
use crate::views::format_date;

pub const FEED_FILTERS: [&str; 5] = ["All", "Transportation", "Housing", "Education", "Elections"];

pub fn urgency_color(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "#DC2626",
        Urgency::Medium => "#D97706",
        Urgency::Low => "#059669",
    }
}

/// "All" shows everything; any other chip matches the category ignoring case.
pub fn events_in_category<'a>(events: &'a [CivicEvent], category: &str) -> Vec<&'a CivicEvent> {
    let category = category.trim();
    if category.eq_ignore_ascii_case("all") {
        return events.iter().collect();
    }
    events
        .iter()
        .filter(|e| e.category.eq_ignore_ascii_case(category))
        .collect()
}

pub fn render_feed(events: &[CivicEvent], category: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Civic feed: {category}\n");
    let shown = events_in_category(events, category);
    if shown.is_empty() {
        let _ = writeln!(out, "No civic activity in {category} right now.");
        return out;
    }
    for event in shown {
        let _ = writeln!(out, "{} (+{} XP)", event.title, event.xp_reward);
        let _ = writeln!(out, "  {}", event.subtitle);
        let _ = writeln!(
            out,
            "  {} · {} · {:?} urgency ({})\n",
            event.category,
            format_date(event.date),
            event.urgency,
            urgency_color(event.urgency)
        );
    }
    out
}
