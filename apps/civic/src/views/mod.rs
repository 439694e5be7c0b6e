//! Terminal renderings of each screen. Pure functions of their inputs.

pub mod candidates;
pub mod community;
pub mod elections;
pub mod feed;
pub mod profile;

use chrono::NaiveDate;

use crate::profile::progress_percentage;

const BAR_WIDTH: usize = 20;

/// `Nov 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Fixed-width text progress bar, e.g. `[#####...............]`.
pub fn progress_bar(current: u32, total: u32) -> String {
    let filled = (progress_percentage(current, total) / 100.0 * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
