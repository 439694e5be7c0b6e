//! Gamified profile arithmetic: levels, progress and match tiers.

pub mod achievements;
pub mod metrics;

pub use achievements::{achievement_board, Achievement};
pub use metrics::{level, progress_percentage, progress_within_level, xp_to_next_level, MatchTier};
