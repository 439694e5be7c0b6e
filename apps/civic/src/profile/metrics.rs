use serde::{Deserialize, Serialize};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: u32 = 200;

/// Level derived from xp. Levels start at 1.
pub fn level(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

pub fn progress_within_level(xp: u32) -> u32 {
    xp % XP_PER_LEVEL
}

/// Always in `1..=200`; exactly on a level boundary a full level remains.
pub fn xp_to_next_level(xp: u32) -> u32 {
    XP_PER_LEVEL - progress_within_level(xp)
}

/// Fill percentage of a progress bar, capped at 100. A zero total renders empty.
pub fn progress_percentage(current: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (current as f64 / total as f64 * 100.0).min(100.0)
}

/// How closely a candidate matches the user's quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Weak,
    Moderate,
    Strong,
}

impl MatchTier {
    /// Step function over the percentage: ≥80 strong, 60–79 moderate, <60 weak.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 80 {
            MatchTier::Strong
        } else if percentage >= 60 {
            MatchTier::Moderate
        } else {
            MatchTier::Weak
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MatchTier::Strong => "#059669",
            MatchTier::Moderate => "#D97706",
            MatchTier::Weak => "#DC2626",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Strong => "strong match",
            MatchTier::Moderate => "moderate match",
            MatchTier::Weak => "weak match",
        }
    }
}
