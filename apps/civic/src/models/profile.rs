use serde::{Deserialize, Serialize};

use crate::profile::metrics;

/// Read-only profile of the signed-in user.
///
/// Level is not stored: any `level` field in incoming JSON is ignored and
/// the value is always derived from `xp` via [`UserProfile::level`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub district: String,
    pub xp: u32,
    #[serde(default)]
    pub metro_points: u32,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl UserProfile {
    pub fn level(&self) -> u32 {
        metrics::level(self.xp)
    }

    pub fn progress_within_level(&self) -> u32 {
        metrics::progress_within_level(self.xp)
    }

    pub fn xp_to_next_level(&self) -> u32 {
        metrics::xp_to_next_level(self.xp)
    }

    pub fn has_achievement(&self, name: &str) -> bool {
        self.achievements.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}
