use serde::Serialize;

use crate::models::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

const CATALOGUE: [(&str, &str, &str); 6] = [
    ("First Vote", "🗳️", "Cast your first vote"),
    ("Quiz Master", "🧠", "Complete 5 candidate quizzes"),
    ("Community Champion", "🏆", "Ask 10 questions"),
    ("Civic Streak", "🔥", "7-day engagement streak"),
    ("Democracy Defender", "🛡️", "Report misinformation"),
    ("Local Leader", "⭐", "Create a micro election"),
];

/// The full achievement catalogue, marked earned from the profile's list.
/// Names in the profile that are not in the catalogue are ignored.
pub fn achievement_board(profile: &UserProfile) -> Vec<Achievement> {
    CATALOGUE
        .iter()
        .map(|&(name, icon, description)| Achievement {
            name,
            icon,
            description,
            earned: profile.has_achievement(name),
        })
        .collect()
}
