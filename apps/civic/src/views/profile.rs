use std::fmt::Write;

use crate::models::UserProfile;
use crate::profile::{achievement_board, metrics::XP_PER_LEVEL};
use crate::views::progress_bar;

pub fn render_profile(profile: &UserProfile) -> String {
    let level = profile.level();
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.name);
    let _ = writeln!(out, "  {}\n", profile.district);
    let _ = writeln!(
        out,
        "XP {} · L{level} · {} day streak\n",
        profile.xp, profile.streak_days
    );
    let _ = writeln!(
        out,
        "Level {level} Progress {} {}/{XP_PER_LEVEL}",
        progress_bar(profile.progress_within_level(), XP_PER_LEVEL),
        profile.progress_within_level()
    );
    let _ = writeln!(
        out,
        "{} XP until Level {}\n",
        profile.xp_to_next_level(),
        level + 1
    );
    let _ = writeln!(out, "MetroPoints: {}\n", profile.metro_points);
    let _ = writeln!(out, "Achievements");
    for achievement in achievement_board(profile) {
        let mark = if achievement.earned { "x" } else { " " };
        let _ = writeln!(
            out,
            "  [{mark}] {} {} - {}",
            achievement.icon, achievement.name, achievement.description
        );
    }
    out
}
