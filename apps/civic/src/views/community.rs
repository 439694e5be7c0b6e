use std::fmt::Write;

use crate::engagement::CommunityBoard;
use crate::models::QuestionCategory;

pub fn category_color(category: QuestionCategory) -> &'static str {
    match category {
        QuestionCategory::Transportation => "#1E40AF",
        QuestionCategory::Housing => "#DC2626",
        QuestionCategory::Education => "#059669",
        QuestionCategory::Environment => "#7C3AED",
        QuestionCategory::General | QuestionCategory::Economy => "#64748B",
    }
}

pub fn render_questions(board: &CommunityBoard) -> String {
    let mut out = String::from("Community Q&A\n\n");
    for q in board.questions() {
        let status = if q.answered { "Answered" } else { "Pending" };
        let liked = if board.has_liked(&q.id) { " (liked)" } else { "" };
        let _ = writeln!(
            out,
            "[{} {}] {} · {}",
            q.category,
            category_color(q.category),
            q.author,
            q.time_ago
        );
        let _ = writeln!(out, "  {}", q.question);
        let _ = writeln!(out, "  👍 {}{liked} · {status}\n", q.likes);
    }
    out
}
