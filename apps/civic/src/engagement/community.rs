use std::collections::HashSet;

use tracing::debug;

use crate::models::{Question, QuestionCategory};

/// Community Q&A list with session-local likes.
///
/// Likes are applied optimistically and never sent to the backend. Each
/// question can be liked once per session, so counts only ever go up.
#[derive(Debug, Clone, Default)]
pub struct CommunityBoard {
    questions: Vec<Question>,
    liked: HashSet<String>,
}

impl CommunityBoard {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            liked: HashSet::new(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn by_category(&self, category: QuestionCategory) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    pub fn has_liked(&self, question_id: &str) -> bool {
        self.liked.contains(question_id)
    }

    /// Returns the like count after the action, or None for an unknown id.
    pub fn like(&mut self, question_id: &str) -> Option<u32> {
        let question = self.questions.iter_mut().find(|q| q.id == question_id)?;
        if self.liked.insert(question_id.to_string()) {
            question.likes = question.likes.saturating_add(1);
            debug!("Liked question {question_id} ({} likes)", question.likes);
        }
        Some(question.likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_like_increments_once_per_session() {
        let mut board = CommunityBoard::new(fixtures::community_questions());
        assert_eq!(board.like("1"), Some(24));
        assert!(board.has_liked("1"));
        assert_eq!(board.like("1"), Some(24));
        assert_eq!(board.questions()[0].likes, 24);
    }

    #[test]
    fn test_like_unknown_question() {
        let mut board = CommunityBoard::new(fixtures::community_questions());
        assert_eq!(board.like("missing"), None);
        assert!(!board.has_liked("missing"));
    }

    #[test]
    fn test_likes_never_decrease() {
        let mut board = CommunityBoard::new(fixtures::community_questions());
        let before: Vec<u32> = board.questions().iter().map(|q| q.likes).collect();
        for id in ["3", "2", "3", "1", "2"] {
            board.like(id);
        }
        let after: Vec<u32> = board.questions().iter().map(|q| q.likes).collect();
        assert!(before.iter().zip(&after).all(|(b, a)| a >= b));
        assert_eq!(after, vec![24, 19, 32]);
    }

    #[test]
    fn test_by_category() {
        let board = CommunityBoard::new(fixtures::community_questions());
        let housing = board.by_category(QuestionCategory::Housing);
        assert_eq!(housing.len(), 1);
        assert_eq!(housing[0].author, "Mike R.");
    }
}
