use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info};

use crate::api_client::{Ack, CivicBackend};
use crate::engagement::latch::InFlightLatch;
use crate::errors::{Acknowledgement, SubmitError};
use crate::models::{CandidateId, QuestionCategory};

#[derive(Debug, Default)]
struct Draft {
    text: String,
    category: QuestionCategory,
}

/// Draft state and submission for the "ask a candidate" dialog.
///
/// Blank drafts are rejected before any network call. A successful submit
/// clears the draft; a failed one keeps it so the user can try again.
pub struct QuestionComposer {
    backend: Arc<dyn CivicBackend>,
    candidate_id: CandidateId,
    candidate_name: String,
    draft: Mutex<Draft>,
    in_flight: InFlightLatch<CandidateId>,
}

impl QuestionComposer {
    pub fn new(
        backend: Arc<dyn CivicBackend>,
        candidate_id: CandidateId,
        candidate_name: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            candidate_id,
            candidate_name: candidate_name.into(),
            draft: Mutex::new(Draft::default()),
            in_flight: InFlightLatch::new(),
        }
    }

    fn draft(&self) -> MutexGuard<'_, Draft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.draft().text = text.into();
    }

    pub fn set_category(&self, category: QuestionCategory) {
        self.draft().category = category;
    }

    pub fn text(&self) -> String {
        self.draft().text.clone()
    }

    pub fn category(&self) -> QuestionCategory {
        self.draft().category
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_held(&self.candidate_id)
    }

    /// Closing the dialog throws the draft away.
    pub fn close(&self) {
        *self.draft() = Draft::default();
    }

    pub async fn submit(&self) -> Result<Ack, SubmitError> {
        let (text, category) = {
            let draft = self.draft();
            (draft.text.trim().to_string(), draft.category)
        };
        if text.is_empty() {
            return Err(SubmitError::EmptyQuestion);
        }

        let Some(_guard) = self.in_flight.try_acquire(&self.candidate_id) else {
            return Err(SubmitError::in_flight(&self.candidate_id));
        };

        match self
            .backend
            .submit_question(&self.candidate_id, &text, category)
            .await
        {
            Ok(ack) => {
                info!(
                    "Question for candidate {} submitted ({category})",
                    self.candidate_id
                );
                self.close();
                Ok(ack)
            }
            Err(e) => {
                error!("Question submission error: {e}");
                Err(e.into())
            }
        }
    }

    pub fn acknowledge(&self, result: &Result<Ack, SubmitError>) -> Option<Acknowledgement> {
        match result {
            Ok(_) => Some(Acknowledgement::new(
                "Question Submitted",
                format!(
                    "Your question has been sent to {}. You'll be notified when they respond.",
                    self.candidate_name
                ),
            )),
            Err(SubmitError::AlreadyInFlight(_)) => None,
            Err(SubmitError::EmptyQuestion) => {
                Some(Acknowledgement::error(SubmitError::EmptyQuestion.to_string()))
            }
            Err(SubmitError::Network(_)) => Some(Acknowledgement::error(
                "Failed to submit your question. Please try again.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::testing::{settle, GatedBackend};

    fn composer(backend: Arc<GatedBackend>) -> QuestionComposer {
        QuestionComposer::new(backend, CandidateId::Int(3), "Sarah Thompson")
    }

    #[tokio::test]
    async fn test_blank_question_never_hits_network() {
        let backend = GatedBackend::open_gate();
        let composer = composer(backend.clone());
        composer.set_text("   \n ");

        let result = composer.submit().await;
        assert!(matches!(result, Err(SubmitError::EmptyQuestion)));
        assert_eq!(backend.question_calls.load(Ordering::SeqCst), 0);

        let ack = composer.acknowledge(&result).unwrap();
        assert_eq!(ack.message, "Please enter a question before submitting.");
    }

    #[tokio::test]
    async fn test_success_sends_trimmed_text_and_resets_draft() {
        let backend = GatedBackend::open_gate();
        let composer = composer(backend.clone());
        composer.set_text("  Will you fund the bike lanes?  ");
        composer.set_category(QuestionCategory::Transportation);

        let result = composer.submit().await;
        assert!(result.is_ok());
        assert_eq!(
            backend.questions.lock().unwrap()[0],
            (
                CandidateId::Int(3),
                "Will you fund the bike lanes?".to_string(),
                QuestionCategory::Transportation
            )
        );
        assert_eq!(composer.text(), "");
        assert_eq!(composer.category(), QuestionCategory::General);

        let ack = composer.acknowledge(&result).unwrap();
        assert_eq!(ack.title, "Question Submitted");
        assert!(ack.message.contains("Sarah Thompson"));
    }

    #[tokio::test]
    async fn test_failure_keeps_draft_for_manual_retry() {
        let backend = GatedBackend::open_gate();
        backend.fail_writes(true);
        let composer = composer(backend.clone());
        composer.set_text("Housing plan?");
        composer.set_category(QuestionCategory::Housing);

        let result = composer.submit().await;
        assert!(matches!(result, Err(SubmitError::Network(_))));
        assert_eq!(composer.text(), "Housing plan?");
        assert_eq!(composer.category(), QuestionCategory::Housing);
        assert!(composer.acknowledge(&result).unwrap().is_error());

        backend.fail_writes(false);
        assert!(composer.submit().await.is_ok());
        assert_eq!(backend.question_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_double_submit_is_latched() {
        let backend = GatedBackend::closed_gate();
        let composer = Arc::new(composer(backend.clone()));
        composer.set_text("Question?");

        let first = tokio::spawn({
            let composer = Arc::clone(&composer);
            async move { composer.submit().await }
        });
        settle().await;
        assert!(composer.is_submitting());

        let second = composer.submit().await;
        assert!(matches!(second, Err(SubmitError::AlreadyInFlight(_))));
        assert_eq!(composer.acknowledge(&second), None);
        assert_eq!(backend.question_calls.load(Ordering::SeqCst), 1);

        backend.open(1);
        assert!(first.await.unwrap().is_ok());
        assert!(!composer.is_submitting());
    }

    #[test]
    fn test_close_discards_draft() {
        let composer = composer(GatedBackend::open_gate());
        composer.set_text("draft");
        composer.set_category(QuestionCategory::Economy);
        composer.close();
        assert_eq!(composer.text(), "");
        assert_eq!(composer.category(), QuestionCategory::General);
    }
}
