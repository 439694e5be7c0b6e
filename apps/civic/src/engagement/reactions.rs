use std::sync::Arc;

use tracing::{error, info, warn};

use crate::api_client::{Ack, CivicBackend, ReactionKind};
use crate::engagement::latch::InFlightLatch;
use crate::errors::{Acknowledgement, SubmitError};
use crate::models::CandidateId;

/// Records like/dislike reactions, at most one in flight per candidate.
pub struct ReactionController {
    backend: Arc<dyn CivicBackend>,
    in_flight: InFlightLatch<CandidateId>,
}

impl ReactionController {
    pub fn new(backend: Arc<dyn CivicBackend>) -> Self {
        Self {
            backend,
            in_flight: InFlightLatch::new(),
        }
    }

    pub fn is_reacting(&self, candidate: &CandidateId) -> bool {
        self.in_flight.is_held(candidate)
    }

    /// Sends the reaction unless one for the same candidate is still pending,
    /// in which case nothing goes over the network.
    pub async fn react(
        &self,
        candidate: &CandidateId,
        kind: ReactionKind,
    ) -> Result<Ack, SubmitError> {
        let Some(_guard) = self.in_flight.try_acquire(candidate) else {
            warn!("Ignoring {} for candidate {candidate}: reaction in flight", kind.as_str());
            return Err(SubmitError::in_flight(candidate));
        };

        match self.backend.submit_reaction(candidate, kind).await {
            Ok(ack) => {
                info!("Recorded {} for candidate {candidate}", kind.as_str());
                Ok(ack)
            }
            Err(e) => {
                error!("Reaction error for candidate {candidate}: {e}");
                Err(e.into())
            }
        }
    }

    /// Dialog for a finished reaction. In-flight rejections show nothing.
    pub fn acknowledge(
        kind: ReactionKind,
        result: &Result<Ack, SubmitError>,
    ) -> Option<Acknowledgement> {
        match result {
            Ok(_) => Some(Acknowledgement::new(
                "Reaction Recorded",
                format!("Your {} has been recorded!", kind.as_str()),
            )),
            Err(SubmitError::AlreadyInFlight(_)) => None,
            Err(_) => Some(Acknowledgement::error(
                "Failed to record your reaction. Please try again.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::testing::{settle, GatedBackend};

    #[tokio::test]
    async fn test_second_reaction_for_same_candidate_is_rejected_locally() {
        let backend = GatedBackend::closed_gate();
        let controller = Arc::new(ReactionController::new(backend.clone()));
        let james = CandidateId::Int(2);

        let first = tokio::spawn({
            let controller = Arc::clone(&controller);
            let james = james.clone();
            async move { controller.react(&james, ReactionKind::Like).await }
        });
        settle().await;
        assert!(controller.is_reacting(&james));

        let second = controller.react(&james, ReactionKind::Dislike).await;
        assert!(matches!(second, Err(SubmitError::AlreadyInFlight(_))));
        assert_eq!(backend.reaction_calls.load(Ordering::SeqCst), 1);

        backend.open(1);
        assert!(first.await.unwrap().is_ok());
        assert!(!controller.is_reacting(&james));

        backend.open(1);
        assert!(controller.react(&james, ReactionKind::Dislike).await.is_ok());
        assert_eq!(backend.reaction_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_other_candidates_are_not_blocked() {
        let backend = GatedBackend::closed_gate();
        let controller = Arc::new(ReactionController::new(backend.clone()));

        let pending = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.react(&CandidateId::Int(1), ReactionKind::Like).await }
        });
        settle().await;

        // The gate is FIFO, so release both writes before awaiting either.
        backend.open(2);
        let other = controller.react(&CandidateId::Int(3), ReactionKind::Like).await;
        assert!(other.is_ok());
        assert!(pending.await.unwrap().is_ok());
        assert_eq!(backend.reaction_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_releases_latch_and_reports_error() {
        let backend = GatedBackend::open_gate();
        backend.fail_writes(true);
        let controller = ReactionController::new(backend.clone());
        let id = CandidateId::Int(1);

        let result = controller.react(&id, ReactionKind::Like).await;
        assert!(matches!(result, Err(SubmitError::Network(_))));
        assert!(!controller.is_reacting(&id));

        let ack = ReactionController::acknowledge(ReactionKind::Like, &result).unwrap();
        assert!(ack.is_error());
        assert!(ack.message.contains("try again"));
    }

    #[test]
    fn test_acknowledge_wording() {
        let ok: Result<Ack, SubmitError> = Ok(Ack {
            status: 200,
            body: String::new(),
        });
        let ack = ReactionController::acknowledge(ReactionKind::Dislike, &ok).unwrap();
        assert_eq!(ack.title, "Reaction Recorded");
        assert_eq!(ack.message, "Your dislike has been recorded!");

        let busy: Result<Ack, SubmitError> = Err(SubmitError::in_flight(&CandidateId::Int(1)));
        assert_eq!(ReactionController::acknowledge(ReactionKind::Like, &busy), None);
    }
}
