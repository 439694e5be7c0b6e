use thiserror::Error;

use crate::api_client::NetworkError;
use crate::models::CandidateId;

/// Local rejections and remote failures of a user-initiated submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please enter a question before submitting.")]
    EmptyQuestion,

    #[error("A submission for {0} is already in flight")]
    AlreadyInFlight(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl SubmitError {
    pub fn in_flight(candidate: &CandidateId) -> Self {
        SubmitError::AlreadyInFlight(format!("candidate {candidate}"))
    }

    /// Local rejections never reached the backend.
    pub fn is_local(&self) -> bool {
        !matches!(self, SubmitError::Network(_))
    }
}

/// Errors surfaced to the command-line front end.
#[derive(Debug, Error)]
pub enum CivicError {
    #[error("Invalid input: {0}")]
    Validation(String),
}

/// Dialog shown after a submission resolves, one per outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub title: String,
    pub message: String,
}

impl Acknowledgement {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }

    pub fn is_error(&self) -> bool {
        self.title == "Error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_rejections_are_flagged() {
        assert!(SubmitError::EmptyQuestion.is_local());
        assert!(SubmitError::in_flight(&CandidateId::Int(3)).is_local());
        let remote = SubmitError::Network(NetworkError::Status {
            status: 500,
            body: String::new(),
        });
        assert!(!remote.is_local());
    }

    #[test]
    fn test_in_flight_message_names_candidate() {
        let err = SubmitError::in_flight(&CandidateId::Text("abc".to_string()));
        assert_eq!(err.to_string(), "A submission for candidate abc is already in flight");
    }

    #[test]
    fn test_validation_error_message() {
        let err = CivicError::Validation("unknown tab 'later'".to_string());
        assert_eq!(err.to_string(), "Invalid input: unknown tab 'later'");
    }

    #[test]
    fn test_error_acknowledgement() {
        let ack = Acknowledgement::error("boom");
        assert!(ack.is_error());
        assert!(!Acknowledgement::new("Reaction Recorded", "ok").is_error());
    }
}
