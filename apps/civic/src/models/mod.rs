pub mod candidate;
pub mod civic_event;
pub mod election;
pub mod profile;
pub mod question;

pub use candidate::{Candidate, CandidateId};
pub use civic_event::{CivicEvent, Urgency};
pub use election::{Election, ElectionKind, ElectionStatus};
pub use profile::UserProfile;
pub use question::{Question, QuestionCategory};
