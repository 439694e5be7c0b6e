//! User-initiated writes: questions, reactions and community likes.

pub mod community;
pub mod latch;
pub mod questions;
pub mod reactions;

pub use community::CommunityBoard;
pub use latch::{InFlightGuard, InFlightLatch};
pub use questions::QuestionComposer;
pub use reactions::ReactionController;
