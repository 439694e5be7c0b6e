//! Candidate discovery: filter predicates and the screen's view model.

pub mod filter;
pub mod view_model;

pub use filter::{visible_candidates, FilterState, PositionCategory};
pub use view_model::{CandidateDiscovery, DataSource, DiscoveryState, LoadOutcome, LoadRequest};
