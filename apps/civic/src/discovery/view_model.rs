use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api_client::{CivicBackend, NetworkError};
use crate::discovery::filter::{self, FilterState, PositionCategory};
use crate::fixtures;
use crate::models::Candidate;

/// Where the candidates on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryState {
    Loading,
    /// Always carries data: on failure the fallback fixture plus a message.
    Ready {
        candidates: Vec<Candidate>,
        source: DataSource,
        error: Option<String>,
    },
}

/// A fetch started by [`CandidateDiscovery::begin_load`]. Owns everything it
/// needs, so it can be awaited without borrowing the view model.
pub struct LoadRequest {
    backend: Arc<dyn CivicBackend>,
    generation: u64,
}

impl LoadRequest {
    pub async fn run(self) -> LoadOutcome {
        let result = self.backend.fetch_candidates().await;
        LoadOutcome {
            generation: self.generation,
            result,
        }
    }
}

pub struct LoadOutcome {
    generation: u64,
    result: Result<Vec<Candidate>, NetworkError>,
}

/// View model behind the candidate discovery screen.
///
/// Holds the loaded list and the filter state, and derives the visible set
/// on demand. Each load is tagged with a generation; only the latest load
/// of a still-mounted view model may change state.
pub struct CandidateDiscovery {
    backend: Arc<dyn CivicBackend>,
    state: DiscoveryState,
    filter: FilterState,
    generation: u64,
    mounted: bool,
}

impl CandidateDiscovery {
    pub fn new(backend: Arc<dyn CivicBackend>, filter: FilterState) -> Self {
        Self {
            backend,
            state: DiscoveryState::Loading,
            filter,
            generation: 0,
            mounted: true,
        }
    }

    /// Mounts the screen: constructs the view model and runs the first load.
    pub async fn mount(backend: Arc<dyn CivicBackend>, filter: FilterState) -> Self {
        let mut discovery = Self::new(backend, filter);
        discovery.load().await;
        discovery
    }

    /// Enters `Loading` and hands back the fetch to run.
    pub fn begin_load(&mut self) -> LoadRequest {
        self.generation += 1;
        self.state = DiscoveryState::Loading;
        LoadRequest {
            backend: Arc::clone(&self.backend),
            generation: self.generation,
        }
    }

    /// Applies a finished fetch. Returns false when the outcome was dropped
    /// because a newer load started or the screen was unmounted.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if !self.mounted {
            debug!("Dropping candidate load {}: view unmounted", outcome.generation);
            return false;
        }
        if outcome.generation != self.generation {
            debug!(
                "Dropping stale candidate load {} (current {})",
                outcome.generation, self.generation
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(candidates) => {
                info!("Loaded {} candidates", candidates.len());
                DiscoveryState::Ready {
                    candidates,
                    source: DataSource::Remote,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Candidate fetch failed, showing fallback data: {e}");
                DiscoveryState::Ready {
                    candidates: fixtures::fallback_candidates(),
                    source: DataSource::Fallback,
                    error: Some(format!(
                        "Couldn't reach the candidate service ({e}). Showing sample candidates."
                    )),
                }
            }
        };
        true
    }

    pub async fn load(&mut self) {
        let request = self.begin_load();
        let outcome = request.run().await;
        self.apply(outcome);
    }

    pub async fn retry(&mut self) {
        info!("Retrying candidate fetch");
        self.load().await;
    }

    /// Marks the screen as torn down; in-flight loads are ignored on arrival.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn state(&self) -> &DiscoveryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DiscoveryState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DiscoveryState::Ready { error, .. } => error.as_deref(),
            DiscoveryState::Loading => None,
        }
    }

    pub fn source(&self) -> Option<DataSource> {
        match &self.state {
            DiscoveryState::Ready { source, .. } => Some(*source),
            DiscoveryState::Loading => None,
        }
    }

    /// Hides the banner. The data stays marked as fallback.
    pub fn dismiss_error(&mut self) {
        if let DiscoveryState::Ready { error, .. } = &mut self.state {
            *error = None;
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        match &self.state {
            DiscoveryState::Ready { candidates, .. } => candidates,
            DiscoveryState::Loading => &[],
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_category(&mut self, category: PositionCategory) {
        self.filter.category = category;
    }

    pub fn set_issue(&mut self, issue: Option<String>) {
        self.filter.issue = issue.filter(|i| !i.trim().is_empty());
    }

    pub fn visible(&self) -> Vec<&Candidate> {
        filter::visible_candidates(self.candidates(), &self.filter)
    }

    /// Empty-state text, only once loaded and nothing passes the filters.
    pub fn empty_state_message(&self) -> Option<String> {
        if self.is_loading() || !self.visible().is_empty() {
            return None;
        }
        Some(filter::empty_state_message(&self.filter))
    }
}
