//! Test doubles shared by the engagement tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::api_client::{Ack, CivicBackend, NetworkError, ReactionKind};
use crate::fixtures;
use crate::models::{Candidate, CandidateId, QuestionCategory};

/// Backend whose writes block until the test releases them with [`open`].
///
/// [`open`]: GatedBackend::open
pub struct GatedBackend {
    gate: Semaphore,
    fail: AtomicBool,
    pub question_calls: AtomicUsize,
    pub reaction_calls: AtomicUsize,
    pub questions: Mutex<Vec<(CandidateId, String, QuestionCategory)>>,
}

impl GatedBackend {
    /// Writes complete immediately.
    pub fn open_gate() -> Arc<Self> {
        let backend = Self::closed_gate();
        backend.gate.add_permits(1_000);
        backend
    }

    /// Writes wait for [`GatedBackend::open`].
    pub fn closed_gate() -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            fail: AtomicBool::new(false),
            question_calls: AtomicUsize::new(0),
            reaction_calls: AtomicUsize::new(0),
            questions: Mutex::new(Vec::new()),
        })
    }

    pub fn open(&self, writes: usize) {
        self.gate.add_permits(writes);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    async fn pass_gate(&self) -> Result<Ack, NetworkError> {
        self.gate.acquire().await.expect("gate closed").forget();
        if self.fail.load(Ordering::SeqCst) {
            return Err(NetworkError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(Ack {
            status: 200,
            body: "{}".to_string(),
        })
    }
}

#[async_trait]
impl CivicBackend for GatedBackend {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, NetworkError> {
        Ok(fixtures::fallback_candidates())
    }

    async fn submit_question(
        &self,
        candidate_id: &CandidateId,
        question: &str,
        category: QuestionCategory,
    ) -> Result<Ack, NetworkError> {
        self.question_calls.fetch_add(1, Ordering::SeqCst);
        self.questions
            .lock()
            .unwrap()
            .push((candidate_id.clone(), question.to_string(), category));
        self.pass_gate().await
    }

    async fn submit_reaction(
        &self,
        _candidate_id: &CandidateId,
        _kind: ReactionKind,
    ) -> Result<Ack, NetworkError> {
        self.reaction_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await
    }
}

/// Lets spawned tasks reach their first await point.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
