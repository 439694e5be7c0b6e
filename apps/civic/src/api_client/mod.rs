//! API client: the single point of entry for all backend calls.
//!
//! Three endpoints, plain JSON over HTTP, no auth:
//!   GET  {base}/candidates
//!   POST {base}/api/questions
//!   POST {base}/api/reactions
//!
//! Calls are at-most-once: no retries, no timeout, no idempotency key.
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Candidate, CandidateId, QuestionCategory};

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

impl std::str::FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "like" => Ok(ReactionKind::Like),
            "dislike" => Ok(ReactionKind::Dislike),
            other => Err(format!("unknown reaction '{other}', expected like or dislike")),
        }
    }
}

/// Successful write acknowledgement. The body is opaque and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRequest<'a> {
    candidate_id: &'a CandidateId,
    question: &'a str,
    category: QuestionCategory,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReactionRequest<'a> {
    candidate_id: &'a CandidateId,
    #[serde(rename = "type")]
    kind: ReactionKind,
}

/// Remote data source seam. View models and controllers hold an
/// `Arc<dyn CivicBackend>` so tests can swap in scripted backends.
#[async_trait]
pub trait CivicBackend: Send + Sync {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, NetworkError>;

    async fn submit_question(
        &self,
        candidate_id: &CandidateId,
        question: &str,
        category: QuestionCategory,
    ) -> Result<Ack, NetworkError>;

    async fn submit_reaction(
        &self,
        candidate_id: &CandidateId,
        kind: ReactionKind,
    ) -> Result<Ack, NetworkError>;
}

/// reqwest-backed implementation of [`CivicBackend`].
#[derive(Clone)]
pub struct CivicApiClient {
    client: Client,
    base: String,
}

impl CivicApiClient {
    pub fn new(base: &Url) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: &Url) -> Self {
        Self {
            client,
            base: base.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Joins a path onto the base without dropping any base path segment.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetworkError> {
        let url = self.endpoint(path);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let body = read_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Ack, NetworkError> {
        let url = self.endpoint(path);
        debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status().as_u16();
        let body = read_success(response).await?;
        Ok(Ack { status, body })
    }
}

/// Reads the body of a 2xx response, or turns anything else into `Status`.
async fn read_success(response: reqwest::Response) -> Result<String, NetworkError> {
    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    Ok(response.text().await?)
}

#[async_trait]
impl CivicBackend for CivicApiClient {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, NetworkError> {
        let candidates: Vec<Candidate> = self.get_json("candidates").await?;
        debug!("Fetched {} candidates", candidates.len());
        Ok(candidates)
    }

    async fn submit_question(
        &self,
        candidate_id: &CandidateId,
        question: &str,
        category: QuestionCategory,
    ) -> Result<Ack, NetworkError> {
        let body = QuestionRequest {
            candidate_id,
            question,
            category,
        };
        self.post_json("api/questions", &body).await
    }

    async fn submit_reaction(
        &self,
        candidate_id: &CandidateId,
        kind: ReactionKind,
    ) -> Result<Ack, NetworkError> {
        let body = ReactionRequest { candidate_id, kind };
        self.post_json("api/reactions", &body).await
    }
}
