use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::CandidateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionKind {
    General,
    Primary,
    Micro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionStatus {
    Upcoming,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Election {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ElectionKind,
    pub date: NaiveDate,
    pub status: ElectionStatus,
    pub description: String,
    /// Loose references into the candidate list; not checked against it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CandidateId>>,
}
