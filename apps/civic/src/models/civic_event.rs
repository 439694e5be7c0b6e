use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivicEvent {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    #[serde(default)]
    pub urgency: Urgency,
    pub xp_reward: u32,
    pub date: NaiveDate,
}
