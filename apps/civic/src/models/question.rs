use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    #[default]
    General,
    Housing,
    Transportation,
    Education,
    Environment,
    Economy,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 6] = [
        QuestionCategory::General,
        QuestionCategory::Housing,
        QuestionCategory::Transportation,
        QuestionCategory::Education,
        QuestionCategory::Environment,
        QuestionCategory::Economy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionCategory::General => "General",
            QuestionCategory::Housing => "Housing",
            QuestionCategory::Transportation => "Transportation",
            QuestionCategory::Education => "Education",
            QuestionCategory::Environment => "Environment",
            QuestionCategory::Economy => "Economy",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuestionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown question category '{s}'"))
    }
}

/// A community Q&A entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub author: String,
    pub question: String,
    pub category: QuestionCategory,
    pub likes: u32,
    pub answered: bool,
    pub time_ago: String,
}
