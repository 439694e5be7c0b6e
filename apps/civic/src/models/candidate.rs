use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend ids arrive either as JSON numbers or as strings, depending on
/// which source produced the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Int(i64),
    Text(String),
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Int(id) => write!(f, "{id}"),
            CandidateId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for CandidateId {
    fn from(id: i64) -> Self {
        CandidateId::Int(id)
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        CandidateId::Text(id.to_string())
    }
}

impl CandidateId {
    /// Parses a command-line or deep-link id, preferring the numeric form.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map(CandidateId::Int)
            .unwrap_or_else(|_| CandidateId::Text(raw.to_string()))
    }
}

/// A candidate record as supplied by the backend or the fallback fixture.
/// Never mutated after decoding. Optional fields tolerate explicit nulls so
/// one sparse record cannot fail the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub party: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(
        default,
        rename = "keyIssues",
        alias = "issues",
        deserialize_with = "null_as_default"
    )]
    pub issues: Vec<String>,
    /// 0–100, absent until the matching quiz has been taken.
    #[serde(default, deserialize_with = "lenient_percentage")]
    pub match_percentage: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_contradictions: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts any JSON number, rounded and clamped into 0..=100.
fn lenient_percentage<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|p| p.is_finite())
        .map(|p| p.round().clamp(0.0, 100.0) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_numeric_and_string_ids() {
        let numeric: Candidate = serde_json::from_value(json!({"id": 7, "name": "A"})).unwrap();
        let text: Candidate = serde_json::from_value(json!({"id": "7", "name": "A"})).unwrap();
        assert_eq!(numeric.id, CandidateId::Int(7));
        assert_eq!(text.id, CandidateId::Text("7".to_string()));
        assert_eq!(numeric.id.to_string(), text.id.to_string());
    }

    #[test]
    fn test_partial_record_takes_defaults() {
        let c: Candidate = serde_json::from_value(json!({
            "id": 1,
            "name": "Maria Rodriguez",
            "issues": ["Education"],
            "videoUrl": "https://cdn.example/clip.mp4"
        }))
        .unwrap();
        assert_eq!(c.issues, vec!["Education".to_string()]);
        assert_eq!(c.match_percentage, None);
        assert!(!c.has_contradictions);
        assert!(c.position.is_empty());
        assert_eq!(c.video_url.as_deref(), Some("https://cdn.example/clip.mp4"));
    }

    #[test]
    fn test_key_issues_field_name() {
        let c: Candidate = serde_json::from_value(json!({
            "id": "2",
            "name": "James Chen",
            "keyIssues": ["Public Safety"],
            "matchPercentage": 62,
            "hasContradictions": true
        }))
        .unwrap();
        assert_eq!(c.issues, vec!["Public Safety".to_string()]);
        assert_eq!(c.match_percentage, Some(62));
        assert!(c.has_contradictions);
    }

    #[test]
    fn test_parse_id_prefers_number() {
        assert_eq!(CandidateId::parse(" 42 "), CandidateId::Int(42));
        assert_eq!(CandidateId::parse("abc"), CandidateId::Text("abc".to_string()));
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let list: Vec<Candidate> = serde_json::from_value(json!([
            {"id": 1, "name": "A", "party": null, "position": null},
            {"id": 2, "name": "B", "keyIssues": null, "hasContradictions": null, "experience": null},
            {"id": 3, "name": "C", "matchPercentage": null}
        ]))
        .unwrap();
        assert_eq!(list.len(), 3);
        assert!(list[0].party.is_empty());
        assert!(list[0].position.is_empty());
        assert!(list[1].issues.is_empty());
        assert!(!list[1].has_contradictions);
        assert_eq!(list[2].match_percentage, None);
    }

    #[test]
    fn test_fractional_and_out_of_range_percentages() {
        let decode = |value: serde_json::Value| -> Option<u8> {
            let raw = json!({"id": 1, "name": "A", "matchPercentage": value});
            serde_json::from_value::<Candidate>(raw).unwrap().match_percentage
        };
        assert_eq!(decode(json!(87.5)), Some(88));
        assert_eq!(decode(json!(61.2)), Some(61));
        assert_eq!(decode(json!(140)), Some(100));
        assert_eq!(decode(json!(-3)), Some(0));
        assert_eq!(decode(json!(62)), Some(62));
    }
}
