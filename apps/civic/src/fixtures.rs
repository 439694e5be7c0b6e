//! Hardcoded data shown when the backend is unreachable, and the static
//! content for screens that have no backend endpoint yet.

use chrono::NaiveDate;

use crate::models::{
    Candidate, CandidateId, CivicEvent, Election, ElectionKind, ElectionStatus, Question,
    QuestionCategory, Urgency, UserProfile,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Only called with literal calendar dates below.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: &str,
    name: &str,
    position: &str,
    district: &str,
    image: &str,
    match_percentage: u8,
    has_contradictions: bool,
    bio: &str,
    issues: &[&str],
    experience: &[&str],
) -> Candidate {
    Candidate {
        id: CandidateId::from(id),
        name: name.to_string(),
        position: position.to_string(),
        district: district.to_string(),
        party: "Democratic".to_string(),
        image_url: Some(format!(
            "https://images.pexels.com/photos/{image}/pexels-photo-{image}.jpeg?auto=compress&cs=tinysrgb&w=200"
        )),
        video_url: None,
        issues: strings(issues),
        match_percentage: Some(match_percentage),
        has_contradictions,
        bio: Some(bio.to_string()),
        experience: strings(experience),
    }
}

/// The candidate list substituted when `GET /candidates` fails.
pub fn fallback_candidates() -> Vec<Candidate> {
    vec![
        candidate(
            "1",
            "Maria Rodriguez",
            "City Council District 4",
            "Manhattan District 4",
            "774909",
            87,
            false,
            "Community organizer with 15 years of experience fighting for affordable housing and education funding.",
            &["Affordable Housing", "Education", "Transportation"],
            &["Community Board 4 Chair", "Housing Rights Coalition Director"],
        ),
        candidate(
            "2",
            "James Chen",
            "City Council District 4",
            "Manhattan District 4",
            "2182970",
            62,
            true,
            "Former prosecutor turned public defender, focused on criminal justice reform and public safety.",
            &["Criminal Justice Reform", "Public Safety", "Small Business"],
            &["ADA Manhattan DA Office", "Legal Aid Society Attorney"],
        ),
        candidate(
            "3",
            "Sarah Thompson",
            "State Assembly District 75",
            "Brooklyn District 75",
            "1181686",
            91,
            false,
            "Environmental lawyer and climate activist working to make NYC carbon neutral by 2030.",
            &["Climate Action", "Green Jobs", "Environmental Justice"],
            &["NRDC Senior Attorney", "Brooklyn Climate Coalition Founder"],
        ),
        candidate(
            "4",
            "David Okafor",
            "Congress NY-10",
            "Manhattan & Brooklyn",
            "1222271",
            54,
            false,
            "Transit engineer and former MTA planner pushing for federal infrastructure and housing investment.",
            &["Infrastructure", "Affordable Housing", "Healthcare"],
            &["MTA Capital Planning Lead", "Tenant Association Treasurer"],
        ),
    ]
}

pub fn elections() -> Vec<Election> {
    vec![
        Election {
            id: "1".to_string(),
            title: "NYC General Election 2024".to_string(),
            kind: ElectionKind::General,
            date: date(2024, 11, 5),
            status: ElectionStatus::Upcoming,
            description: "Citywide elections for Mayor, City Council, and other local offices."
                .to_string(),
            candidates: Some(vec!["1".into(), "2".into(), "3".into()]),
        },
        Election {
            id: "2".to_string(),
            title: "Community Board 4 Elections".to_string(),
            kind: ElectionKind::Micro,
            date: date(2024, 4, 15),
            status: ElectionStatus::Upcoming,
            description: "Local community board elections for Manhattan District 4.".to_string(),
            candidates: None,
        },
        Election {
            id: "3".to_string(),
            title: "School Board District 2".to_string(),
            kind: ElectionKind::Micro,
            date: date(2024, 5, 20),
            status: ElectionStatus::Upcoming,
            description: "Parent and community elections for School Board District 2.".to_string(),
            candidates: None,
        },
    ]
}

pub fn civic_events() -> Vec<CivicEvent> {
    let event = |id: &str, title: &str, subtitle: &str, category: &str, urgency, xp, day| {
        CivicEvent {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            category: category.to_string(),
            urgency,
            xp_reward: xp,
            date: date(2024, 3, day),
        }
    };
    vec![
        event(
            "1",
            "Vote on Bike Lane Expansion",
            "City Council voting on protected bike lanes for your neighborhood this Thursday",
            "Transportation",
            Urgency::High,
            50,
            14,
        ),
        event(
            "2",
            "Complete Your Candidate Quiz",
            "Find your perfect match for the upcoming City Council race",
            "Elections",
            Urgency::Medium,
            25,
            13,
        ),
        event(
            "3",
            "Community Board Meeting Tonight",
            "Housing development proposal discussion at 7 PM",
            "Housing",
            Urgency::Medium,
            30,
            12,
        ),
        event(
            "4",
            "Ask Your Representative",
            "Submit questions about the new education budget proposal",
            "Education",
            Urgency::Low,
            15,
            11,
        ),
    ]
}

pub fn community_questions() -> Vec<Question> {
    let question = |id: &str, author: &str, text: &str, category, likes, answered, ago: &str| {
        Question {
            id: id.to_string(),
            author: author.to_string(),
            question: text.to_string(),
            category,
            likes,
            answered,
            time_ago: ago.to_string(),
        }
    };
    vec![
        question(
            "1",
            "Sarah M.",
            "What is the city doing about the bike lane expansion on 14th Street?",
            QuestionCategory::Transportation,
            23,
            true,
            "2h",
        ),
        question(
            "2",
            "Mike R.",
            "When will the new affordable housing lottery open in District 4?",
            QuestionCategory::Housing,
            18,
            false,
            "4h",
        ),
        question(
            "3",
            "Lisa K.",
            "How can we get more funding for our local school's after-school programs?",
            QuestionCategory::Education,
            31,
            true,
            "1d",
        ),
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "Alex Johnson".to_string(),
        address: "123 Main St, Manhattan, NY 10001".to_string(),
        district: "Manhattan District 4".to_string(),
        xp: 1250,
        metro_points: 340,
        streak_days: 12,
        achievements: strings(&["First Vote", "Quiz Master", "Community Champion", "Civic Streak"]),
    }
}
