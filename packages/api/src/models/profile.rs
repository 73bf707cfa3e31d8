//! # Roommate profiles on the wire
//!
//! Three shapes of the same ~20-field record:
//!
//! | Type | Direction | Notes |
//! |------|-----------|-------|
//! | [`UserProfile`] | `GET /api/user/` | Every field optional: the backend allows blanks and nulls. |
//! | [`Candidate`] | `GET /api/search/` | A profile plus the backend's `similarity` score. |
//! | [`RegistrationRecord`] | `POST /api/register/` | Fully populated, validated, with the password and image payloads. |
//!
//! The backend uses camelCase field names except for the two gender fields:
//! `yourgender` (the user's own) and `gender` (the preference).

use serde::{Deserialize, Serialize};

/// A stored profile as returned by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    #[serde(rename = "yourgender")]
    pub own_gender: Option<String>,
    #[serde(rename = "gender")]
    pub gender_preference: Option<String>,
    pub daily_routine: Option<String>,
    pub priorities: Option<String>,
    pub wake_up_time: Option<String>,
    pub bed_time: Option<String>,
    pub home_space_use: Option<String>,
    pub biggest_stressors: Option<String>,
    pub worst_habit: Option<String>,
    pub deal_breakers: Option<String>,
    pub neatness_preference: Option<String>,
    pub pets: Option<String>,
    pub overnight_guests: Option<String>,
    pub confrontation_style: Option<String>,
    pub sunday_night_activity: Option<String>,
    pub roommate_self_assessment: Option<String>,
    pub move_in_date: Option<String>,
    pub move_out_date: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    #[serde(default, deserialize_with = "image_sources")]
    pub images: Vec<String>,
}

/// `images` is free-form JSON on the backend: null, or a list whose entries
/// are not always strings. Only the string entries are image sources.
fn image_sources<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries =
        Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut sources = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            serde_json::Value::String(src) => sources.push(src),
            other => tracing::warn!("Skipping non-string image entry: {}", other),
        }
    }
    Ok(sources)
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl UserProfile {
    /// Label/value pairs for the profile page, in display order.
    ///
    /// Values are shown verbatim; absent fields render as empty strings.
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", text(&self.name)),
            ("Email", text(&self.email)),
            ("Age", self.age.map(|a| a.to_string()).unwrap_or_default()),
            ("Gender", text(&self.own_gender)),
            ("Gender Preference", text(&self.gender_preference)),
            ("Daily Routine", text(&self.daily_routine)),
            ("Priorities", text(&self.priorities)),
            ("Wake Up Time", text(&self.wake_up_time)),
            ("Bed Time", text(&self.bed_time)),
            ("Home Space Use", text(&self.home_space_use)),
            ("Biggest Stressors", text(&self.biggest_stressors)),
            ("Worst Habit", text(&self.worst_habit)),
            ("Deal Breakers", text(&self.deal_breakers)),
            ("Neatness Preference", text(&self.neatness_preference)),
            ("Overnight Guests", text(&self.overnight_guests)),
            ("Confrontation Style", text(&self.confrontation_style)),
            ("Pets", text(&self.pets)),
            ("Sunday Night Activity", text(&self.sunday_night_activity)),
            ("Roommate Self-Assessment", text(&self.roommate_self_assessment)),
            ("Move In Date", text(&self.move_in_date)),
            ("Move Out Date", text(&self.move_out_date)),
            ("Country", text(&self.country)),
            ("State", text(&self.state)),
            ("City", text(&self.city)),
        ]
    }
}

/// A prospective match shown on a swipe card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub similarity: Option<f64>,
}

impl Candidate {
    /// Identity used in swipe decisions.
    pub fn email(&self) -> Option<&str> {
        self.profile.email.as_deref()
    }

    /// Label/value pairs for the card body (the name is the card title).
    pub fn card_rows(&self) -> Vec<(&'static str, String)> {
        let p = &self.profile;
        let or_na = |v: &Option<String>| match v.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => "N/A".to_string(),
        };
        vec![
            ("Email", text(&p.email)),
            ("Age", p.age.map(|a| a.to_string()).unwrap_or_default()),
            ("Daily Routine", text(&p.daily_routine)),
            ("Priorities", text(&p.priorities)),
            ("Gender", text(&p.own_gender)),
            ("Wake Up Time", text(&p.wake_up_time)),
            ("Bed Time", text(&p.bed_time)),
            ("Neatness Preference", text(&p.neatness_preference)),
            ("Pets", text(&p.pets)),
            ("Overnight Guests", text(&p.overnight_guests)),
            ("Move In Date", or_na(&p.move_in_date)),
            ("Move Out Date", or_na(&p.move_out_date)),
            ("Country", text(&p.country)),
            ("State", text(&p.state)),
            ("City", text(&p.city)),
        ]
    }
}

/// Full registration payload for `POST /api/register/`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub password: String,
    #[serde(rename = "yourgender")]
    pub own_gender: String,
    #[serde(rename = "gender")]
    pub gender_preference: String,
    pub daily_routine: String,
    pub priorities: String,
    pub wake_up_time: String,
    pub bed_time: String,
    pub home_space_use: String,
    pub biggest_stressors: String,
    pub worst_habit: String,
    pub deal_breakers: String,
    pub neatness_preference: String,
    pub pets: String,
    pub overnight_guests: String,
    pub confrontation_style: String,
    pub sunday_night_activity: String,
    pub roommate_self_assessment: String,
    pub move_in_date: String,
    pub move_out_date: String,
    pub country: String,
    pub state: String,
    pub city: String,
    /// `data:` URLs, one per attached image.
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_backend_shape() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "age": 29,
            "yourgender": "Female",
            "gender": "Any",
            "dailyRoutine": "Up early, gym, work from home most days.",
            "wakeUpTime": "06:30:00",
            "moveInDate": "2024-05-01",
            "moveOutDate": null,
            "images": null
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.age, Some(29));
        assert_eq!(profile.own_gender.as_deref(), Some("Female"));
        assert_eq!(profile.gender_preference.as_deref(), Some("Any"));
        assert_eq!(profile.wake_up_time.as_deref(), Some("06:30:00"));
        assert!(profile.move_out_date.is_none());
        assert!(profile.images.is_empty());
        assert!(profile.city.is_none());
    }

    #[test]
    fn test_non_string_images_are_skipped() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "Ada", "images": [{}, "a.png", 7]}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.images, vec!["a.png"]);

        let profile: UserProfile = serde_json::from_str(r#"{"images": [{}, {}]}"#).unwrap();
        assert!(profile.images.is_empty());
    }

    #[test]
    fn test_detail_rows_are_verbatim() {
        let profile = UserProfile {
            name: Some("Ada".to_string()),
            age: Some(29),
            city: Some("Lyon".to_string()),
            ..Default::default()
        };
        let rows = profile.detail_rows();
        assert_eq!(rows[0], ("Name", "Ada".to_string()));
        assert_eq!(rows[2], ("Age", "29".to_string()));
        assert_eq!(rows.last(), Some(&("City", "Lyon".to_string())));
        assert!(rows.iter().any(|(label, value)| *label == "Pets" && value.is_empty()));
    }

    #[test]
    fn test_candidate_flattens_profile() {
        let json = r#"{"name": "Bo", "email": "bo@example.com", "moveInDate": null, "similarity": 0.82}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.email(), Some("bo@example.com"));
        assert_eq!(candidate.similarity, Some(0.82));

        let rows = candidate.card_rows();
        assert!(rows.contains(&("Move In Date", "N/A".to_string())));
    }

    #[test]
    fn test_registration_record_field_names() {
        let record = RegistrationRecord {
            own_gender: "Male".to_string(),
            gender_preference: "Any".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["yourgender"], "Male");
        assert_eq!(json["gender"], "Any");
        assert!(json.get("roommateSelfAssessment").is_some());
        assert!(json.get("moveInDate").is_some());
        assert!(json.get("images").unwrap().as_array().unwrap().is_empty());
    }
}
