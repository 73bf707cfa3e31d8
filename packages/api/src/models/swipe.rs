use serde::{Deserialize, Serialize};

use super::profile::Candidate;

/// The user's answer to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
}

/// Body of `POST /api/searchview/`. Not kept after it is sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwipeDecision {
    pub swiped_user_email: Option<String>,
    pub decision: Verdict,
    pub swiped_by_email: Option<String>,
}

/// Body of `GET /api/search/`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub similar_users: Vec<Candidate>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_wire_shape() {
        let decision = SwipeDecision {
            swiped_user_email: Some("them@example.com".to_string()),
            decision: Verdict::Yes,
            swiped_by_email: Some("me@example.com".to_string()),
        };
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "swiped_user_email": "them@example.com",
                "decision": "yes",
                "swiped_by_email": "me@example.com",
            })
        );
    }

    #[test]
    fn test_search_survives_object_images() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"similar_users": [
                {"name": "Bo", "email": "bo@example.com", "images": [{}, "a.png"]},
                {"name": "Cy", "email": "cy@example.com", "images": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(parsed.similar_users.len(), 2);
        assert_eq!(parsed.similar_users[0].profile.images, vec!["a.png"]);
        assert!(parsed.similar_users[1].profile.images.is_empty());
    }

    #[test]
    fn test_search_response_without_users() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"message": "No similar users found."}"#).unwrap();
        assert!(parsed.similar_users.is_empty());
    }
}
