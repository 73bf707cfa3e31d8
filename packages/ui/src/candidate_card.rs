use api::{Candidate, RoomlyClient};
use dioxus::prelude::*;

use crate::use_services;

/// Every image of the candidate, resolved against the backend origin.
fn photo_sources(candidate: &Candidate, backend: &RoomlyClient) -> Vec<String> {
    candidate
        .profile
        .images
        .iter()
        .map(|src| backend.media_url(src))
        .collect()
}

/// Read-only body of a swipe card: name, similarity, the profile rows and
/// the candidate's images.
#[component]
pub fn CandidateCard(candidate: Candidate) -> Element {
    let services = use_services();
    let name = candidate.profile.name.clone().unwrap_or_default();
    let rows = candidate.card_rows();
    let photos = photo_sources(&candidate, &services.backend);
    let similarity = candidate
        .similarity
        .map(|score| format!("{:.0}% match", score * 100.0));

    rsx! {
        div {
            class: "candidate-card",
            h2 { class: "candidate-name", "{name}" }
            if let Some(similarity) = similarity {
                p { class: "candidate-similarity", "{similarity}" }
            }
            dl {
                class: "candidate-rows",
                for (label, value) in rows {
                    div {
                        key: "{label}",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            if photos.is_empty() {
                p { class: "candidate-no-photos", "No images available." }
            } else {
                div {
                    class: "candidate-photos",
                    for (index, src) in photos.into_iter().enumerate() {
                        img {
                            key: "{index}",
                            class: "candidate-photo",
                            src: "{src}",
                            alt: "{name}",
                            draggable: "false",
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserProfile;

    #[test]
    fn test_every_photo_is_resolved() {
        let backend = RoomlyClient::new("http://localhost:8000");
        let candidate = Candidate {
            profile: UserProfile {
                images: vec![
                    "/media/bo-1.png".to_string(),
                    "https://cdn.example/bo-2.png".to_string(),
                ],
                ..Default::default()
            },
            similarity: None,
        };
        assert_eq!(
            photo_sources(&candidate, &backend),
            vec![
                "http://localhost:8000/media/bo-1.png",
                "https://cdn.example/bo-2.png",
            ]
        );
        assert!(photo_sources(&Candidate::default(), &backend).is_empty());
    }
}
