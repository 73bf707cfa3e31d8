//! The signed-in user's own profile, read-only.

use api::profile::load_own_profile;
use dioxus::prelude::*;
use ui::{use_services, use_session};

/// `/` shows the profile too.
#[component]
pub fn Home() -> Element {
    rsx! {
        Profile {}
    }
}

#[component]
pub fn Profile() -> Element {
    let services = use_services();
    let session = use_session();
    let backend = services.backend.clone();

    let profile = use_resource(move || {
        let backend = backend.clone();
        let current = session().session;
        async move { load_own_profile(&backend, current.as_ref()).await }
    });

    rsx! {
        div {
            class: "profile-page",
            h1 { "User Profile" }

            match &*profile.read() {
                None => rsx! {
                    p { class: "page-status", "Loading..." }
                },
                Some(Err(message)) => rsx! {
                    p { class: "form-error", "{message}" }
                },
                Some(Ok(user)) => rsx! {
                    div {
                        class: "profile-rows",
                        for (label, value) in user.detail_rows() {
                            div {
                                key: "{label}",
                                class: "profile-row",
                                p { class: "profile-label", "{label}:" }
                                p { class: "profile-value", "{value}" }
                            }
                        }
                    }
                    div {
                        class: "profile-images",
                        p { class: "profile-label", "Images:" }
                        if user.images.is_empty() {
                            p { "No images available." }
                        } else {
                            div {
                                class: "profile-image-grid",
                                for (index, src) in user.images.iter().enumerate() {
                                    img {
                                        key: "{index}",
                                        src: services.backend.media_url(src),
                                        alt: "User image",
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
