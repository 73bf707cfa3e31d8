//! Image file input and previews for the registration form.

use api::registration::{ImageAttachment, MAX_IMAGES};
use dioxus::prelude::*;

/// Previews as `blob:` object URLs, revoked on release.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlPreviews;

#[cfg(target_arch = "wasm32")]
impl api::registration::PreviewFactory for ObjectUrlPreviews {
    fn create(&self, image: &ImageAttachment) -> String {
        let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&image.content_type);
        let url = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .and_then(|blob| web_sys::Url::create_object_url_with_blob(&blob));
        match url {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Object URL unavailable for {}: {:?}", image.name, e);
                image.data_url()
            }
        }
    }

    fn release(&self, url: &str) {
        if !url.starts_with("blob:") {
            return;
        }
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            tracing::warn!("Failed to revoke {url}: {:?}", e);
        }
    }
}

/// MIME type from a file name, for browsers that report none.
pub fn guess_content_type(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// File input plus the current previews.
///
/// Every picked file is read before `on_files` fires, so the form sees the
/// whole batch at once and can reject it whole.
#[component]
pub fn ImagePicker(
    previews: Vec<String>,
    on_files: EventHandler<Vec<ImageAttachment>>,
    on_remove: EventHandler<usize>,
) -> Element {
    let full = previews.len() >= MAX_IMAGES;

    rsx! {
        div {
            class: "field",
            span { class: "field-label", "Images (up to {MAX_IMAGES})" }
            input {
                r#type: "file",
                accept: "image/*",
                multiple: true,
                disabled: full,
                onchange: move |evt: FormEvent| async move {
                    let mut batch = Vec::new();
                    for file in evt.files() {
                        let name = file.name();
                        let content_type = file
                            .content_type()
                            .filter(|t| !t.is_empty())
                            .unwrap_or_else(|| guess_content_type(&name).to_string());
                        match file.read_bytes().await {
                            Ok(bytes) => batch.push(ImageAttachment::new(name, content_type, bytes.to_vec())),
                            Err(e) => tracing::error!("Could not read {}: {}", name, e),
                        }
                    }
                    if !batch.is_empty() {
                        on_files.call(batch);
                    }
                },
            }
            div {
                class: "image-previews",
                for (index, src) in previews.into_iter().enumerate() {
                    figure {
                        key: "{src}",
                        img { src: "{src}", alt: "Image preview" }
                        button {
                            r#type: "button",
                            onclick: move |_| on_remove.call(index),
                            "Remove"
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

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("me.PNG"), "image/png");
        assert_eq!(guess_content_type("holiday.photo.jpeg"), "image/jpeg");
        assert_eq!(guess_content_type("scan.webp"), "image/webp");
        assert_eq!(guess_content_type("README"), "application/octet-stream");
    }
}
