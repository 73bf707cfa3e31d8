//! Profile images picked during registration.
//!
//! At most [`MAX_IMAGES`] are held. Each one gets a preview URL from a
//! [`PreviewFactory`]; the handle is released exactly once, when the image is
//! removed, when the set is cleared, or when the set is dropped.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

pub const MAX_IMAGES: usize = 2;

/// A picked file, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// `data:<mime>;base64,<payload>`, the form sent to the backend.
    pub fn data_url(&self) -> String {
        let mime = if self.content_type.is_empty() {
            "application/octet-stream"
        } else {
            &self.content_type
        };
        format!("data:{};base64,{}", mime, STANDARD.encode(&self.bytes))
    }
}

/// Creates and releases preview URLs.
pub trait PreviewFactory {
    fn create(&self, image: &ImageAttachment) -> String;
    fn release(&self, url: &str);
}

/// Previews as `data:` URLs; nothing to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlPreviews;

impl PreviewFactory for DataUrlPreviews {
    fn create(&self, image: &ImageAttachment) -> String {
        image.data_url()
    }

    fn release(&self, _url: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("You can only upload a maximum of 2 images.")]
    TooMany,
}

/// The images attached to a registration, with their previews.
pub struct ImageAttachments<F: PreviewFactory> {
    factory: F,
    items: Vec<(ImageAttachment, String)>,
}

impl<F: PreviewFactory> ImageAttachments<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a batch. A batch that would exceed [`MAX_IMAGES`] is rejected whole.
    pub fn attach(&mut self, batch: Vec<ImageAttachment>) -> Result<(), AttachError> {
        if self.items.len() + batch.len() > MAX_IMAGES {
            tracing::warn!(
                "Rejected {} image(s); {} already attached",
                batch.len(),
                self.items.len()
            );
            return Err(AttachError::TooMany);
        }
        for image in batch {
            let preview = self.factory.create(&image);
            self.items.push((image, preview));
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<ImageAttachment> {
        if index >= self.items.len() {
            return None;
        }
        let (image, preview) = self.items.remove(index);
        self.factory.release(&preview);
        Some(image)
    }

    pub fn clear(&mut self) {
        for (_, preview) in self.items.drain(..) {
            self.factory.release(&preview);
        }
    }

    pub fn previews(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(_, preview)| preview.as_str())
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageAttachment> {
        self.items.iter().map(|(image, _)| image)
    }

    pub fn data_urls(&self) -> Vec<String> {
        self.images().map(ImageAttachment::data_url).collect()
    }
}

impl<F: PreviewFactory> Drop for ImageAttachments<F> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<F: PreviewFactory> std::fmt::Debug for ImageAttachments<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachments")
            .field("names", &self.images().map(|i| &i.name).collect::<Vec<_>>())
            .finish()
    }
}
