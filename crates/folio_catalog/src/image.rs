//! Preview images with a placeholder fallback

/// Placeholder shown when a preview image fails to load
pub const DEFAULT_PLACEHOLDER_URL: &str =
    "https://placehold.co/600x400/818cf8/ffffff?text=Previsualizaci%C3%B3n";

/// Load state of a preview image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageState {
    /// Requested, no outcome reported yet
    Pending,
    /// The requested source loaded
    Loaded,
    /// The requested source failed and the placeholder was substituted
    Fallback,
}

/// A project card's preview image.
///
/// The first load failure swaps the source for the placeholder. There is no
/// retry; later failures keep the placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewImage {
    requested: String,
    src: String,
    state: ImageState,
}

impl PreviewImage {
    pub fn new(src: impl Into<String>) -> Self {
        let src = src.into();
        Self {
            requested: src.clone(),
            src,
            state: ImageState::Pending,
        }
    }

    /// Source currently displayed
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Source originally requested
    pub fn requested(&self) -> &str {
        &self.requested
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    pub fn on_load(&mut self) {
        if self.state == ImageState::Pending {
            self.state = ImageState::Loaded;
        }
    }

    /// Report a load failure, substituting `placeholder` for the source
    pub fn on_error(&mut self, placeholder: &str) {
        if self.state == ImageState::Fallback {
            return;
        }
        tracing::debug!(
            "PreviewImage::on_error - {} failed, using placeholder",
            self.requested
        );
        self.src = placeholder.to_string();
        self.state = ImageState::Fallback;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_substitutes_placeholder() {
        let mut image = PreviewImage::new("https://example.invalid/preview.png");
        image.on_error(DEFAULT_PLACEHOLDER_URL);

        assert_eq!(image.src(), DEFAULT_PLACEHOLDER_URL);
        assert_eq!(image.requested(), "https://example.invalid/preview.png");
        assert_eq!(image.state(), ImageState::Fallback);
    }

    #[test]
    fn substitution_is_one_shot() {
        let mut image = PreviewImage::new("a.png");
        image.on_error("first.png");
        image.on_error("second.png");
        image.on_load();

        assert_eq!(image.src(), "first.png");
        assert_eq!(image.state(), ImageState::Fallback);
    }

    #[test]
    fn successful_load_keeps_source() {
        let mut image = PreviewImage::new("a.png");
        image.on_load();
        assert_eq!(image.src(), "a.png");
        assert_eq!(image.state(), ImageState::Loaded);
    }
}
