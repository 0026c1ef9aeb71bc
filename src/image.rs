// image.rs

use reqwest::Url;

/// Outcome of picking the picture for a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage {
    Primary(String),
    Fallback,
}

/// Decides which image a rendered recipe points at.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    origin: Url,
    fallback: String,
}

impl ImageResolver {
    /// `service` may carry a path; only its scheme, host and port are kept.
    pub fn new(service: &Url, fallback: impl Into<String>) -> Self {
        let mut origin = service.clone();
        origin.set_path("/");
        origin.set_query(None);
        origin.set_fragment(None);
        Self {
            origin,
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn resolve(&self, image_url: Option<&str>) -> ResolvedImage {
        let Some(raw) = image_url.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return ResolvedImage::Fallback;
        };
        if Url::parse(raw).is_ok() {
            return ResolvedImage::Primary(raw.to_string());
        }
        match self.origin.join(raw) {
            Ok(url) => ResolvedImage::Primary(url.to_string()),
            Err(err) => {
                tracing::warn!(image_url = raw, %err, "unusable image url, using fallback");
                ResolvedImage::Fallback
            }
        }
    }

    /// The `src` a view should show for `image`.
    pub fn src(&self, image: &ResolvedImage) -> String {
        match image {
            ResolvedImage::Primary(url) => url.clone(),
            ResolvedImage::Fallback => self.fallback.clone(),
        }
    }
}
