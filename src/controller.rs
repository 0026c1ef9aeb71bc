// controller.rs
//
// Drives a `View` through the fetch-and-render cycle for a selected mood.

use crate::error::RecipeError;
use crate::image::{ImageResolver, ResolvedImage};
use crate::mood::Mood;
use crate::recipe::{Recipe, RenderedRecipe};
use crate::service::RecipeService;
use crate::view::View;

/// The last mood the user picked; lives as long as the page session.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub current_mood: Option<Mood>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    Unavailable,
}

pub struct Controller<S, V> {
    service: S,
    view: V,
    images: ImageResolver,
    probe_images: bool,
    selection: SelectionState,
    another_button: bool,
}

impl<S: RecipeService, V: View> Controller<S, V> {
    pub fn new(service: S, view: V, fallback_image: impl Into<String>) -> Self {
        let images = ImageResolver::new(service.base_url(), fallback_image);
        Self {
            service,
            view,
            images,
            probe_images: false,
            selection: SelectionState::default(),
            another_button: false,
        }
    }

    /// Check primary images with the service before rendering them.
    pub fn with_image_probe(mut self, probe: bool) -> Self {
        self.probe_images = probe;
        self
    }

    #[cfg(test)]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub async fn select_mood(&mut self, mood: Mood) -> Outcome {
        self.view.activate_mood(&mood);
        self.selection.current_mood = Some(mood.clone());
        self.fetch_and_render(&mood, false).await
    }

    /// Re-requests the current mood. `None` when nothing was selected yet.
    pub async fn get_another(&mut self) -> Option<Outcome> {
        let Some(mood) = self.selection.current_mood.clone() else {
            tracing::warn!("another recipe requested before any mood was selected");
            return None;
        };
        Some(self.fetch_and_render(&mood, true).await)
    }

    pub async fn fetch_and_render(&mut self, mood: &Mood, refresh: bool) -> Outcome {
        self.view.show_loading();

        let recipe = match self.service.fetch(mood).await {
            Ok(recipe) => recipe,
            Err(err) => {
                self.fail(mood, &err);
                return Outcome::Unavailable;
            }
        };

        let image = self.resolve_image(&recipe).await;
        let rendered =
            RenderedRecipe::from_recipe(&recipe, self.images.src(&image), self.images.fallback());

        if !self.another_button {
            self.view.add_another_button();
            self.another_button = true;
        }
        self.view.show_result(rendered);
        if refresh {
            self.view.scroll_to_result();
        }

        tracing::info!(%mood, recipe = %recipe.name, refresh, "recipe rendered");
        Outcome::Rendered
    }

    async fn resolve_image(&self, recipe: &Recipe) -> ResolvedImage {
        let image = self.images.resolve(recipe.image_url.as_deref());
        match &image {
            ResolvedImage::Primary(url) if self.probe_images => {
                if !self.service.probe_image(url).await {
                    tracing::info!(%url, "recipe image not loadable, using fallback");
                    return ResolvedImage::Fallback;
                }
            }
            ResolvedImage::Primary(_) => {}
            ResolvedImage::Fallback => tracing::debug!("recipe has no image, using fallback"),
        }
        image
    }

    fn fail(&mut self, mood: &Mood, err: &RecipeError) {
        tracing::warn!(%mood, %err, "recipe unavailable");
        self.view.clear_loading();
        self.view.notify(RecipeError::USER_MESSAGE);
    }
}
