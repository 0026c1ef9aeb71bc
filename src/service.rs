// service.rs

use std::future::Future;
use std::time::Duration;

use reqwest::Url;

use crate::error::RecipeError;
use crate::mood::Mood;
use crate::recipe::Recipe;

/// The recipe backend as seen by the controller.
pub trait RecipeService {
    /// One GET for `mood`. Network failure, non-2xx and a bad body are all errors.
    fn fetch(&self, mood: &Mood) -> impl Future<Output = Result<Recipe, RecipeError>> + Send;

    /// Whether `url` looks loadable. Services that cannot tell say yes.
    fn probe_image(&self, _url: &str) -> impl Future<Output = bool> + Send {
        async { true }
    }

    /// Base the service was configured with; relative image paths hang off its origin.
    fn base_url(&self) -> &Url;
}

/// [`RecipeService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecipeService {
    client: reqwest::Client,
    base: Url,
    cuisine: Option<String>,
}

impl HttpRecipeService {
    pub fn new(
        base: Url,
        cuisine: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base,
            cuisine,
        })
    }

    /// `{base}/recipes/{mood}?t=<epoch ms>[&cuisine_type=..]`
    pub fn recipe_url(&self, mood: &Mood) -> Url {
        let mut url = self.base.clone();
        // cannot-be-a-base urls (mailto: and friends) never reach here; clap parses http(s)
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("recipes").push(mood.as_str());
        }
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("t", &chrono::Utc::now().timestamp_millis().to_string());
            if let Some(cuisine) = &self.cuisine {
                query.append_pair("cuisine_type", cuisine);
            }
        }
        url
    }
}

impl RecipeService for HttpRecipeService {
    async fn fetch(&self, mood: &Mood) -> Result<Recipe, RecipeError> {
        let url = self.recipe_url(mood);
        tracing::debug!(%url, "requesting recipe");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::Status(status));
        }
        let body = response.text().await?;
        Recipe::from_json(&body)
    }

    async fn probe_image(&self, url: &str) -> bool {
        if url.starts_with("data:") {
            return true;
        }
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!(url, %err, "image probe failed");
                false
            }
        }
    }

    fn base_url(&self) -> &Url {
        &self.base
    }
}
