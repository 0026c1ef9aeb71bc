// config.rs

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::mood::Mood;

pub const DEFAULT_FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1546069901-ba9599a7e63c";

/// Mood-based recipe page in front of a recipe service.
#[derive(Debug, Clone, Parser)]
#[command(name = "mood-recipe", version)]
pub struct Config {
    /// Base URL of the recipe service
    #[arg(long, env = "RECIPE_SERVICE_URL", default_value = "http://localhost:8000")]
    pub service_url: Url,

    /// Address the page is served on
    #[arg(long, env = "MOOD_RECIPE_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Image shown when a recipe has none or its image fails to load
    #[arg(long, env = "MOOD_RECIPE_FALLBACK_IMAGE", default_value = DEFAULT_FALLBACK_IMAGE)]
    pub fallback_image: String,

    /// Mood buttons, comma separated
    #[arg(
        long,
        env = "MOOD_RECIPE_MOODS",
        value_delimiter = ',',
        default_value = "happy,sad,excited,energetic"
    )]
    pub moods: Vec<Mood>,

    /// Cuisine preference forwarded with every request
    #[arg(long, env = "MOOD_RECIPE_CUISINE")]
    pub cuisine: Option<String>,

    /// Give up on the recipe service after this many seconds (default: wait)
    #[arg(long, env = "MOOD_RECIPE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// HEAD-check recipe images and use the fallback when they do not load
    #[arg(long)]
    pub probe_images: bool,

    /// Directory holding recipe.css
    #[arg(long, default_value = "assets/static")]
    pub assets: PathBuf,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_service() {
        let config = Config::try_parse_from(["mood-recipe"]).unwrap();

        assert_eq!(config.service_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.fallback_image, DEFAULT_FALLBACK_IMAGE);
        let moods: Vec<_> = config.moods.iter().map(Mood::as_str).collect();
        assert_eq!(moods, ["happy", "sad", "excited", "energetic"]);
        assert_eq!(config.timeout(), None);
        assert!(!config.probe_images);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "mood-recipe",
            "--service-url",
            "https://recipes.example/api",
            "--moods",
            "cozy,tired",
            "--cuisine",
            "Thai",
            "--timeout-secs",
            "15",
            "--probe-images",
        ])
        .unwrap();

        assert_eq!(config.service_url.path(), "/api");
        assert_eq!(config.moods.len(), 2);
        assert_eq!(config.cuisine.as_deref(), Some("Thai"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert!(config.probe_images);
    }

    #[test]
    fn empty_mood_is_rejected() {
        assert!(Config::try_parse_from(["mood-recipe", "--moods", "happy,,sad"]).is_err());
        assert!(Config::try_parse_from(["mood-recipe", "--service-url", "not a url"]).is_err());
    }
}
