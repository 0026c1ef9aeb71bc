// recipe.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::RecipeError;

/// Recipe as the recipe service sends it. Read-only on our side.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    /// Newline separated, usually `- ` bulleted.
    pub ingredients: String,
    /// Newline separated, usually `1. ` numbered.
    pub instructions: String,
    #[serde(default)]
    pub cooking_time: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn from_json(body: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Short label/value pair shown under the title, e.g. `Difficulty: easy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// Recipe shaped for display. Built completely before it reaches a view, so a
/// view never holds half a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RenderedRecipe {
    pub name: String,
    pub facts: Vec<Fact>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_src: String,
    pub fallback_image: String,
}

impl RenderedRecipe {
    pub fn from_recipe(recipe: &Recipe, image_src: String, fallback_image: &str) -> Self {
        let facts = [
            ("Cooking time", &recipe.cooking_time),
            ("Difficulty", &recipe.difficulty_level),
            ("Cuisine", &recipe.cuisine_type),
            ("Category", &recipe.category),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then(|| Fact {
                label: label.to_string(),
                value: value.to_string(),
            })
        })
        .collect();

        Self {
            name: recipe.name.clone(),
            facts,
            ingredients: ingredient_lines(&recipe.ingredients),
            instructions: instruction_steps(&recipe.instructions),
            image_src,
            fallback_image: fallback_image.to_string(),
        }
    }
}

/// Non-blank lines of an ingredient block with bullets removed.
pub fn ingredient_lines(text: &str) -> Vec<String> {
    non_blank_lines(text).map(|line| strip_bullet(line).to_string()).collect()
}

/// Non-blank lines of an instruction block with `N.` ordinals removed.
pub fn instruction_steps(text: &str) -> Vec<String> {
    non_blank_lines(text).map(|line| strip_ordinal(line).to_string()).collect()
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

const BULLETS: [char; 3] = ['-', '*', '•'];

/// `"- 2 eggs"` -> `"2 eggs"`. A marker only counts when whitespace follows it.
pub fn strip_bullet(line: &str) -> &str {
    let line = line.trim_start();
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(marker), Some(next)) if BULLETS.contains(&marker) && next.is_whitespace() => {
            line[marker.len_utf8()..].trim_start()
        }
        _ => line,
    }
}

/// `"12. Bake"` -> `"Bake"`.
pub fn strip_ordinal(line: &str) -> &str {
    let line = line.trim_start();
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    match rest.strip_prefix('.') {
        Some(step) => step.trim_start(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe::from_json(
            r#"{
                "name": "Sunny Pancakes",
                "ingredients": "- 2 eggs\n\n- 1 cup flour\n  \n* pinch of salt",
                "instructions": "1. Mix\n2. Bake\n\n3. Serve",
                "cooking_time": "20 minutes",
                "difficulty_level": "easy",
                "cuisine_type": null,
                "image_url": null,
                "moods": "happy"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn instructions_drop_blank_lines_and_ordinals() {
        assert_eq!(
            instruction_steps("1. Mix\n2. Bake\n\n3. Serve"),
            ["Mix", "Bake", "Serve"]
        );
    }

    #[test]
    fn ingredients_keep_order_and_lose_bullets() {
        assert_eq!(
            ingredient_lines(&pancakes().ingredients),
            ["2 eggs", "1 cup flour", "pinch of salt"]
        );
    }

    #[test]
    fn lines_without_markers_pass_through() {
        assert_eq!(strip_bullet("-1 tsp chili"), "-1 tsp chili");
        assert_eq!(strip_bullet("• basil"), "basil");
        assert_eq!(strip_ordinal("Preheat oven"), "Preheat oven");
        assert_eq!(strip_ordinal("350 degrees"), "350 degrees");
        assert_eq!(strip_ordinal("10.Rest"), "Rest");
    }

    #[test]
    fn windows_line_endings_are_split() {
        assert_eq!(instruction_steps("1. Mix\r\n2. Bake\r\n"), ["Mix", "Bake"]);
    }

    #[test]
    fn only_present_facts_are_rendered() {
        let rendered = RenderedRecipe::from_recipe(&pancakes(), "img".into(), "fallback");
        let labels: Vec<_> = rendered.facts.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Cooking time", "Difficulty"]);
        assert_eq!(rendered.name, "Sunny Pancakes");
        assert_eq!(rendered.image_src, "img");
        assert_eq!(rendered.fallback_image, "fallback");
    }

    #[test]
    fn payload_without_required_fields_is_malformed() {
        let err = Recipe::from_json(r#"{"ingredients": "", "instructions": ""}"#).unwrap_err();
        assert!(matches!(err, RecipeError::Malformed(_)));
        assert!(Recipe::from_json("<html>oops</html>").is_err());
    }
}
