use crate::*;
use axum::{extract::State, Json};
use utoipa::{OpenApi, ToSchema};
use utoipa_axum::{router::OpenApiRouter, routes};

/// OpenAPI doc container
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "mood-recipe", description = "Recipe view snapshot")
    )
)]
pub struct ApiDoc;

/// Utoipa-compatible router with documented routes
pub fn router() -> OpenApiRouter<SharedState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi()).routes(routes!(get_view))
}

/// API-compatible view of the page
#[derive(serde::Serialize, ToSchema)]
pub struct JsonView {
    state: ViewState,
    current_mood: Option<String>,
    moods: Vec<String>,
    recipe: Option<RenderedRecipe>,
}

impl From<PageModel> for JsonView {
    fn from(page: PageModel) -> Self {
        JsonView {
            state: page.state,
            current_mood: page.selected.map(|mood| mood.to_string()),
            moods: page.moods.into_iter().map(|b| b.mood.to_string()).collect(),
            recipe: page.recipe.filter(|_| page.state == ViewState::ShowingResult),
        }
    }
}

/// Current view state; shows `loading` while a fetch is in flight
#[utoipa::path(
    get,
    path = "/api/view",
    responses(
        (status = 200, description = "Current view state", body = JsonView),
    )
)]
pub async fn get_view(State(app_state): State<SharedState>) -> Json<JsonView> {
    Json(JsonView::from(app_state.view.snapshot()))
}
