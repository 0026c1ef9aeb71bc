use crate::*;
use askama::Template;
use axum::{
    extract::{Path, State},
    http,
    response::{self, IntoResponse},
    routing, Json, Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::services;

pub type PageController = Controller<HttpRecipeService, HtmlView>;

/// One page per process: every browser shares the selected mood, the shown
/// recipe and the view state, the way a single open page would.
pub struct AppState {
    /// Held for a whole fetch plus the render that answers it, so mood
    /// requests run one at a time and each sees its own outcome.
    pub controller: Mutex<PageController>,
    /// Same page the controller draws on; readable while a fetch is in flight.
    pub view: HtmlView,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(service: HttpRecipeService, config: &Config) -> SharedState {
        let view = HtmlView::new(PageModel::new(config.moods.clone()));
        let controller = Controller::new(service, view.clone(), config.fallback_image.clone())
            .with_image_probe(config.probe_images);
        Arc::new(AppState {
            controller: Mutex::new(controller),
            view,
        })
    }
}

/// Page routes, the JSON snapshot and its OpenAPI document.
pub fn router(state: SharedState, assets: &std::path::Path) -> Router {
    let (api, openapi) = api::router().split_for_parts();

    Router::new()
        .route("/", routing::get(get_page))
        .route("/mood/{mood}", routing::get(select_mood))
        .route("/another", routing::get(get_another))
        // Serve static CSS file (must match file path & MIME)
        .route_service(
            "/recipe.css",
            services::ServeFile::new_with_mime(assets.join("recipe.css"), &mime::TEXT_CSS_UTF_8),
        )
        .route(
            "/api-docs/openapi.json",
            routing::get(move || async move { Json(openapi) }),
        )
        .merge(api)
        .with_state(state)
}

fn render(page: &PageModel) -> Result<response::Html<String>, http::StatusCode> {
    IndexTemplate::new(page)
        .render()
        .map(response::Html)
        .map_err(|e| {
            tracing::error!("page render failed: {}", e);
            http::StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// HTML handler for the current page
pub async fn get_page(
    State(app_state): State<SharedState>,
) -> Result<response::Html<String>, http::StatusCode> {
    render(&app_state.view.page_for_visit())
}

/// HTML handler for picking a mood
pub async fn select_mood(
    State(app_state): State<SharedState>,
    Path(mood): Path<String>,
) -> Result<response::Html<String>, http::StatusCode> {
    let mood = Mood::new(mood).map_err(|_| http::StatusCode::BAD_REQUEST)?;
    let mut controller = app_state.controller.lock().await;
    controller.select_mood(mood).await;
    let page = app_state.view.take_for_render();
    drop(controller);
    render(&page)
}

/// HTML handler for "Get Another Recipe"
pub async fn get_another(
    State(app_state): State<SharedState>,
) -> Result<response::Response, http::StatusCode> {
    let mut controller = app_state.controller.lock().await;
    if controller.get_another().await.is_none() {
        return Ok(response::Redirect::to("/").into_response());
    }
    let page = app_state.view.take_for_render();
    drop(controller);
    render(&page).map(IntoResponse::into_response)
}
