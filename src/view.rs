// view.rs

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use utoipa::ToSchema;

use crate::mood::{self, Mood, MoodButton};
use crate::recipe::RenderedRecipe;

/// Which of the loading indicator and the result panel is visible.
/// Never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ViewState {
    #[default]
    Neutral,
    Loading,
    ShowingResult,
}

/// The surface the controller draws on. Calls arrive in the order the
/// controller performs its steps.
pub trait View {
    fn activate_mood(&mut self, mood: &Mood);
    fn show_loading(&mut self);
    /// Failure path: hide the loading indicator and leave the result panel hidden.
    fn clear_loading(&mut self);
    fn add_another_button(&mut self);
    fn show_result(&mut self, recipe: RenderedRecipe);
    fn scroll_to_result(&mut self);
    fn notify(&mut self, message: &str);
}

/// Everything the HTML page needs to draw itself.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub moods: Vec<MoodButton>,
    pub selected: Option<Mood>,
    pub state: ViewState,
    pub recipe: Option<RenderedRecipe>,
    pub another_button: bool,
    pub scroll_to_result: bool,
    pub notification: Option<String>,
}

impl PageModel {
    pub fn new(moods: Vec<Mood>) -> Self {
        Self {
            moods: moods
                .into_iter()
                .map(|mood| MoodButton { mood, active: false })
                .collect(),
            ..Self::default()
        }
    }
}

/// [`View`] backed by a shared [`PageModel`]; the web layer renders from it.
#[derive(Debug, Clone)]
pub struct HtmlView {
    page: Arc<RwLock<PageModel>>,
}

impl HtmlView {
    pub fn new(page: PageModel) -> Self {
        Self {
            page: Arc::new(RwLock::new(page)),
        }
    }

    pub fn snapshot(&self) -> PageModel {
        self.page.read().clone()
    }

    /// The page as a plain visit sees it: no notification, no scroll. Those
    /// belong to the request that caused them.
    pub fn page_for_visit(&self) -> PageModel {
        PageModel {
            notification: None,
            scroll_to_result: false,
            ..self.snapshot()
        }
    }

    /// Snapshot for the render that answers a controller action. The
    /// notification and the scroll request are handed out once and then cleared.
    pub fn take_for_render(&self) -> PageModel {
        let mut page = self.page.write();
        let snapshot = page.clone();
        page.notification = None;
        page.scroll_to_result = false;
        snapshot
    }
}

impl View for HtmlView {
    fn activate_mood(&mut self, selected: &Mood) {
        let mut page = self.page.write();
        mood::activate(&mut page.moods, selected);
        page.selected = Some(selected.clone());
    }

    fn show_loading(&mut self) {
        let mut page = self.page.write();
        page.state = ViewState::Loading;
        page.scroll_to_result = false;
    }

    fn clear_loading(&mut self) {
        self.page.write().state = ViewState::Neutral;
    }

    fn add_another_button(&mut self) {
        self.page.write().another_button = true;
    }

    fn show_result(&mut self, recipe: RenderedRecipe) {
        let mut page = self.page.write();
        page.recipe = Some(recipe);
        page.state = ViewState::ShowingResult;
    }

    fn scroll_to_result(&mut self) {
        self.page.write().scroll_to_result = true;
    }

    fn notify(&mut self, message: &str) {
        self.page.write().notification = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::tests::moods;

    #[test]
    fn notification_is_rendered_once() {
        let mut view = HtmlView::new(PageModel::new(moods(&["happy"])));
        view.show_loading();
        view.clear_loading();
        view.notify("nothing today");

        let first = view.take_for_render();
        let second = view.take_for_render();

        assert_eq!(first.notification.as_deref(), Some("nothing today"));
        assert_eq!(first.state, ViewState::Neutral);
        assert_eq!(second.notification, None);
    }

    #[test]
    fn plain_visit_leaves_notification_for_its_owner() {
        let mut view = HtmlView::new(PageModel::new(moods(&["happy"])));
        view.notify("nothing today");
        view.scroll_to_result();

        let visit = view.page_for_visit();
        let owner = view.take_for_render();

        assert_eq!(visit.notification, None);
        assert!(!visit.scroll_to_result);
        assert_eq!(owner.notification.as_deref(), Some("nothing today"));
        assert!(owner.scroll_to_result);
    }

    #[test]
    fn clones_share_one_page() {
        let view = HtmlView::new(PageModel::new(moods(&["happy", "sad"])));
        let mut writer = view.clone();

        writer.activate_mood(&Mood::new("sad").unwrap());
        writer.show_loading();

        let page = view.snapshot();
        assert_eq!(page.state, ViewState::Loading);
        assert_eq!(page.selected.unwrap().as_str(), "sad");
        assert!(page.moods[1].active && !page.moods[0].active);
    }
}
