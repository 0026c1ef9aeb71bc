// Bring in Askama templating
use askama::Template;

use crate::view::{PageModel, ViewState};

// Define a template struct that references index.html
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub page: &'a PageModel,      // Page to display
    pub stylesheet: &'static str, // Path to CSS file
}

impl<'a> IndexTemplate<'a> {
    pub fn new(page: &'a PageModel) -> Self {
        Self {
            page,
            stylesheet: "/recipe.css",
        }
    }

    fn loading(&self) -> bool {
        self.page.state == ViewState::Loading
    }

    fn showing_result(&self) -> bool {
        self.page.state == ViewState::ShowingResult
    }
}
