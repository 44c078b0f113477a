//! Server-rendered pages. Templates live in `templates/` and are compiled
//! into the binary by askama; interpolated values are HTML-escaped.

use askama::Template;

use crate::model::Task;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub tasks: Vec<Task>,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditPage {
    pub task: Task,
}
