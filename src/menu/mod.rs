//! Console front-end: renders the numbered menu, collects answers from the
//! operator, and hands them to the persistence layer.

mod app;
mod forms;
mod helpers;

pub use app::App;
pub use forms::MenuChoice;
pub use helpers::menu_text;
