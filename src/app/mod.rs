pub mod render;
pub mod screens;
pub mod session;

pub use screens::{AddMenuForm, CourseSelector, DeletePrompt};
pub use session::Session;
