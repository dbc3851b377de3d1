pub mod navigation;
pub mod store;

pub use crate::domain::model::{Course, MenuDraft, MenuItem};
pub use crate::domain::ports::{DefaultDisplay, DisplaySettings};
pub use crate::utils::error::Result;
