pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::{
    navigation::{MenuSnapshot, Navigator, Route},
    store::{CourseAverages, MenuStore},
};
pub use domain::model::{Course, MenuDraft, MenuItem};
pub use utils::error::{Field, IndexError, MenuError, Result, ValidationError};
