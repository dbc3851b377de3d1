use std::fmt;
use thiserror::Error;

/// 表單上的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DishName,
    Description,
    Course,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::DishName => "dish name",
            Field::Description => "description",
            Field::Course => "course",
            Field::Price => "price",
        };
        f.write_str(name)
    }
}

/// `MenuStore::add` 拒絕候選資料時的錯誤
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing field: {0}")]
    MissingField(Field),

    #[error("Invalid course: {0:?}")]
    InvalidCourse(String),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

/// `MenuStore::remove_at` 的錯誤
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Index {index} out of range for menu of {len} items")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },
}

impl MenuError {
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        MenuError::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 呈現給使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::Validation(ValidationError::MissingField(field)) => {
                format!("Please fill in the {}.", field)
            }
            MenuError::Validation(ValidationError::InvalidCourse(raw)) => {
                format!("'{}' is not a course on this menu.", raw)
            }
            MenuError::Validation(ValidationError::InvalidPrice(raw)) => {
                format!("'{}' is not a valid price.", raw)
            }
            MenuError::Index(IndexError::OutOfRange { index, len }) => {
                if *len == 0 {
                    "The menu is empty, there is nothing to delete.".to_string()
                } else {
                    format!("There is no dish number {} on the menu.", index.saturating_add(1))
                }
            }
            MenuError::IoError(e) => format!("Could not read input: {}", e),
            MenuError::SerializationError(e) => format!("Menu data is malformed: {}", e),
            MenuError::TomlError(e) => format!("Configuration file is malformed: {}", e),
            MenuError::ConfigError { field, message } => {
                format!("Configuration problem with '{}': {}", field, message)
            }
        }
    }

    /// 建議的處理方式
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MenuError::Validation(ValidationError::MissingField(_)) => {
                "Dish name, description and price are all required."
            }
            MenuError::Validation(ValidationError::InvalidCourse(_)) => {
                "Choose one of: Starters, Mains, Desserts."
            }
            MenuError::Validation(ValidationError::InvalidPrice(_)) => {
                "Enter the price as a non-negative number, e.g. 45.50."
            }
            MenuError::Index(_) => "Run 'list' to see the current dish numbers.",
            MenuError::IoError(_) => "Check that the terminal input is still open.",
            MenuError::SerializationError(_) => {
                "Pass a JSON object of the form {\"menuItems\": [...]}."
            }
            MenuError::TomlError(_) | MenuError::ConfigError { .. } => {
                "Fix the configuration file or run without --config."
            }
        }
    }

    /// 是否可在不中斷工作階段的情況下繼續
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MenuError::Validation(_) | MenuError::Index(_))
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
