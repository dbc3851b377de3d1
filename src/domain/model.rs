use crate::utils::error::{Field, ValidationError};
use crate::utils::validation::{parse_price, validate_required};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Desserts,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::InvalidCourse(s.to_string()))
    }
}

/// A single dish on the menu.
///
/// Fields are private: an item is only built through [`MenuItem::new`] or by
/// decoding a snapshot, both of which enforce a non-empty dish name and a
/// finite, non-negative price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMenuItem")]
pub struct MenuItem {
    dish_name: String,
    description: String,
    course: Course,
    price: f64,
}

impl MenuItem {
    pub fn new(
        dish_name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let dish_name = dish_name.into();
        validate_required(Field::DishName, &dish_name)?;
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::InvalidPrice(price.to_string()));
        }

        Ok(Self {
            dish_name,
            description: description.into(),
            course,
            price: price + 0.0,
        })
    }

    pub fn dish_name(&self) -> &str {
        &self.dish_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMenuItem {
    dish_name: String,
    #[serde(default)]
    description: String,
    course: Course,
    price: f64,
}

impl TryFrom<RawMenuItem> for MenuItem {
    type Error = ValidationError;

    fn try_from(raw: RawMenuItem) -> Result<Self, Self::Error> {
        MenuItem::new(raw.dish_name, raw.description, raw.course, raw.price)
    }
}

/// 新增菜色表單送出的原始欄位
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDraft {
    pub dish_name: String,
    pub description: String,
    pub course: String,
    pub price: String,
}

impl MenuDraft {
    pub fn new(
        dish_name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            dish_name: dish_name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }

    /// Checks required fields first, then parses course and price; the first
    /// failure wins.
    pub fn parse(&self) -> Result<MenuItem, ValidationError> {
        validate_required(Field::DishName, &self.dish_name)?;
        validate_required(Field::Description, &self.description)?;
        validate_required(Field::Price, &self.price)?;
        let course: Course = self.course.parse()?;
        let price = parse_price(&self.price)?;

        MenuItem::new(
            self.dish_name.trim(),
            self.description.trim(),
            course,
            price,
        )
    }
}
