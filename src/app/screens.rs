use crate::core::store::MenuStore;
use crate::domain::model::{Course, MenuDraft, MenuItem};
use crate::utils::error::{Field, IndexError, ValidationError};

/// State of the add-dish form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMenuForm {
    draft: MenuDraft,
}

impl Default for AddMenuForm {
    fn default() -> Self {
        Self {
            draft: MenuDraft {
                course: Course::Starters.to_string(),
                ..MenuDraft::default()
            },
        }
    }
}

impl AddMenuForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::DishName => self.draft.dish_name = value,
            Field::Description => self.draft.description = value,
            Field::Course => self.draft.course = value,
            Field::Price => self.draft.price = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::DishName => &self.draft.dish_name,
            Field::Description => &self.draft.description,
            Field::Course => &self.draft.course,
            Field::Price => &self.draft.price,
        }
    }

    pub fn draft(&self) -> &MenuDraft {
        &self.draft
    }

    /// Adds the dish to the store. The form is cleared on success and left
    /// untouched on error so the user can correct it.
    pub fn submit(&mut self, store: &mut MenuStore) -> Result<MenuItem, ValidationError> {
        let item = store.add(&self.draft)?;
        *self = Self::default();
        Ok(item)
    }
}

/// 課程篩選器；`None` 代表「All Courses」
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseSelector {
    selected: Option<Course>,
}

impl CourseSelector {
    pub const ALL_LABEL: &'static str = "All Courses";

    pub fn options() -> Vec<(&'static str, Option<Course>)> {
        std::iter::once((Self::ALL_LABEL, None))
            .chain(Course::ALL.into_iter().map(|c| (c.as_str(), Some(c))))
            .collect()
    }

    /// Maps selector text to a course; empty text and "all" select every course.
    pub fn select(&mut self, raw: &str) -> Result<Option<Course>, ValidationError> {
        let trimmed = raw.trim();
        self.selected = if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case(Self::ALL_LABEL)
        {
            None
        } else {
            Some(trimmed.parse()?)
        };
        Ok(self.selected)
    }

    pub fn selected(&self) -> Option<Course> {
        self.selected
    }

    pub fn label(&self) -> &'static str {
        self.selected.map_or(Self::ALL_LABEL, |c| c.as_str())
    }
}

/// A delete waiting for the user's confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePrompt {
    index: usize,
}

impl DeletePrompt {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn confirm(self, store: &mut MenuStore) -> Result<MenuItem, IndexError> {
        store.remove_at(self.index)
    }

    pub fn cancel(self) {
        tracing::debug!("Delete of index {} cancelled", self.index);
    }
}
