use crate::domain::model::{Course, MenuDraft, MenuItem};
use crate::utils::error::{IndexError, ValidationError};
use indexmap::IndexMap;
use serde::Serialize;

/// Average price per course, in order of each course's first appearance on
/// the menu. Courses without dishes are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CourseAverages(IndexMap<Course, f64>);

impl CourseAverages {
    pub fn get(&self, course: Course) -> Option<f64> {
        self.0.get(&course).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Course, f64)> + '_ {
        self.0.iter().map(|(course, avg)| (*course, *avg))
    }

    pub fn courses(&self) -> Vec<Course> {
        self.0.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Owns the menu for one session.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    version: u64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以既有的菜單項目建立（例如來自導航參數）
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self { items, version: 0 }
    }

    /// Validates the draft and appends the new dish at the end of the menu.
    pub fn add(&mut self, draft: &MenuDraft) -> Result<MenuItem, ValidationError> {
        let item = match draft.parse() {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!("Rejected dish {:?}: {}", draft.dish_name, e);
                return Err(e);
            }
        };

        self.items.push(item.clone());
        self.version += 1;
        tracing::debug!(
            "Added '{}' ({}) at index {}",
            item.dish_name(),
            item.course(),
            self.items.len() - 1
        );
        Ok(item)
    }

    /// Removes the dish at `index`. Later dishes shift down by one, so indices
    /// held from before the call are stale.
    pub fn remove_at(&mut self, index: usize) -> Result<MenuItem, IndexError> {
        let len = self.items.len();
        if index >= len {
            tracing::warn!("Delete rejected: index {} with {} items", index, len);
            return Err(IndexError::OutOfRange { index, len });
        }

        let removed = self.items.remove(index);
        self.version += 1;
        tracing::debug!("Removed '{}' from index {}", removed.dish_name(), index);
        Ok(removed)
    }

    /// Dishes of the given course in menu order, or every dish for `None`.
    pub fn filter_by_course(
        &self,
        course: Option<Course>,
    ) -> impl Iterator<Item = &MenuItem> + Clone + '_ {
        self.items
            .iter()
            .filter(move |item| course.map_or(true, |c| item.course() == c))
    }

    pub fn average_price_by_course(&self) -> CourseAverages {
        // Running mean per course; a plain sum can overflow for huge prices
        let mut means: IndexMap<Course, (f64, usize)> = IndexMap::new();
        for item in &self.items {
            let (mean, count) = means.entry(item.course()).or_insert((0.0, 0));
            *count += 1;
            *mean += (item.price() - *mean) / *count as f64;
        }

        CourseAverages(
            means
                .into_iter()
                .map(|(course, (mean, _))| (course, round_cents(mean)))
                .collect(),
        )
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.len()
    }

    /// Bumped on every successful add or remove.
    pub fn version(&self) -> u64 {
        self.version
    }
}

fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() {
        return value;
    }
    cents.round() / 100.0
}
