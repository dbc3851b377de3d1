use crate::core::store::MenuStore;
use crate::domain::model::MenuItem;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    AddMenu,
    FilterMenu,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Home => "Home",
            Route::AddMenu => "AddMenu",
            Route::FilterMenu => "FilterMenu",
        };
        f.write_str(name)
    }
}

/// 在畫面之間傳遞的整份菜單
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSnapshot {
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

impl MenuSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl MenuStore {
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            menu_items: self.items().to_vec(),
        }
    }

    pub fn from_snapshot(snapshot: MenuSnapshot) -> Self {
        MenuStore::with_items(snapshot.menu_items)
    }
}

/// Owns the session's single store and the current screen.
///
/// Every screen receives the whole menu as its params, so a screen never
/// holds a private copy that can drift from the store.
#[derive(Debug, Default)]
pub struct Navigator {
    store: MenuStore,
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(store: MenuStore) -> Self {
        Self {
            store,
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn navigate(&mut self, route: Route) -> MenuSnapshot {
        if route != self.current {
            tracing::debug!("Navigating {} -> {}", self.current, route);
            self.history.push(self.current);
            self.current = route;
        }
        self.store.snapshot()
    }

    /// Returns to the previous screen, or stays on Home when there is none.
    pub fn back(&mut self) -> Route {
        self.current = self.history.pop().unwrap_or(Route::Home);
        self.current
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MenuStore {
        &mut self.store
    }

    pub fn into_store(self) -> MenuStore {
        self.store
    }
}
