//! Menu tab selection.
//!
//! The presenter owns the one piece of menu state, the active location id,
//! and turns it into the view the menu section renders. An id the catalog
//! does not know renders the explicit empty state instead of failing.

use crate::catalog::{Location, MenuCatalog, MenuCategory};
use tracing::debug;

/// What the menu section shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuView<'a> {
    /// A known location; categories in display order
    Location(&'a Location),
    /// The requested id is not in the catalog
    Unavailable { requested: String },
}

impl<'a> MenuView<'a> {
    /// Categories to render, empty for the unavailable state.
    pub fn categories(&self) -> &'a [MenuCategory] {
        match *self {
            MenuView::Location(location) => &location.categories,
            MenuView::Unavailable { .. } => &[],
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MenuView::Location(_))
    }
}

/// One entry of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct MenuPresenter<'a> {
    catalog: &'a MenuCatalog,
    active: String,
}

impl<'a> MenuPresenter<'a> {
    /// Start on `initial`, which may or may not be a known id.
    pub fn new(catalog: &'a MenuCatalog, initial: &str) -> Self {
        let mut presenter = Self {
            catalog,
            active: String::new(),
        };
        presenter.select_location(initial);
        presenter
    }

    /// Start on the first declared location.
    pub fn first(catalog: &'a MenuCatalog) -> Self {
        let initial = catalog.first().map(|l| l.id.as_str()).unwrap_or_default();
        Self::new(catalog, initial)
    }

    pub fn select_location(&mut self, id: &str) {
        if !self.catalog.contains(id) {
            debug!("Menu tab '{}' is not in the catalog, showing empty state", id);
        }
        self.active = id.to_string();
    }

    pub fn active_id(&self) -> &str {
        &self.active
    }

    pub fn render(&self) -> MenuView<'a> {
        match self.catalog.get(&self.active) {
            Some(location) => MenuView::Location(location),
            None => MenuView::Unavailable {
                requested: self.active.clone(),
            },
        }
    }

    /// Tab bar in catalog order; no tab is active for an unknown selection.
    pub fn tabs(&self) -> Vec<Tab<'a>> {
        self.catalog
            .locations()
            .iter()
            .map(|location| Tab {
                id: &location.id,
                label: &location.tab_label,
                active: location.id == self.active,
            })
            .collect()
    }
}
