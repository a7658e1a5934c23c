//! Menu catalogue as edited from the menu-management screen

use crate::core::error::Error;
use crate::models::{Category, MenuItem};
use crate::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The cafe's editable list of menu items
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Creates an empty menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps items loaded from a data source
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Appends a new item under a freshly generated id.
    ///
    /// Whatever id the draft carries is replaced.
    pub fn add(&mut self, mut draft: MenuItem) -> Result<&MenuItem> {
        draft.validate()?;
        draft.id = format!("item-{}", Uuid::new_v4().simple());

        log::info!("Menu item {} added as {}", draft.name, draft.id);
        self.items.push(draft);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Replaces the item with the same id
    pub fn update(&mut self, item: MenuItem) -> Result<()> {
        item.validate()?;
        let slot = self
            .items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| Error::NotFound(format!("menu item {}", item.id)))?;

        log::info!("Menu item {} updated", item.id);
        *slot = item;
        Ok(())
    }

    /// Deletes an item and returns it
    pub fn remove(&mut self, item_id: &str) -> Result<MenuItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| Error::NotFound(format!("menu item {}", item_id)))?;

        log::info!("Menu item {} removed", item_id);
        Ok(self.items.remove(index))
    }

    pub fn get(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Finds an item by exact id or, failing that, by case-insensitive name
    pub fn lookup(&self, key: &str) -> Option<&MenuItem> {
        self.get(key).or_else(|| {
            self.items
                .iter()
                .find(|item| item.name.eq_ignore_ascii_case(key.trim()))
        })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
