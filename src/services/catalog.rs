//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::item::{Item, ItemId, SearchField},
};

/// In-memory store of catalog items, kept in insertion order
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a catalog from persisted items. Ids continue after the highest one.
    pub fn from_items(items: Vec<Item>) -> AppResult<Self> {
        let highest = items.iter().map(|i| i.id).max().unwrap_or(0);
        let next_id = highest.checked_add(1).ok_or_else(|| {
            AppError::CorruptData(format!("Item id {} leaves no room for new items", highest))
        })?;
        Ok(Self { items, next_id })
    }

    /// Add a new item. `year` is raw user input and must be an integer.
    pub fn add(&mut self, title: &str, author: &str, year: &str) -> AppResult<&Item> {
        let publication_year = year.trim().parse::<i32>().map_err(|_| {
            AppError::Validation(format!("Publication year must be a number, got '{}'", year.trim()))
        })?;

        // Ids are never handed out twice, even after a removal
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::Conflict("Item id space exhausted".to_string()))?;

        tracing::info!("Catalog: added item id={} '{}'", id, title);
        self.items
            .push(Item::new(id, title.to_string(), author.to_string(), publication_year));
        self.items
            .last()
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
    }

    /// Remove an item. Items on loan stay in the catalog until returned.
    pub fn remove(&mut self, id: ItemId) -> AppResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))?;

        if self.items[pos].on_loan {
            return Err(AppError::Conflict(format!(
                "Item '{}' is on loan and cannot be removed",
                self.items[pos].title
            )));
        }

        let removed = self.items.remove(pos);
        tracing::info!("Catalog: removed item id={} '{}'", removed.id, removed.title);
        Ok(removed)
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Case-insensitive exact match on one field
    pub fn find_by(&self, field: SearchField, value: &str) -> Vec<&Item> {
        let wanted = value.to_lowercase();
        let found: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| field.value_of(item).to_lowercase() == wanted)
            .collect();
        tracing::debug!("Catalog search {}='{}': {} result(s)", field, value, found.len());
        found
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
