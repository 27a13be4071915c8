//! Patron roster service

use crate::{
    error::{AppError, AppResult},
    models::patron::{Patron, PatronId},
};

/// In-memory store of registered patrons
#[derive(Debug)]
pub struct Roster {
    patrons: Vec<Patron>,
    next_id: PatronId,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            patrons: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_patrons(patrons: Vec<Patron>) -> AppResult<Self> {
        let highest = patrons.iter().map(|p| p.id).max().unwrap_or(0);
        let next_id = highest.checked_add(1).ok_or_else(|| {
            AppError::CorruptData(format!(
                "Patron id {} leaves no room for new patrons",
                highest
            ))
        })?;
        Ok(Self { patrons, next_id })
    }

    /// Register a new patron with no loans
    pub fn add(&mut self, first_name: &str, last_name: &str) -> AppResult<&Patron> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::Conflict("Patron id space exhausted".to_string()))?;

        tracing::info!("Roster: added patron id={} '{} {}'", id, first_name, last_name);
        self.patrons
            .push(Patron::new(id, first_name.to_string(), last_name.to_string()));
        self.patrons
            .last()
            .ok_or_else(|| AppError::NotFound(format!("Patron with id {} not found", id)))
    }

    pub fn list(&self) -> &[Patron] {
        &self.patrons
    }

    pub fn get(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.iter().find(|p| p.id == id)
    }

    /// Same as [`Roster::get`], but a missing patron is an error
    pub fn require(&self, id: PatronId) -> AppResult<&Patron> {
        self.get(id)
            .ok_or_else(|| AppError::NotFound(format!("Patron with id {} not found", id)))
    }

    pub(crate) fn get_mut(&mut self, id: PatronId) -> Option<&mut Patron> {
        self.patrons.iter_mut().find(|p| p.id == id)
    }
}
