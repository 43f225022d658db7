//! Persistence boundary.
//!
//! The real store is a hosted backend; `MemoryStore` keeps rows in process
//! for tests and offline use.

use crate::artwork::{Artwork, ArtworkRow, NewArtwork, UserId};
use crate::id::ArtworkId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(ArtworkId),
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "artwork {id} not found"),
            StoreError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Row storage for artworks, scoped by owner.
pub trait ArtworkStore {
    /// Store a new artwork for `user`, returning the stored record with
    /// its assigned id and creation time.
    fn insert(&mut self, user: &UserId, artwork: NewArtwork) -> Result<Artwork, StoreError>;

    /// Every artwork owned by `user`, newest first.
    fn list(&self, user: &UserId) -> Result<Vec<Artwork>, StoreError>;

    fn delete(&mut self, id: ArtworkId) -> Result<(), StoreError>;
}

type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// In-process `ArtworkStore`.
pub struct MemoryStore {
    rows: Vec<ArtworkRow>,
    clock: Clock,
    /// Next sequence number to try when assigning an id.
    next_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Box::new(Utc::now))
    }

    /// Use `clock` for creation timestamps.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            rows: Vec::new(),
            clock,
            next_id: 0,
        }
    }

    /// Load rows from the backend's JSON array form.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let rows: Vec<ArtworkRow> =
            serde_json::from_str(json).map_err(|e| StoreError::Backend(e.to_string()))?;
        let mut store = Self::new();
        store.next_id = rows
            .iter()
            .filter_map(|r| r.id.sequence_number())
            .max()
            .map_or(0, |n| n + 1);
        store.rows = rows;
        Ok(store)
    }

    /// Dump all rows as a JSON array.
    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.rows).map_err(|e| StoreError::Backend(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// An id no stored row uses.
    fn assign_id(&mut self) -> ArtworkId {
        loop {
            let id = ArtworkId::sequenced(self.next_id);
            self.next_id += 1;
            if !self.rows.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }
}

impl ArtworkStore for MemoryStore {
    fn insert(&mut self, user: &UserId, artwork: NewArtwork) -> Result<Artwork, StoreError> {
        if artwork.image_data.is_empty() {
            return Err(StoreError::Backend("image_data must not be empty".into()));
        }
        let row = ArtworkRow {
            id: self.assign_id(),
            user_id: user.clone(),
            image_data: artwork.image_data,
            created_at: (self.clock)(),
            title: artwork.title,
            mood: artwork.mood,
        };
        log::debug!("insert artwork {} for {user}", row.id);
        self.rows.push(row.clone());
        Ok(row.into())
    }

    fn list(&self, user: &UserId) -> Result<Vec<Artwork>, StoreError> {
        // Later inserts win ties on identical timestamps.
        let mut rows: Vec<&ArtworkRow> = self.rows.iter().rev().filter(|r| &r.user_id == user).collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows.into_iter().cloned().map(Artwork::from).collect())
    }

    fn delete(&mut self, id: ArtworkId) -> Result<(), StoreError> {
        let pos = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.rows.remove(pos);
        log::debug!("deleted artwork {id}");
        Ok(())
    }
}
