//! Saved/not-saved toggle shown on a location's detail view.

use thiserror::Error;

use crate::catalog::CatalogProvider;
use crate::models::{BookmarkRecord, Location};

use super::BookmarkStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    #[error("Location not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// The store has not been read since the view was opened.
    Unknown,
    NotSaved,
    Saved,
}

/// Detail view of one location and its bookmark toggle.
///
/// The toggle is derived from the store on every [`refresh`](Self::refresh)
/// and never carried between views. A save or unsave updates the toggle
/// before the write, and the toggle keeps that value even if the write is
/// dropped.
pub struct DetailView {
    location: Location,
    store: BookmarkStore,
    state: ToggleState,
}

impl DetailView {
    /// Opens the view without reading the store.
    pub fn open<C>(catalog: &C, store: BookmarkStore, id: &str) -> Result<Self, DetailError>
    where
        C: CatalogProvider + ?Sized,
    {
        let location = catalog
            .location(id)
            .cloned()
            .ok_or_else(|| DetailError::NotFound(id.to_string()))?;

        Ok(Self {
            location,
            store,
            state: ToggleState::Unknown,
        })
    }

    /// Opens the view and reads its toggle state.
    pub async fn activate<C>(catalog: &C, store: BookmarkStore, id: &str) -> Result<Self, DetailError>
    where
        C: CatalogProvider + ?Sized,
    {
        let mut view = Self::open(catalog, store, id)?;
        view.refresh().await;
        Ok(view)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_saved(&self) -> bool {
        self.state == ToggleState::Saved
    }

    /// Re-reads the store for this location.
    pub async fn refresh(&mut self) -> ToggleState {
        self.state = if self.store.contains(&self.location.id).await {
            ToggleState::Saved
        } else {
            ToggleState::NotSaved
        };
        self.state
    }

    /// `NotSaved -> Saved`. Does nothing if already saved.
    pub async fn save(&mut self) -> ToggleState {
        if self.state == ToggleState::Unknown {
            self.refresh().await;
        }
        if self.state == ToggleState::NotSaved {
            self.state = ToggleState::Saved;
            self.store.add(BookmarkRecord::from(&self.location)).await;
        }
        self.state
    }

    /// `Saved -> NotSaved`. Does nothing if not saved.
    pub async fn unsave(&mut self) -> ToggleState {
        if self.state == ToggleState::Unknown {
            self.refresh().await;
        }
        if self.state == ToggleState::Saved {
            self.state = ToggleState::NotSaved;
            self.store.remove(&self.location.id).await;
        }
        self.state
    }

    /// Flips the toggle.
    pub async fn toggle(&mut self) -> ToggleState {
        if self.state == ToggleState::Unknown {
            self.refresh().await;
        }
        match self.state {
            ToggleState::Saved => self.unsave().await,
            _ => self.save().await,
        }
    }
}
