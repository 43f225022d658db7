//! The signed-in user's gallery.
//!
//! Caches the user's artworks and keeps the cache in step with the store
//! on save and delete. Store failures are logged and reported as `None` /
//! `false`; surfacing them to the user is the caller's job.

use crate::artwork::{Artwork, NewArtwork};
use crate::id::ArtworkId;
use crate::identity::Identity;
use crate::store::ArtworkStore;
use mood_editor::OnSave;
use mood_editor::notify::{Notice, Notifier};
use std::cell::RefCell;
use std::rc::Rc;

pub struct Gallery {
    store: Box<dyn ArtworkStore>,
    identity: Box<dyn Identity>,
    artworks: Vec<Artwork>,
}

impl Gallery {
    /// Create a gallery and load the current user's artworks.
    pub fn new(store: Box<dyn ArtworkStore>, identity: Box<dyn Identity>) -> Self {
        let mut gallery = Self {
            store,
            identity,
            artworks: Vec::new(),
        };
        gallery.refresh();
        gallery
    }

    /// Cached artworks, newest first.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Reload from the store. Signed out means an empty gallery; a failed
    /// load keeps the previous cache.
    pub fn refresh(&mut self) {
        let Some(user) = self.identity.current_user() else {
            self.artworks.clear();
            return;
        };
        match self.store.list(&user) {
            Ok(artworks) => {
                log::debug!("loaded {} artworks for {user}", artworks.len());
                self.artworks = artworks;
            }
            Err(e) => log::error!("Error fetching artworks: {e}"),
        }
    }

    /// Store an artwork for the signed-in user and put it at the front of
    /// the cache. `None` when signed out or when the store fails.
    pub fn save(
        &mut self,
        image_data: String,
        title: Option<String>,
        mood: Option<String>,
    ) -> Option<Artwork> {
        let user = self.identity.current_user()?;
        let new = NewArtwork {
            image_data,
            title,
            mood,
        };
        match self.store.insert(&user, new) {
            Ok(artwork) => {
                self.artworks.insert(0, artwork.clone());
                Some(artwork)
            }
            Err(e) => {
                log::error!("Error saving artwork: {e}");
                None
            }
        }
    }

    /// Delete an artwork. `false` when the store refuses.
    pub fn delete(&mut self, id: ArtworkId) -> bool {
        if let Err(e) = self.store.delete(id) {
            log::error!("Error deleting artwork: {e}");
            return false;
        }
        self.artworks.retain(|a| a.id != id);
        true
    }
}

pub const SAVED_MESSAGE: &str = "💖 Your artwork has been saved!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save artwork";
pub const DELETED_MESSAGE: &str = "Artwork removed 💔";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete artwork";

/// Build the surface's save callback: persist each payload through
/// `gallery` and tell the user how it went.
///
/// A failed save is reported both to the notifier and back to the surface
/// as `Err`, which the surface logs without undoing its clear.
pub fn save_handler(gallery: Rc<RefCell<Gallery>>, notifier: Rc<dyn Notifier>) -> OnSave {
    Box::new(move |payload| {
        let saved = gallery.borrow_mut().save(payload.into_string(), None, None);
        match saved {
            Some(_) => {
                notifier.notify(Notice::success(SAVED_MESSAGE));
                Ok(())
            }
            None => {
                notifier.notify(Notice::error(SAVE_FAILED_MESSAGE));
                Err(SAVE_FAILED_MESSAGE.to_string())
            }
        }
    })
}

/// Delete an artwork from the gallery page and tell the user how it went.
pub fn delete_and_notify(gallery: &mut Gallery, id: ArtworkId, notifier: &dyn Notifier) -> bool {
    let deleted = gallery.delete(id);
    if deleted {
        notifier.notify(Notice::success(DELETED_MESSAGE));
    } else {
        notifier.notify(Notice::error(DELETE_FAILED_MESSAGE));
    }
    deleted
}
