//! Integration tests: surface → save callback → gallery (mood-gallery).
//!
//! Wires a mounted drawing surface to a gallery backed by the in-memory
//! store and checks what gets persisted and what the user is told.

use mood_core::{Container, PaletteColor};
use mood_editor::DrawingSurface;
use mood_editor::notify::{NoticeLevel, NoticeLog, Notifier};
use mood_gallery::gallery::{
    DELETE_FAILED_MESSAGE, DELETED_MESSAGE, SAVE_FAILED_MESSAGE, SAVED_MESSAGE,
};
use mood_gallery::{
    Artwork, ArtworkId, ArtworkStore, Gallery, MemoryStore, NewArtwork, Session, StoreError,
    UserId, delete_and_notify, save_handler,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

const CONTAINER: Container = Container {
    width: 432.0,
    viewport_height: 500.0,
};

/// A store whose backend is always down.
struct OfflineStore;

impl ArtworkStore for OfflineStore {
    fn insert(&mut self, _: &UserId, _: NewArtwork) -> Result<Artwork, StoreError> {
        Err(StoreError::Backend("offline".into()))
    }

    fn list(&self, _: &UserId) -> Result<Vec<Artwork>, StoreError> {
        Err(StoreError::Backend("offline".into()))
    }

    fn delete(&mut self, _: ArtworkId) -> Result<(), StoreError> {
        Err(StoreError::Backend("offline".into()))
    }
}

struct Page {
    surface: DrawingSurface,
    gallery: Rc<RefCell<Gallery>>,
    session: Session,
    toasts: NoticeLog,
}

fn page_with(store: Box<dyn ArtworkStore>) -> Page {
    let _ = env_logger::builder().is_test(true).try_init();
    let session = Session::signed_in(UserId::new("user-1"));
    let gallery = Rc::new(RefCell::new(Gallery::new(store, Box::new(session.clone()))));
    let toasts = NoticeLog::new();
    let notifier: Rc<dyn Notifier> = Rc::new(toasts.clone());
    let surface = DrawingSurface::mount(
        CONTAINER,
        save_handler(gallery.clone(), notifier),
        Box::new(toasts.clone()),
    )
    .unwrap();
    Page {
        surface,
        gallery,
        session,
        toasts,
    }
}

fn scribble(surface: &mut DrawingSurface) {
    surface.pointer_down(10.0, 10.0).unwrap();
    surface.pointer_move(80.0, 40.0).unwrap();
    surface.pointer_move(150.0, 20.0).unwrap();
    surface.pointer_up(150.0, 20.0).unwrap();
}

#[test]
fn saved_drawing_lands_in_gallery() {
    let mut page = page_with(Box::new(MemoryStore::new()));
    page.surface.select_color(PaletteColor::SkyBlue).unwrap();
    scribble(&mut page.surface);
    page.surface.save().unwrap();

    let gallery = page.gallery.borrow();
    assert_eq!(gallery.artworks().len(), 1);
    assert!(gallery.artworks()[0].image_data.starts_with("data:image/png;base64,"));

    let last = page.toasts.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Success);
    assert_eq!(last.message, SAVED_MESSAGE);
    assert!(page.surface.screen().unwrap().is_blank());
}

#[test]
fn newest_save_is_first() {
    let mut page = page_with(Box::new(MemoryStore::new()));
    scribble(&mut page.surface);
    page.surface.save().unwrap();
    page.surface.save().unwrap();

    let gallery = page.gallery.borrow();
    let arts = gallery.artworks();
    assert_eq!(arts.len(), 2);
    // The second save was of a blank canvas.
    let blank = page.surface.snapshot().unwrap();
    assert_eq!(arts[0].image_data, blank.as_str());
    assert_ne!(arts[1].image_data, blank.as_str());
}

#[test]
fn signed_out_save_fails_but_still_clears() {
    let mut page = page_with(Box::new(MemoryStore::new()));
    page.session.sign_out();
    scribble(&mut page.surface);
    page.surface.save().unwrap();

    assert!(page.gallery.borrow().is_empty());
    let last = page.toasts.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(last.message, SAVE_FAILED_MESSAGE);
    assert!(page.surface.screen().unwrap().is_blank());
}

#[test]
fn backend_failure_is_reported_once_per_save() {
    let mut page = page_with(Box::new(OfflineStore));
    let before = page.toasts.len();
    scribble(&mut page.surface);
    page.surface.save().unwrap();

    let errors: Vec<_> = page.toasts.notices()[before..]
        .iter()
        .filter(|n| n.level == NoticeLevel::Error)
        .cloned()
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(page.surface.screen().unwrap().is_blank());
}

#[test]
fn delete_removes_from_cache_and_store() {
    let mut page = page_with(Box::new(MemoryStore::new()));
    scribble(&mut page.surface);
    page.surface.save().unwrap();

    let id = page.gallery.borrow().artworks()[0].id;
    assert!(page.gallery.borrow_mut().delete(id));
    assert!(page.gallery.borrow().is_empty());

    page.gallery.borrow_mut().refresh();
    assert!(page.gallery.borrow().is_empty());
    assert!(!page.gallery.borrow_mut().delete(id));
}

#[test]
fn refresh_follows_the_session() {
    let page = page_with(Box::new(MemoryStore::new()));
    let saved = page
        .gallery
        .borrow_mut()
        .save("data:image/png;base64,AAAA".into(), Some("Storm".into()), Some("angry".into()));
    assert_eq!(saved.as_ref().and_then(|a| a.title.as_deref()), Some("Storm"));

    page.session.sign_out();
    page.gallery.borrow_mut().refresh();
    assert!(page.gallery.borrow().is_empty());

    page.session.sign_in(UserId::new("user-1"));
    page.gallery.borrow_mut().refresh();
    let gallery = page.gallery.borrow();
    assert_eq!(gallery.artworks().len(), 1);
    assert_eq!(gallery.artworks()[0].mood.as_deref(), Some("angry"));
}

#[test]
fn delete_reports_outcome() {
    let page = page_with(Box::new(MemoryStore::new()));
    let art = page
        .gallery
        .borrow_mut()
        .save("data:image/png;base64,AAAA".into(), None, None)
        .unwrap();

    assert!(delete_and_notify(&mut page.gallery.borrow_mut(), art.id, &page.toasts));
    assert_eq!(page.toasts.last().unwrap().message, DELETED_MESSAGE);

    assert!(!delete_and_notify(&mut page.gallery.borrow_mut(), art.id, &page.toasts));
    let last = page.toasts.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(last.message, DELETE_FAILED_MESSAGE);
}

#[test]
fn delete_after_reload_removes_only_the_new_artwork() {
    let _ = env_logger::builder().is_test(true).try_init();
    let json = serde_json::to_string(
        &(0..5)
            .map(|n| {
                serde_json::json!({
                    "id": format!("artwork_{n}"),
                    "user_id": "user-1",
                    "image_data": format!("data:image/png;base64,{n}"),
                    "created_at": "2026-01-01T12:00:00Z",
                    "title": null,
                    "mood": null,
                })
            })
            .collect::<Vec<_>>(),
    )
    .unwrap();
    let store = MemoryStore::from_json(&json).unwrap();
    let session = Session::signed_in(UserId::new("user-1"));
    let mut gallery = Gallery::new(Box::new(store), Box::new(session));
    assert_eq!(gallery.artworks().len(), 5);

    let fresh = gallery.save("data:image/png;base64,new".into(), None, None).unwrap();
    assert_eq!(gallery.artworks().len(), 6);
    assert!(gallery.delete(fresh.id));
    assert_eq!(gallery.artworks().len(), 5);

    gallery.refresh();
    assert_eq!(gallery.artworks().len(), 5);
}
