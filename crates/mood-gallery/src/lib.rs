pub mod artwork;
pub mod gallery;
pub mod id;
pub mod identity;
pub mod store;

pub use artwork::{Artwork, ArtworkRow, NewArtwork, UserId};
pub use gallery::{Gallery, delete_and_notify, save_handler};
pub use id::ArtworkId;
pub use identity::{Identity, Session};
pub use store::{ArtworkStore, MemoryStore, StoreError};
