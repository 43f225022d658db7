//! Artwork records.
//!
//! `ArtworkRow` is the backend's row shape (snake_case, owner included);
//! `Artwork` is what the gallery hands to the page.

use crate::id::ArtworkId;
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user identity as issued by the identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A saved drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: ArtworkId,
    /// Encoded image, directly usable as an image source.
    pub image_data: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Gallery caption format, e.g. `Mar 4, 2026 at 9:05 PM`.
const DISPLAY_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

impl Artwork {
    /// Caption date in the viewer's local time zone.
    pub fn display_date(&self) -> String {
        self.display_date_in(&Local)
    }

    pub fn display_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.created_at
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string()
    }

    pub fn display_date_at(&self, offset: FixedOffset) -> String {
        self.display_date_in(&offset)
    }

    /// Alt text for the gallery image.
    pub fn alt_text(&self) -> &str {
        self.title.as_deref().unwrap_or("Artwork")
    }
}

/// What the page submits to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtwork {
    pub image_data: String,
    pub title: Option<String>,
    pub mood: Option<String>,
}

/// Backend row shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRow {
    pub id: ArtworkId,
    pub user_id: UserId,
    pub image_data: String,
    pub created_at: DateTime<Utc>,
    /// Empty strings from the backend are treated as absent.
    pub title: Option<String>,
    pub mood: Option<String>,
}

impl From<ArtworkRow> for Artwork {
    fn from(row: ArtworkRow) -> Self {
        Artwork {
            id: row.id,
            image_data: row.image_data,
            created_at: row.created_at,
            title: row.title.filter(|t| !t.is_empty()),
            mood: row.mood.filter(|m| !m.is_empty()),
        }
    }
}
