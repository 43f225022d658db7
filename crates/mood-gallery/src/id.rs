use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for record IDs: cheap to compare and to store.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// A lightweight, interned identifier for stored artworks.
/// Internally a `Spur` index, 4 bytes and `Copy`.
///
/// The backend hands out opaque string ids; any string is accepted.
const SEQUENCE_PREFIX: &str = "artwork_";

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtworkId(Spur);

impl ArtworkId {
    /// Intern a backend id, or return the existing handle.
    pub fn intern(s: &str) -> Self {
        ArtworkId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// The `n`th id in the sequence stores use for ids they assign
    /// themselves (`artwork_{n}`).
    pub fn sequenced(n: u64) -> Self {
        Self::intern(&format!("{SEQUENCE_PREFIX}{n}"))
    }

    /// The sequence number, if this id was assigned by `sequenced`.
    pub fn sequence_number(&self) -> Option<u64> {
        self.as_str().strip_prefix(SEQUENCE_PREFIX)?.parse().ok()
    }
}

impl fmt::Debug for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtworkId({})", self.as_str())
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ArtworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ArtworkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ArtworkId::intern(&s))
    }
}
