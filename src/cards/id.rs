//! Opaque physical-card identity.
//!
//! Two physical cards can share a name; they never share a `CardId`.
//! Ids are assigned once by the `Start` action, in deck order, and follow
//! the card through every zone for the rest of the game.

use serde::{Deserialize, Serialize};

/// Unique identifier for a physical card.
///
/// Carries no semantics: the bound name lives in
/// [`CardInfo`](super::CardInfo).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
