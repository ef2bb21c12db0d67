//! Roster entries.

use serde::{Deserialize, Serialize};

/// A player at the table.
///
/// The roster is ordered; a player's position in it is their [`Seat`]
/// (assigned by the `Start` action, which supplies the seating order).
///
/// [`Seat`]: super::Seat
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable external identifier.
    pub userid: String,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Create a player.
    pub fn new(userid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            userid: userid.into(),
            name: name.into(),
        }
    }
}
