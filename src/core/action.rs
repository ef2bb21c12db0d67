//! The action union.
//!
//! Every state transition is one of these six actions applied through
//! [`rules::apply`](crate::rules::apply). Actions are plain serializable
//! values: a successfully applied action can be written to a log and
//! replayed in order against the initial state to reconstruct identical
//! state (see [`replay`](crate::replay)).

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::seat::Seat;
use crate::cards::{CardName, Color};

/// A game action.
///
/// Clue actions carry both the cluegiver (whose turn it must be) and the
/// target hand. `Play` and `Discard` index into the acting player's own
/// hand; index 0 is the most recently drawn card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Add a player to the roster. Valid only before `Start`.
    Join(Player),

    /// Begin play with an already-shuffled deck and seating order.
    ///
    /// The reducer never shuffles; callers supply the permutation (see
    /// [`rules::shuffled_start`](crate::rules::shuffled_start)).
    Start {
        /// Deck in draw order; the front is dealt and drawn first.
        deck: Vec<CardName>,
        /// Seating order.
        players: Vec<Player>,
    },

    /// Discard the card at `index` to regain a clue token.
    Discard { player: Seat, index: usize },

    /// Play the card at `index` onto its color pile.
    Play { player: Seat, index: usize },

    /// Clue every card of `color` in `player`'s hand.
    ClueColor {
        cluegiver: Seat,
        player: Seat,
        color: Color,
    },

    /// Clue every card of `value` in `player`'s hand.
    ClueNumber {
        cluegiver: Seat,
        player: Seat,
        value: u8,
    },
}

impl Action {
    /// Is this a clue action?
    #[must_use]
    pub fn is_clue(&self) -> bool {
        matches!(self, Action::ClueColor { .. } | Action::ClueNumber { .. })
    }

    /// Target seat of a clue action.
    #[must_use]
    pub fn clue_target(&self) -> Option<Seat> {
        match self {
            Action::ClueColor { player, .. } | Action::ClueNumber { player, .. } => Some(*player),
            _ => None,
        }
    }
}
