//! Read-only hand projections for presentation layers.
//!
//! Two views exist, mirroring who may see what:
//!
//! - [`visible_hand`]: the observer view of *someone else's* hand, with
//!   true names. Also what scenario tests use to inspect deals.
//! - [`own_hand`]: a player's view of their *own* hand. True identities
//!   are never exposed; a name appears only once that player's own
//!   inference has narrowed the card to a single candidate.

use crate::cards::{CardId, CardInfo, CardName, Color};
use crate::core::seat::Seat;
use crate::core::state::GameState;

/// One card of a player's own hand, as that player may see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnCard {
    /// Physical identity (safe to expose; carries no semantics).
    pub id: CardId,
    /// The inferred identity, present only when the player's own
    /// possibility set is a singleton.
    pub name: Option<CardName>,
    /// Color clue on this card, if any.
    pub clued_color: Option<Color>,
    /// Number clue on this card, if any.
    pub clued_number: Option<u8>,
}

/// A hand as seen by any other player: full card records in hand order.
///
/// Index 0 is the newest card. Ids whose record is missing are skipped
/// (an invariant violation reported on the diagnostic channel).
#[must_use]
pub fn visible_hand(state: &GameState, seat: Seat) -> Vec<CardInfo> {
    if seat.index() >= state.hands.seat_count() {
        return Vec::new();
    }
    state
        .hands[seat]
        .iter()
        .filter_map(|id| {
            let info = state.card(*id);
            if info.is_none() {
                log::warn!("no card record for {} in {}", id, seat);
            }
            info.cloned()
        })
        .collect()
}

/// A hand as seen by its own holder: clue stamps plus singleton
/// inferences, never true identities.
#[must_use]
pub fn own_hand(state: &GameState, seat: Seat) -> Vec<OwnCard> {
    if seat.index() >= state.hands.seat_count() {
        return Vec::new();
    }
    let inference = if state.hgroup.inference.is_empty() {
        None
    } else {
        Some(&state.hgroup.inference[seat])
    };
    state
        .hands[seat]
        .iter()
        .filter_map(|id| {
            let info = state.card(*id)?;
            let name = inference
                .and_then(|inf| inf.cards.get(id))
                .filter(|card_inf| card_inf.possible.len() == 1)
                .and_then(|card_inf| card_inf.possible.iter().next().copied());
            Some(OwnCard {
                id: *id,
                name,
                clued_color: info.clued_color,
                clued_number: info.clued_number,
            })
        })
        .collect()
}
