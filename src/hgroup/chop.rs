//! Chop tracking.
//!
//! The chop is the card a player will discard next absent other
//! information: the rightmost (oldest) card with no clue on it.

use crate::core::seat::Seat;
use crate::core::state::GameState;

/// Index of a seat's chop card, scanning from oldest (last index) toward
/// newest. `None` when every card in the hand is clued.
#[must_use]
pub fn chop_index(state: &GameState, seat: Seat) -> Option<usize> {
    let hand = &state.hands[seat];
    for index in (0..hand.len()).rev() {
        match state.card(hand[index]) {
            Some(info) if !info.is_clued() => return Some(index),
            Some(_) => {}
            None => {
                log::warn!("no card record for {} at {} index {}", hand[index], seat, index);
            }
        }
    }
    None
}
