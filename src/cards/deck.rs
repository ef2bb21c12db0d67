//! Standard deck construction.

use super::name::{CardName, Color, COPIES_PER_VALUE, MAX_VALUE};

/// Cards in a standard deck: 10 per color across 5 colors.
pub const DECK_SIZE: usize = 50;

/// Build the standard 50-card deck in canonical order.
///
/// Per color: value 1 three times, values 2-4 twice each, value 5 once.
/// The result is unshuffled; shuffling happens in the setup helper, never
/// inside the reducer.
#[must_use]
pub fn standard_deck() -> Vec<CardName> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for value in 1..=MAX_VALUE {
            for _ in 0..COPIES_PER_VALUE[(value - 1) as usize] {
                deck.push(CardName::new(color, value));
            }
        }
    }
    deck
}
