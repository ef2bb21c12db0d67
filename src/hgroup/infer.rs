//! Possibility-set elimination.
//!
//! For each player, every hidden card carries the set of names the
//! player cannot yet rule out. Elimination runs for every player on
//! every action:
//!
//! 1. Build that player's name-availability table: the full deck's name
//!    multiset, minus piles and discard, minus every card the player can
//!    account for - other hands at face value, the player's own cards
//!    only once their possibility set has collapsed to a single name.
//! 2. Prune each of the player's own cards: names with no copies left,
//!    names contradicting the card's clue stamps, and - once the card is
//!    clued at all - names its color pile has already passed (a clued
//!    card is assumed playable in principle).
//!
//! A card's own collapsed name is re-credited while pruning that card,
//! so a resolved card can never eliminate itself. A set pruned to empty
//! is an internal-consistency violation: it is reported on the
//! diagnostic channel and the previous set is kept.

use im::{OrdMap, OrdSet};
use rustc_hash::FxHashMap;

use crate::cards::{CardId, CardName};
use crate::core::seat::Seat;
use crate::core::state::GameState;

use super::CardInference;

/// Remaining copies of every name from `seat`'s perspective.
pub type Availability = FxHashMap<CardName, i32>;

/// Copies of `name` still unaccounted for, from the table.
#[must_use]
pub fn remaining(table: &Availability, name: CardName) -> i32 {
    table.get(&name).copied().unwrap_or(0)
}

/// Build `seat`'s availability table.
#[must_use]
pub fn availability(state: &GameState, seat: Seat) -> Availability {
    let mut table: Availability = CardName::all().map(|n| (n, i32::from(n.copies()))).collect();

    let mut consume = |name: CardName| {
        if let Some(count) = table.get_mut(&name) {
            *count -= 1;
        }
    };

    for (_, stack) in state.piles.iter() {
        for id in stack.iter() {
            if let Some(info) = state.card(*id) {
                consume(info.name);
            }
        }
    }
    for id in state.discard.iter() {
        if let Some(info) = state.card(*id) {
            consume(info.name);
        }
    }

    let own = &state.hgroup.inference[seat];
    for (holder, hand) in state.hands.iter() {
        for id in hand.iter() {
            if holder == seat {
                // Own cards are hidden; only a collapsed possibility set
                // accounts for a copy.
                if let Some(name) = own.cards.get(id).and_then(CardInference::resolved) {
                    consume(name);
                }
            } else if let Some(info) = state.card(*id) {
                consume(info.name);
            }
        }
    }

    table
}

/// Run elimination for `seat`: returns the pruned per-card records and
/// the availability table they were pruned against.
#[must_use]
pub fn eliminate(state: &GameState, seat: Seat) -> (OrdMap<CardId, CardInference>, Availability) {
    let table = availability(state, seat);
    let mut cards = state.hgroup.inference[seat].cards.clone();

    for id in state.hands[seat].iter() {
        let Some(info) = state.card(*id) else {
            log::warn!("no card record for {} during elimination", id);
            continue;
        };
        let Some(entry) = cards.get(id) else {
            log::warn!("no inference record for {} at {}", id, seat);
            continue;
        };
        let own_resolution = entry.resolved();

        let mut kept: OrdSet<CardName> = OrdSet::new();
        for name in entry.possible.iter().copied() {
            let mut copies = remaining(&table, name);
            if own_resolution == Some(name) {
                copies += 1;
            }
            if copies <= 0 {
                continue;
            }
            if info.clued_color.is_some_and(|c| name.color != c) {
                continue;
            }
            if info.clued_number.is_some_and(|v| name.value != v) {
                continue;
            }
            if info.is_clued() && name.value <= state.pile_height(name.color) {
                continue;
            }
            kept.insert(name);
        }

        if kept.is_empty() {
            log::warn!(
                "possibility set for {} at {} pruned to empty; keeping previous set",
                id,
                seat
            );
            continue;
        }
        let mut updated = entry.clone();
        updated.possible = kept;
        cards.insert(*id, updated);
    }

    (cards, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::core::action::Action;
    use crate::core::player::Player;
    use crate::rules::apply;

    fn two_player_start(p0: &[&str], p1: &[&str], rest: &[&str]) -> GameState {
        let players = vec![Player::new("u0", "P0"), Player::new("u1", "P1")];
        let mut state = GameState::initial();
        for player in &players {
            state = apply(&state, &Action::Join(player.clone()));
        }
        let deck = p0
            .iter()
            .chain(p1.iter())
            .chain(rest.iter())
            .map(|s| s.parse().unwrap())
            .collect();
        apply(&state, &Action::Start { deck, players })
    }

    fn name(s: &str) -> CardName {
        s.parse().unwrap()
    }

    #[test]
    fn test_availability_subtracts_visible_hand() {
        let state = two_player_start(
            &["B1", "W1", "B2", "G5", "W3"],
            &["G1", "B4", "R1", "B3", "W5"],
            &[],
        );
        // Seat 1 sees both of seat 0's copies... here just one B2; three
        // W1s minus the one visible.
        let table = availability(&state, Seat::new(1));
        assert_eq!(remaining(&table, name("B2")), 1);
        assert_eq!(remaining(&table, name("W1")), 2);
        assert_eq!(remaining(&table, name("G5")), 0);
        // Own hand is hidden and nothing has resolved yet.
        assert_eq!(remaining(&table, name("W5")), 1);
    }

    #[test]
    fn test_availability_subtracts_piles_and_discard() {
        let state = two_player_start(
            &["B1", "W1", "B2", "G5", "W3"],
            &["G1", "B4", "R1", "B3", "W5"],
            &["Y3", "G2"],
        );
        let state = apply(
            &state,
            &Action::Play {
                player: Seat::new(0),
                index: 0,
            },
        );
        // Burn clues so the discard is legal (discarding at 8 tokens is
        // a no-op), then discard seat 1's W5 from the chop.
        let state = apply(
            &state,
            &Action::ClueColor {
                cluegiver: Seat::new(1),
                player: Seat::new(0),
                color: Color::Yellow,
            },
        );
        let state = apply(
            &state,
            &Action::ClueNumber {
                cluegiver: Seat::new(0),
                player: Seat::new(1),
                value: 4,
            },
        );
        let state = apply(
            &state,
            &Action::Discard {
                player: Seat::new(1),
                index: 4,
            },
        );
        // B1 is on its pile, W5 is in the discard; both leave seat 0's
        // table (seat 0 could not see either before).
        let table = availability(&state, Seat::new(0));
        assert_eq!(remaining(&table, name("B1")), 2);
        assert_eq!(remaining(&table, name("W5")), 0);
    }

    #[test]
    fn test_elimination_prunes_by_clue_stamps() {
        let state = two_player_start(
            &["B1", "W1", "B2", "G1", "W3"],
            &["W2", "B4", "R1", "B3", "W5"],
            &["G2"],
        );
        let state = apply(
            &state,
            &Action::Play {
                player: Seat::new(0),
                index: 0,
            },
        );
        let state = apply(
            &state,
            &Action::ClueColor {
                cluegiver: Seat::new(1),
                player: Seat::new(0),
                color: Color::Blue,
            },
        );
        // The clued B2 keeps only blue names above the blue pile.
        let focus = state.hands[Seat::new(0)][2];
        let possible = &state.hgroup.inference[Seat::new(0)].cards[&focus].possible;
        for candidate in possible.iter() {
            assert_eq!(candidate.color, Color::Blue);
            assert!(candidate.value > 1);
        }
    }
}
