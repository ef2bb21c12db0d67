//! Save/play classification of a clue's focus card.
//!
//! After elimination has refreshed possibility sets, the focus card gets
//! a convention read:
//!
//! - **save**: the clue landed on the pre-clue chop of a previously
//!   untouched card - it protected the card from the next discard.
//! - **play now / later**: absent a save read the card is presumed
//!   playable; when other clued cards of the same color already occupy
//!   the consecutive slots above the pile, the read defers to "later"
//!   and the expected value shifts up past them.
//!
//! Candidate names are built from what the card's clue stamps pin down,
//! filtered against the availability table and intersected with the
//! card's existing possibility set.

use im::{OrdMap, OrdSet};
use smallvec::SmallVec;

use crate::cards::{CardId, CardInfo, CardName, Color, MAX_VALUE};
use crate::core::seat::Seat;
use crate::core::state::GameState;

use super::infer::{remaining, Availability};
use super::Play;

/// Classify the focus card for `target`, updating its inference record.
///
/// `prev_chop` is the chop index before this clue; `prior` the card map
/// before this clue (for the "previously totally unclued" save test).
pub(crate) fn classify(
    state: &mut GameState,
    target: Seat,
    focus_id: CardId,
    table: &Availability,
    prev_chop: Option<usize>,
    prior: &OrdMap<CardId, CardInfo>,
) {
    let hand = state.hands[target].clone();
    let Some(focus_index) = hand.iter().position(|id| *id == focus_id) else {
        log::warn!("focus {} is not in {}'s hand", focus_id, target);
        return;
    };
    let Some(info) = state.card(focus_id).cloned() else {
        log::warn!("no card record for focus {}", focus_id);
        return;
    };

    let was_unclued = prior.get(&focus_id).map_or(true, |before| !before.is_clued());
    let save = prev_chop == Some(focus_index) && was_unclued;

    let mut play = Play::Now;
    let mut candidates: SmallVec<[CardName; 8]> = SmallVec::new();
    let push_unique = |candidates: &mut SmallVec<[CardName; 8]>, name: CardName| {
        if !candidates.contains(&name) {
            candidates.push(name);
        }
    };

    match (info.clued_color, info.clued_number) {
        (Some(color), Some(value)) => {
            push_unique(&mut candidates, CardName::new(color, value));
        }
        (Some(color), None) => {
            let height = state.pile_height(color);
            if save {
                // A color save protects whichever critical card of the
                // color is still reachable.
                for value in 1..=MAX_VALUE {
                    let name = CardName::new(color, value);
                    if value >= height && remaining(table, name) == 1 {
                        push_unique(&mut candidates, name);
                    }
                }
            }
            // The play candidate: the next slot of the color, deferred
            // past clued same-color cards already occupying lower slots.
            let mut value = height + 1;
            while value <= MAX_VALUE && slot_occupied(state, target, focus_id, color, value) {
                value += 1;
            }
            if value <= MAX_VALUE {
                push_unique(&mut candidates, CardName::new(color, value));
                if value > height + 1 {
                    play = Play::Later;
                }
            }
        }
        (None, Some(value)) => {
            for color in Color::ALL {
                let name = CardName::new(color, value);
                let height = state.pile_height(color);
                // A number save covers the critical cards of that
                // number; every 2 counts as critical by convention.
                if save && height < value && (value == 2 || remaining(table, name) == 1) {
                    push_unique(&mut candidates, name);
                }
                if height + 1 == value {
                    push_unique(&mut candidates, name);
                }
            }
        }
        (None, None) => {
            // A focus with no stamps can only come out of the legacy
            // re-clue fallback misfiring; leave the record alone.
            log::warn!("focus {} carries no clue stamps", focus_id);
            return;
        }
    }

    let Some(entry) = state.hgroup.inference[target].cards.get(&focus_id).cloned() else {
        log::warn!("no inference record for focus {}", focus_id);
        return;
    };
    let own_resolution = entry.resolved();
    let possible: OrdSet<CardName> = candidates
        .into_iter()
        .filter(|name| {
            let mut copies = remaining(table, *name);
            if own_resolution == Some(*name) {
                copies += 1;
            }
            copies > 0
        })
        .filter(|name| entry.possible.contains(name))
        .collect();

    let mut updated = entry;
    updated.play = play;
    updated.save = Some(save);
    if possible.is_empty() {
        log::warn!(
            "clue classification for {} at {} produced no candidates; keeping prior set",
            focus_id,
            target
        );
    } else {
        updated.possible = possible;
    }
    state.hgroup.inference[target].cards.insert(focus_id, updated);
}

/// Is the `value` slot of `color` already spoken for by another clued
/// card - visible in another hand, or resolved to a singleton in the
/// target's own hand?
fn slot_occupied(
    state: &GameState,
    target: Seat,
    focus_id: CardId,
    color: Color,
    value: u8,
) -> bool {
    for (holder, hand) in state.hands.iter() {
        for id in hand.iter() {
            if *id == focus_id {
                continue;
            }
            let Some(info) = state.card(*id) else { continue };
            if !info.is_clued() {
                continue;
            }
            if holder == target {
                let resolved = state.hgroup.inference[target]
                    .cards
                    .get(id)
                    .and_then(super::CardInference::resolved);
                if resolved == Some(CardName::new(color, value)) {
                    return true;
                }
            } else if info.name.color == color && info.name.value == value {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn names(set: &OrdSet<CardName>) -> Vec<String> {
        set.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_color_clue_on_playable_card_reads_now() {
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
        let focus = state.hgroup.focus[Seat::new(0)].unwrap();
        let inference = &state.hgroup.inference[Seat::new(0)].cards[&focus];
        assert_eq!(inference.play, Play::Now);
        assert_eq!(inference.save, Some(false));
        assert_eq!(names(&inference.possible), vec!["B2"]);
    }

    #[test]
    fn test_number_save_on_chop_covers_critical_twos() {
        let state = two_player_start(
            &["B1", "W1", "B3", "G1", "W2"],
            &["G3", "B4", "R1", "B2", "R2"],
            &[],
        );
        // Clue 2s to seat 1: only the chop card (R2) is touched.
        let state = apply(
            &state,
            &Action::ClueNumber {
                cluegiver: Seat::new(0),
                player: Seat::new(1),
                value: 2,
            },
        );
        let focus = state.hgroup.focus[Seat::new(1)].unwrap();
        assert_eq!(focus, state.hands[Seat::new(1)][4]);
        let inference = &state.hgroup.inference[Seat::new(1)].cards[&focus];
        assert_eq!(inference.save, Some(true));
        assert_eq!(inference.play, Play::Now);
        // Every 2 is a candidate: all are critical by convention and no
        // pile has reached 2. W2 is visible in seat 0's hand but one
        // copy remains live.
        assert_eq!(
            names(&inference.possible),
            vec!["W2", "R2", "B2", "Y2", "G2"]
        );
    }
}
