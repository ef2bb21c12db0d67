//! Heuristic scoring.
//!
//! The search ranks outcomes by these numbers, so the weights are the
//! convention's value judgments: faults are catastrophic, played cards
//! are the goal, a useful clued card in a visible hand is progress, a
//! bad touch is worse than no clue at all.
//!
//! Per-seat scores evaluate only *other* players' hands - a player
//! cannot see their own cards, so their own hand contributes nothing to
//! their evaluation.

use rustc_hash::FxHashSet;

use crate::cards::CardName;
use crate::core::seat::Seat;
use crate::core::state::GameState;

const FAULT_WEIGHT: i64 = -5000;
const PILE_WEIGHT: i64 = 1000;
const USEFUL_CLUE_WEIGHT: i64 = 500;
const BAD_TOUCH_WEIGHT: i64 = -1000;

/// Recompute the global and per-seat scores.
pub(crate) fn rescore(state: &mut GameState) {
    let global =
        i64::from(state.faults) * FAULT_WEIGHT + state.piles.total() as i64 * PILE_WEIGHT;
    state.hgroup.score = global;

    for seat in Seat::all(state.player_count()) {
        let score = global + clued_hand_value(state, seat);
        state.hgroup.inference[seat].score = score;
    }
}

/// Value of clued cards across every hand `seat` can see.
///
/// Each distinct not-yet-played clued identity counts once; a clued card
/// duplicating a counted identity, or one its pile has already
/// satisfied, is a bad touch.
fn clued_hand_value(state: &GameState, seat: Seat) -> i64 {
    let mut value = 0;
    let mut counted: FxHashSet<CardName> = FxHashSet::default();

    for (holder, hand) in state.hands.iter() {
        if holder == seat {
            continue;
        }
        for id in hand.iter() {
            let Some(info) = state.card(*id) else { continue };
            if !info.is_clued() {
                continue;
            }
            let name = info.name;
            let satisfied = state.pile_height(name.color) >= name.value;
            if satisfied || counted.contains(&name) {
                value += BAD_TOUCH_WEIGHT;
            } else {
                value += USEFUL_CLUE_WEIGHT;
                counted.insert(name);
            }
        }
    }
    value
}
