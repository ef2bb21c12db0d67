//! Candidate generation.
//!
//! The branching factor is kept tractable by ranking, not enumerating:
//! every legal clue is simulated once and only the top three survive,
//! joined by the forced plays the convention has already committed to
//! and a discard of the chop.

use crate::cards::{Color, MAX_VALUE};
use crate::core::action::Action;
use crate::core::seat::Seat;
use crate::core::state::{GameState, GameStatus};
use crate::hgroup::Play;
use crate::rules::apply;

use super::evaluate::seat_score;

/// Clue candidates this many deep survive ranking.
pub const CLUE_CANDIDATES: usize = 3;

/// Simulate every clue the current player could give and rank the
/// results by `evaluator`'s resulting score, descending. Ties keep
/// encounter order: target seat, then color in canonical order, then
/// value ascending.
///
/// Clues that the reducer rejects (turn did not advance) are dropped.
#[must_use]
pub fn evaluate_clues(state: &GameState, evaluator: Seat) -> Vec<(Action, i64)> {
    let mut ranked: Vec<(Action, i64)> = Vec::new();
    if state.status != GameStatus::Playing {
        return ranked;
    }

    let cluegiver = state.turn;
    let mut consider = |action: Action| {
        let next = apply(state, &action);
        if next.turn == state.turn {
            return;
        }
        ranked.push((action, seat_score(&next, evaluator)));
    };

    for target in Seat::all(state.player_count()).filter(|seat| *seat != cluegiver) {
        for color in Color::ALL {
            consider(Action::ClueColor {
                cluegiver,
                player: target,
                color,
            });
        }
        for value in 1..=MAX_VALUE {
            consider(Action::ClueNumber {
                cluegiver,
                player: target,
                value,
            });
        }
    }

    // Stable sort keeps encounter order among ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Candidate actions for the current player: top-ranked clues (none
/// when no token is available), forced plays the convention has
/// resolved, and a discard of the chop.
#[must_use]
pub fn get_actions(state: &GameState, evaluator: Seat) -> Vec<Action> {
    let mut actions: Vec<Action> = Vec::new();
    if state.status != GameStatus::Playing || state.hgroup.inference.is_empty() {
        return actions;
    }

    if state.clues > 0 {
        actions.extend(
            evaluate_clues(state, evaluator)
                .into_iter()
                .take(CLUE_CANDIDATES)
                .map(|(action, _)| action),
        );
    }

    let player = state.turn;
    let inference = &state.hgroup.inference[player];
    for (index, id) in state.hands[player].iter().enumerate() {
        let Some(card) = inference.cards.get(id) else {
            continue;
        };
        if card.play == Play::Now && card.possible.len() == 1 {
            actions.push(Action::Play { player, index });
        }
    }

    if !state.hands[player].is_empty() {
        if let Some(index) = state.hgroup.chop[player] {
            actions.push(Action::Discard { player, index });
        }
    }

    actions
}
