//! Bounded-depth best-action evaluation.
//!
//! A plain max search over the candidate set: simulate, recurse, keep
//! the best score. Depth is the only cost bound; callers pick it against
//! the branching factor (at most three clues plus a handful of forced
//! plays and the chop discard per ply).
//!
//! Rejected actions are pruned by observing that the reducer returned a
//! state whose turn did not advance - the no-op contract doubles as the
//! legality oracle.

use crate::core::action::Action;
use crate::core::seat::Seat;
use crate::core::state::{GameState, GameStatus};
use crate::rules::apply;

use super::candidates::get_actions;

/// Result of an evaluation: the best reachable score and the action
/// that leads there (none at terminal states or depth zero).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Best score found for the evaluating player.
    pub score: i64,
    /// First action of the best line, if any action was evaluated.
    pub action: Option<Action>,
}

/// `seat`'s current inferred score; the global score before the game
/// has been dealt.
#[must_use]
pub fn seat_score(state: &GameState, seat: Seat) -> i64 {
    if state.hgroup.inference.is_empty() || seat.index() >= state.hgroup.inference.seat_count() {
        state.hgroup.score
    } else {
        state.hgroup.inference[seat].score
    }
}

/// Evaluate `state` to `depth` plies for `evaluator`.
///
/// An unstarted game is worthless (`i64::MIN`). Terminal states and
/// depth zero return the current inferred score with no action. Ties
/// keep the first-seen best action.
#[must_use]
pub fn evaluate_state(state: &GameState, depth: u32, evaluator: Seat) -> Evaluation {
    if state.status == GameStatus::NotStarted {
        return Evaluation {
            score: i64::MIN,
            action: None,
        };
    }
    if state.status != GameStatus::Playing || depth == 0 {
        return Evaluation {
            score: seat_score(state, evaluator),
            action: None,
        };
    }

    let mut best: Option<(i64, Action)> = None;
    for action in get_actions(state, evaluator) {
        let next = apply(state, &action);
        if next.turn == state.turn {
            // The reducer rejected it; a no-op branch would loop forever.
            continue;
        }
        let outcome = evaluate_state(&next, depth - 1, evaluator);
        let improves = match &best {
            None => true,
            Some((score, _)) => outcome.score > *score,
        };
        if improves {
            best = Some((outcome.score, action));
        }
    }

    match best {
        Some((score, action)) => Evaluation {
            score,
            action: Some(action),
        },
        // Every candidate was rejected (or none existed): score the
        // state as it stands.
        None => Evaluation {
            score: seat_score(state, evaluator),
            action: None,
        },
    }
}
