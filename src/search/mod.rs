//! Action search over hypothetical futures.
//!
//! The search drives the reducer with speculative actions and reads the
//! convention scores to rank outcomes. It never reaches into engine
//! internals: every future is produced by [`apply`](crate::rules::apply)
//! on a cheaply-cloned state.

pub mod candidates;
pub mod evaluate;

pub use candidates::{evaluate_clues, get_actions, CLUE_CANDIDATES};
pub use evaluate::{evaluate_state, seat_score, Evaluation};

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::seat::Seat;
use crate::core::state::GameState;

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to look ahead. Depth is the sole cost bound.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

impl SearchConfig {
    /// Create a config with a custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

/// The best action for `evaluator` under `config`, if any action is
/// both available and accepted by the reducer.
#[must_use]
pub fn best_action(state: &GameState, evaluator: Seat, config: &SearchConfig) -> Option<Action> {
    evaluate_state(state, config.depth, evaluator).action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_and_with_depth() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 2);
        assert_eq!(config.with_depth(4).depth, 4);
    }

    #[test]
    fn test_best_action_on_unstarted_game() {
        let state = GameState::initial();
        assert_eq!(
            best_action(&state, Seat::new(0), &SearchConfig::default()),
            None
        );
    }
}
