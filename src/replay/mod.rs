//! Action-log boundary: encoding and deterministic replay.
//!
//! The reducer is deterministic and every action is a plain value, so a
//! persisted log of successfully applied actions reconstructs identical
//! state when folded over the initial state in order. This module is the
//! whole of the persistence contract; storage and transport live
//! elsewhere.

use crate::core::action::Action;
use crate::core::state::GameState;
use crate::rules::apply;

/// Encode an action for an append-only log.
pub fn encode_action(action: &Action) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(action)
}

/// Decode an action from its log encoding.
pub fn decode_action(bytes: &[u8]) -> Result<Action, bincode::Error> {
    bincode::deserialize(bytes)
}

/// Fold a log of actions over the initial state.
#[must_use]
pub fn replay<'a, I>(actions: I) -> GameState
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(GameState::initial(), |state, action| apply(&state, action))
}
