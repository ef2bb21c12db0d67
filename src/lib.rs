//! # hanabi-engine
//!
//! A rules engine for the cooperative card game Hanabi, with an H-Group
//! convention inference layer and a best-action search built on top.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `apply(state, action)` returns a new state
//!    and never mutates its input. Illegal actions are no-ops, not
//!    errors - stale submissions are harmlessly ignored.
//!
//! 2. **Identity ≠ name**: physical cards are opaque `CardId`s; the
//!    color/value name is a separate structured type bound through
//!    `CardInfo`. Two cards can share a name, never an id.
//!
//! 3. **Derived state is recomputed, never trusted**: the convention
//!    layer (chop, focus, possibility sets, scores) is rebuilt from the
//!    ground truth on every action.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so
//!   the search can branch many futures from one state.
//!
//! - **Deterministic by construction**: the reducer draws no randomness;
//!   `Start` receives an already-shuffled deck. A log of applied actions
//!   replays to identical state.
//!
//! - **Scores are i64**: the search compares exact integers; no float
//!   noise in ranking.
//!
//! ## Modules
//!
//! - `cards`: card names, opaque ids, clue stamps, deck construction
//! - `core`: seats, players, actions, configuration, state, RNG, views
//! - `rules`: the action reducer and setup helpers
//! - `hgroup`: convention inference (chop, focus, elimination, scoring)
//! - `search`: clue ranking and bounded-depth best-action evaluation
//! - `replay`: action-log encoding and deterministic replay

pub mod cards;
pub mod core;
pub mod hgroup;
pub mod replay;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::cards::{standard_deck, CardId, CardInfo, CardName, Color, DECK_SIZE, MAX_VALUE};

pub use crate::core::{
    own_hand, visible_hand, Action, GameRng, GameRngState, GameState, GameStatus, OwnCard,
    Piles, Player, Seat, SeatMap, Variant, MAX_CLUES, MAX_FAULTS,
};

pub use crate::hgroup::{CardInference, HGroup, Play, PlayerInference};

pub use crate::replay::{decode_action, encode_action, replay};

pub use crate::rules::{apply, shuffled_start};

pub use crate::search::{
    best_action, evaluate_clues, evaluate_state, get_actions, seat_score, Evaluation,
    SearchConfig, CLUE_CANDIDATES,
};
