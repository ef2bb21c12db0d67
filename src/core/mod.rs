//! Core engine types: seats, players, actions, configuration, state, RNG.
//!
//! Everything here is a plain serializable value. The reducer in
//! [`rules`](crate::rules) folds [`Action`]s over [`GameState`]; the
//! derived convention state it carries lives in
//! [`hgroup`](crate::hgroup).

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod seat;
pub mod state;
pub mod view;

pub use action::Action;
pub use config::{Variant, MAX_CLUES, MAX_FAULTS};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, SeatMap};
pub use state::{GameState, GameStatus, Piles};
pub use view::{own_hand, visible_hand, OwnCard};
