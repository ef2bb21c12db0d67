//! Card model: identity, names, clue state, deck construction.
//!
//! ## Key Types
//!
//! - `CardId`: opaque physical-card identity
//! - `Color` / `CardName`: structured card semantics (no string slicing)
//! - `CardInfo`: id → name binding plus clue stamps
//!
//! ## Identity vs. Name
//!
//! Two physical cards can share a name ("B2"); they never share an id.
//! Everything positional (hands, deck, piles, discard) holds ids; names
//! are looked up through `CardInfo`.

pub mod deck;
pub mod id;
pub mod info;
pub mod name;

pub use deck::{standard_deck, DECK_SIZE};
pub use id::CardId;
pub use info::CardInfo;
pub use name::{CardName, Color, ParseNameError, COPIES_PER_VALUE, MAX_VALUE};
