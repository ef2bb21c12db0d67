//! Variant configuration and table constants.
//!
//! The engine models exactly one variant: five suits with the standard
//! count distribution, 8 clue tokens, game over at 3 faults. The variant
//! type exists so state and logs record what they were played under.

use serde::{Deserialize, Serialize};

/// Clue tokens available at the start; also the cap.
pub const MAX_CLUES: u8 = 8;

/// Faults that end the game.
pub const MAX_FAULTS: u8 = 3;

/// Rule variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Five suits, standard counts.
    #[default]
    Standard,
}

impl Variant {
    /// Cards dealt per player: 5 at a table of 3 or fewer, 4 otherwise.
    #[must_use]
    pub fn hand_size(self, player_count: usize) -> usize {
        if player_count > 3 {
            4
        } else {
            5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_size_by_table() {
        assert_eq!(Variant::Standard.hand_size(2), 5);
        assert_eq!(Variant::Standard.hand_size(3), 5);
        assert_eq!(Variant::Standard.hand_size(4), 4);
        assert_eq!(Variant::Standard.hand_size(5), 4);
    }
}
