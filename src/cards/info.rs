//! Per-card runtime state: the bound name plus clue stamps.
//!
//! A `CardInfo` is created for every card when the game starts and is
//! never removed - cards move between zones but keep their record. Clue
//! stamps are write-once per field in practice: re-clueing a card stamps
//! the same value again and never erases the other field.

use serde::{Deserialize, Serialize};

use super::id::CardId;
use super::name::{CardName, Color};

/// Runtime state of one physical card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Physical identity.
    pub id: CardId,

    /// The card's true name. Hidden from its holder; visible to everyone
    /// else. Projections control who sees this.
    pub name: CardName,

    /// Color this card has been clued with, if any.
    pub clued_color: Option<Color>,

    /// Number this card has been clued with, if any.
    pub clued_number: Option<u8>,
}

impl CardInfo {
    /// Create an unclued record binding an id to its name.
    #[must_use]
    pub fn new(id: CardId, name: CardName) -> Self {
        Self {
            id,
            name,
            clued_color: None,
            clued_number: None,
        }
    }

    /// Has this card been touched by any clue?
    #[must_use]
    pub fn is_clued(&self) -> bool {
        self.clued_color.is_some() || self.clued_number.is_some()
    }

    /// Does a color clue touch this card?
    #[must_use]
    pub fn matches_color(&self, color: Color) -> bool {
        self.name.color == color
    }

    /// Does a number clue touch this card?
    #[must_use]
    pub fn matches_number(&self, value: u8) -> bool {
        self.name.value == value
    }

    /// Stamp a color clue. Idempotent.
    pub fn stamp_color(&mut self, color: Color) {
        self.clued_color = Some(color);
    }

    /// Stamp a number clue. Idempotent.
    pub fn stamp_number(&mut self, value: u8) {
        self.clued_number = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b2() -> CardInfo {
        CardInfo::new(CardId::new(0), CardName::new(Color::Blue, 2))
    }

    #[test]
    fn test_new_info_is_unclued() {
        let info = b2();
        assert!(!info.is_clued());
        assert_eq!(info.clued_color, None);
        assert_eq!(info.clued_number, None);
    }

    #[test]
    fn test_clue_matching_uses_true_name() {
        let info = b2();
        assert!(info.matches_color(Color::Blue));
        assert!(!info.matches_color(Color::Red));
        assert!(info.matches_number(2));
        assert!(!info.matches_number(5));
    }

    #[test]
    fn test_stamps_accumulate_without_erasing() {
        let mut info = b2();
        info.stamp_color(Color::Blue);
        assert!(info.is_clued());
        info.stamp_number(2);
        assert_eq!(info.clued_color, Some(Color::Blue));
        assert_eq!(info.clued_number, Some(2));

        // Restamping the same color changes nothing.
        info.stamp_color(Color::Blue);
        assert_eq!(info.clued_color, Some(Color::Blue));
        assert_eq!(info.clued_number, Some(2));
    }

    #[test]
    fn test_info_serialization() {
        let mut info = b2();
        info.stamp_number(2);
        let json = serde_json::to_string(&info).unwrap();
        let deserialized: CardInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, deserialized);
    }
}
