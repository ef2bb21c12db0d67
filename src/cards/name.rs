//! Card names: a color plus a value.
//!
//! A name identifies what a card *is* ("B2"), not which physical card it
//! is - the standard deck contains up to three physical copies of a
//! name. Physical identity lives in [`CardId`](super::CardId).
//!
//! Names are structured data. Nothing in the crate slices strings to
//! recover a color or value; parsing exists only at the text boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suit colors of the standard variant, in canonical order.
///
/// The derived `Ord` follows this order; possibility sets and candidate
/// lists iterate colors White, Red, Blue, Yellow, Green.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Green,
    ];

    /// Canonical index of this color (0-4).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-letter abbreviation ("W", "R", "B", "Y", "G").
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Green => 'G',
        }
    }

    /// Parse a one-letter abbreviation.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Color> {
        match letter {
            'W' => Some(Color::White),
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            'G' => Some(Color::Green),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Physical copies of each value per color: three 1s, one 5, two otherwise.
pub const COPIES_PER_VALUE: [u8; 5] = [3, 2, 2, 2, 1];

/// Highest card value; also the completed height of a pile.
pub const MAX_VALUE: u8 = 5;

/// A card name: color plus value.
///
/// ```
/// use hanabi_engine::cards::{CardName, Color};
///
/// let name: CardName = "B2".parse().unwrap();
/// assert_eq!(name, CardName::new(Color::Blue, 2));
/// assert_eq!(name.to_string(), "B2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardName {
    /// Suit color.
    pub color: Color,
    /// Value, 1-5.
    pub value: u8,
}

impl CardName {
    /// Create a card name.
    #[must_use]
    pub const fn new(color: Color, value: u8) -> Self {
        Self { color, value }
    }

    /// Physical copies of this name in a standard deck.
    #[must_use]
    pub const fn copies(self) -> u8 {
        COPIES_PER_VALUE[(self.value - 1) as usize]
    }

    /// Iterate every name of the standard variant in canonical order.
    pub fn all() -> impl Iterator<Item = CardName> {
        Color::ALL
            .into_iter()
            .flat_map(|color| (1..=MAX_VALUE).map(move |value| CardName::new(color, value)))
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.value)
    }
}

/// Error parsing a card name from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseNameError;

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a color letter followed by a value 1-5")
    }
}

impl std::error::Error for ParseNameError {}

impl FromStr for CardName {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let color = chars
            .next()
            .and_then(Color::from_letter)
            .ok_or(ParseNameError)?;
        let value = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(ParseNameError)? as u8;
        if chars.next().is_some() || !(1..=MAX_VALUE).contains(&value) {
            return Err(ParseNameError);
        }
        Ok(CardName::new(color, value))
    }
}
