//! Game state: the authoritative value the reducer folds over.
//!
//! ## Purity
//!
//! `apply` never mutates its input: it clones the state and returns a new
//! value. All collections are `im` persistent structures, so a clone is
//! O(1) and two states derived from the same base never alias mutable
//! substructure. The action search leans on this: it explores many
//! hypothetical futures branched from one state.
//!
//! ## Zones
//!
//! Every physical card id is in exactly one of: deck, a hand, the
//! discard, or a pile. [`GameState::card_census`] materializes that
//! partition for the conservation property tests.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::{Variant, MAX_CLUES};
use super::player::Player;
use super::seat::{Seat, SeatMap};
use crate::cards::{CardId, CardInfo, Color, MAX_VALUE};
use crate::hgroup::HGroup;

/// Lifecycle of a game.
///
/// `NotStarted → Playing → {Win | Fault | Time}`; terminal states are
/// never left. The reducer still accepts actions structurally after the
/// game ends - they are no-ops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Players may join; nothing is dealt.
    #[default]
    NotStarted,
    /// The game is live.
    Playing,
    /// Every pile was completed.
    Win,
    /// Three faults were committed.
    Fault,
    /// The deck ran out and every player took a final turn.
    Time,
}

impl GameStatus {
    /// Has the game ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Fault | GameStatus::Time)
    }
}

/// One ordered stack per color, strictly increasing from 1.
///
/// A pile's length is its current top value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    stacks: [Vector<CardId>; 5],
}

impl Default for Piles {
    fn default() -> Self {
        Self::new()
    }
}

impl Piles {
    /// Five empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stacks: [
                Vector::new(),
                Vector::new(),
                Vector::new(),
                Vector::new(),
                Vector::new(),
            ],
        }
    }

    /// The stack for a color, bottom first.
    #[must_use]
    pub fn stack(&self, color: Color) -> &Vector<CardId> {
        &self.stacks[color.index()]
    }

    /// Current height of a color's pile; equals its top value.
    #[must_use]
    pub fn height(&self, color: Color) -> u8 {
        self.stacks[color.index()].len() as u8
    }

    /// Push the next card of a color.
    pub fn push(&mut self, color: Color, id: CardId) {
        self.stacks[color.index()].push_back(id);
    }

    /// Total cards played across all piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.stacks.iter().map(Vector::len).sum()
    }

    /// Are all piles complete?
    #[must_use]
    pub fn all_complete(&self) -> bool {
        Color::ALL
            .into_iter()
            .all(|color| self.height(color) == MAX_VALUE)
    }

    /// Iterate (color, stack) pairs in canonical color order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &Vector<CardId>)> {
        Color::ALL
            .into_iter()
            .map(move |color| (color, self.stack(color)))
    }
}

/// Complete game state.
///
/// Fields mirror the table: roster, draw deck, hands, discard, piles and
/// counters, plus the per-card records and the derived convention state.
/// The derived `hgroup` block is recomputed by the reducer on every
/// state-changing action and is never independently authoritative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Roster in seating order (seating fixed by `Start`).
    pub players: Vector<Player>,

    /// Rule variant in force.
    pub variant: Variant,

    /// Draw deck; the front (index 0) is drawn next.
    pub deck: Vector<CardId>,

    /// Per-seat hands; index 0 is the newest card, the last index is the
    /// chop side.
    pub hands: SeatMap<Vector<CardId>>,

    /// Discarded and misplayed cards, in order of arrival.
    pub discard: Vector<CardId>,

    /// Faults committed, 0-3.
    pub faults: u8,

    /// Clue tokens available, 0-8.
    pub clues: u8,

    /// Play piles.
    pub piles: Piles,

    /// Lifecycle status.
    pub status: GameStatus,

    /// Whose turn it is.
    pub turn: Seat,

    /// Turns taken since the deck emptied.
    pub final_turns: usize,

    /// Per-card records: name binding plus clue stamps. Created at
    /// `Start` for every card and never removed.
    pub cards: OrdMap<CardId, CardInfo>,

    /// Derived H-Group convention state.
    pub hgroup: HGroup,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl GameState {
    /// The state before anyone has joined.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            players: Vector::new(),
            variant: Variant::Standard,
            deck: Vector::new(),
            hands: SeatMap::empty(),
            discard: Vector::new(),
            faults: 0,
            clues: MAX_CLUES,
            piles: Piles::new(),
            status: GameStatus::NotStarted,
            turn: Seat::new(0),
            final_turns: 0,
            cards: OrdMap::new(),
            hgroup: HGroup::default(),
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Vector<CardId> {
        &self.hands[seat]
    }

    /// Look up a card's record.
    ///
    /// `None` for an id the engine never minted - callers treat that as
    /// an invariant violation, not a user error.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardInfo> {
        self.cards.get(&id)
    }

    /// Current height of a color's pile.
    #[must_use]
    pub fn pile_height(&self, color: Color) -> u8 {
        self.piles.height(color)
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Every card id across deck, hands, discard and piles, sorted.
    ///
    /// For any reachable state this equals the ids minted at `Start`
    /// exactly - no duplication, no loss.
    #[must_use]
    pub fn card_census(&self) -> Vec<CardId> {
        let mut census: Vec<CardId> = Vec::with_capacity(self.cards.len());
        census.extend(self.deck.iter().copied());
        for (_, hand) in self.hands.iter() {
            census.extend(hand.iter().copied());
        }
        census.extend(self.discard.iter().copied());
        for (_, stack) in self.piles.iter() {
            census.extend(stack.iter().copied());
        }
        census.sort_unstable();
        census
    }
}
