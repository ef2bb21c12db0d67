//! H-Group convention inference.
//!
//! Reconstructs what a rational player following the H-Group convention
//! set would infer about unseen cards, and condenses it into scores the
//! action search can rank.
//!
//! ## Derived, never authoritative
//!
//! Everything in [`HGroup`] is recomputed from the rest of the state on
//! every state-changing action, in one pass per action:
//!
//! 1. **focus** - which card the clue was "about", diffed against the
//!    pre-action clue stamps,
//! 2. **infer** - possibility-set elimination for every player, then
//!    save/play classification of the focus card on clue actions,
//! 3. **chop** - the rightmost unclued card per hand,
//!
//! followed by rescoring. The pass runs before the turn flips so it sees
//! the state "as clued".
//!
//! ## Perspectives
//!
//! Inference is tracked per player: seat `p`'s records describe what `p`
//! can know. Other players' cards are fully visible to `p`; `p`'s own
//! cards are known only through clue stamps and counting.

pub mod chop;
pub mod clue;
pub mod focus;
pub mod infer;
pub mod score;

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInfo, CardName};
use crate::core::action::Action;
use crate::core::seat::{Seat, SeatMap};
use crate::core::state::GameState;

/// When a card is expected to be playable, per the convention read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Play {
    /// No play read on this card.
    #[default]
    None,
    /// Playable right now.
    Now,
    /// Playable after other clued cards land first.
    Later,
}

/// What one player can know about one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInference {
    /// Play read from the most recent clue focused on this card.
    pub play: Play,

    /// Whether the focusing clue was a save. `None` until the card has
    /// been a clue focus.
    pub save: Option<bool>,

    /// Names the observer cannot yet rule out.
    pub possible: OrdSet<CardName>,
}

impl CardInference {
    /// A fresh record with the given candidate set and no clue reads.
    #[must_use]
    pub fn new(possible: OrdSet<CardName>) -> Self {
        Self {
            play: Play::None,
            save: None,
            possible,
        }
    }

    /// The single remaining candidate, if the set has collapsed.
    #[must_use]
    pub fn resolved(&self) -> Option<CardName> {
        if self.possible.len() == 1 {
            self.possible.iter().next().copied()
        } else {
            None
        }
    }
}

/// One player's view of every card, plus their evaluation score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInference {
    /// Per-card records. An entry exists for every card from `Start` and
    /// is never removed.
    pub cards: OrdMap<CardId, CardInference>,

    /// This seat's evaluation score (see [`score`]).
    pub score: i64,
}

/// Derived convention state, recomputed on every action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HGroup {
    /// Per-seat chop index: the rightmost unclued card, if any.
    pub chop: SeatMap<Option<usize>>,

    /// Per-seat focus: the card the most recent clue was about.
    pub focus: SeatMap<Option<CardId>>,

    /// Snapshot of every card's record before the most recent action;
    /// focus detection diffs against it.
    pub prior_cards: OrdMap<CardId, CardInfo>,

    /// Per-seat inference.
    pub inference: SeatMap<PlayerInference>,

    /// Global evaluation score.
    pub score: i64,

    /// The action that produced this state.
    pub last_action: Option<Action>,
}

/// Initialize derived state at `Start`: full possibility sets for every
/// card, then a first elimination/chop/score pass. No focus - there is
/// no clue yet.
pub(crate) fn on_start(state: &mut GameState, action: &Action) {
    let seats = state.player_count();
    let full: OrdSet<CardName> = CardName::all().collect();
    let records: OrdMap<CardId, CardInference> = state
        .cards
        .keys()
        .copied()
        .map(|id| (id, CardInference::new(full.clone())))
        .collect();

    state.hgroup = HGroup {
        chop: SeatMap::with_value(seats, None),
        focus: SeatMap::with_value(seats, None),
        prior_cards: state.cards.clone(),
        inference: SeatMap::new(seats, |_| PlayerInference {
            cards: records.clone(),
            score: 0,
        }),
        score: 0,
        last_action: Some(action.clone()),
    };

    for seat in Seat::all(seats) {
        let (cards, _) = infer::eliminate(state, seat);
        state.hgroup.inference[seat].cards = cards;
    }
    recompute_chop(state);
    score::rescore(state);
}

/// The per-action refresh: focus, then inference, then chop, then
/// scores. `prior` is the card map as it stood before the action.
pub(crate) fn refresh(state: &mut GameState, action: &Action, prior: OrdMap<CardId, CardInfo>) {
    let seats = state.player_count();
    let prev_chop = state.hgroup.chop.clone();
    let chop_before = |seat: Seat| -> Option<usize> {
        if prev_chop.is_empty() {
            None
        } else {
            prev_chop[seat]
        }
    };

    let mut focus_map: SeatMap<Option<CardId>> = SeatMap::with_value(seats, None);
    if let Some(target) = action.clue_target() {
        if target.index() < seats {
            focus_map[target] = focus::detect(state, action, &prior, chop_before(target));
        }
    }
    state.hgroup.focus = focus_map;

    for seat in Seat::all(seats) {
        let (cards, table) = infer::eliminate(state, seat);
        state.hgroup.inference[seat].cards = cards;

        if action.clue_target() == Some(seat) {
            if let Some(focus_id) = state.hgroup.focus[seat] {
                clue::classify(state, seat, focus_id, &table, chop_before(seat), &prior);
            }
        }
    }

    recompute_chop(state);
    score::rescore(state);

    state.hgroup.prior_cards = prior;
    state.hgroup.last_action = Some(action.clone());
}

fn recompute_chop(state: &mut GameState) {
    let seats = state.player_count();
    let mut chop_map: SeatMap<Option<usize>> = SeatMap::with_value(seats, None);
    for seat in Seat::all(seats) {
        chop_map[seat] = chop::chop_index(state, seat);
    }
    state.hgroup.chop = chop_map;
}
