//! Focus detection.
//!
//! A clue conventionally singles out one card - the focus - and the rest
//! of its meaning hangs off that card. Detection diffs the target hand's
//! clue stamps against the pre-action snapshot:
//!
//! - newly-touched cards (both fields unset before, at least one set
//!   now) are collected in hand order;
//! - the pre-clue chop wins when it is newly touched and is the last
//!   (oldest) such card; otherwise the first newly-touched card wins;
//! - with nothing newly touched (a re-clue), the first card matching the
//!   clue predicate is picked, without chop priority. That fallback is
//!   preserved from the reference behavior as-is.

use im::OrdMap;
use smallvec::SmallVec;

use crate::cards::{CardId, CardInfo};
use crate::core::action::Action;
use crate::core::state::GameState;

/// The card a clue is about, or `None` for a clue that touches nothing.
///
/// `prev_chop` is the target's chop index as it stood before this clue.
#[must_use]
pub fn detect(
    state: &GameState,
    action: &Action,
    prior: &OrdMap<CardId, CardInfo>,
    prev_chop: Option<usize>,
) -> Option<CardId> {
    let target = action.clue_target()?;
    let hand = &state.hands[target];

    let mut touched: SmallVec<[usize; 5]> = SmallVec::new();
    for (index, id) in hand.iter().enumerate() {
        let Some(now) = state.card(*id) else {
            log::warn!("no card record for {} during focus detection", id);
            continue;
        };
        let was_unclued = prior.get(id).map_or(true, |before| !before.is_clued());
        if was_unclued && now.is_clued() {
            touched.push(index);
        }
    }

    if let (Some(&last), Some(chop)) = (touched.last(), prev_chop) {
        if last == chop {
            return hand.get(chop).copied();
        }
    }
    if let Some(&first) = touched.first() {
        return hand.get(first).copied();
    }

    // Legacy re-clue fallback: no transition happened, pick the first
    // card the clue predicate matches.
    for id in hand.iter() {
        let Some(info) = state.card(*id) else { continue };
        let matched = match action {
            Action::ClueColor { color, .. } => info.matches_color(*color),
            Action::ClueNumber { value, .. } => info.matches_number(*value),
            _ => false,
        };
        if matched {
            return Some(*id);
        }
    }
    None
}
