//! Game setup outside the reducer's transactional boundary.
//!
//! The reducer is deterministic: `Start` receives an already-shuffled
//! deck and seating order. This helper produces that action from a
//! seeded [`GameRng`], so a whole game is reproducible from (seed,
//! action log).

use crate::cards::standard_deck;
use crate::core::action::Action;
use crate::core::player::Player;
use crate::core::rng::GameRng;

/// Build a `Start` action with a uniformly shuffled standard deck and
/// seating order.
#[must_use]
pub fn shuffled_start(players: &[Player], rng: &mut GameRng) -> Action {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    let mut order = players.to_vec();
    rng.shuffle(&mut order);
    Action::Start {
        deck,
        players: order,
    }
}
