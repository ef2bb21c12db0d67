//! The action reducer.
//!
//! `apply(state, action)` is the engine's entire public contract: a pure
//! transition function. Illegal actions - wrong turn, wrong status, no
//! clue tokens, out-of-range indices - return the state unchanged rather
//! than failing, so stale or out-of-order submissions are harmless. The
//! search relies on exactly this: it detects rejected actions by
//! noticing the turn did not advance.
//!
//! A misplayed card is not an illegal action. It is a fault: part of the
//! game, scored and capped, terminal at three.

use crate::cards::{CardId, CardInfo, MAX_VALUE};
use crate::core::action::Action;
use crate::core::config::{MAX_CLUES, MAX_FAULTS};
use crate::core::player::Player;
use crate::core::seat::{Seat, SeatMap};
use crate::core::state::{GameState, GameStatus};
use crate::hgroup;

use im::Vector;

/// Apply an action, returning the successor state.
///
/// The input is never mutated; branches explored from the same state
/// never alias mutable substructure.
#[must_use]
pub fn apply(state: &GameState, action: &Action) -> GameState {
    match action {
        Action::Join(player) => join(state, player),
        Action::Start { deck, players } => start(state, deck, players),
        Action::Discard { player, index } => discard(state, *player, *index),
        Action::Play { player, index } => play(state, *player, *index),
        Action::ClueColor {
            cluegiver,
            player,
            color,
        } => clue(state, action, *cluegiver, *player, |info| {
            if info.matches_color(*color) {
                info.stamp_color(*color);
            }
        }),
        Action::ClueNumber {
            cluegiver,
            player,
            value,
        } => clue(state, action, *cluegiver, *player, |info| {
            if info.matches_number(*value) {
                info.stamp_number(*value);
            }
        }),
    }
}

fn join(state: &GameState, player: &Player) -> GameState {
    if state.status != GameStatus::NotStarted {
        return state.clone();
    }
    let mut next = state.clone();
    next.players.push_back(player.clone());
    next
}

fn start(state: &GameState, deck_names: &[crate::cards::CardName], players: &[Player]) -> GameState {
    let hand_size = state.variant.hand_size(players.len());
    if state.status != GameStatus::NotStarted
        || players.is_empty()
        || deck_names.len() < players.len() * hand_size
    {
        return state.clone();
    }

    let mut next = state.clone();
    next.status = GameStatus::Playing;
    next.players = players.iter().cloned().collect();

    // Mint ids in deck order and bind every name before dealing.
    next.cards = deck_names
        .iter()
        .enumerate()
        .map(|(position, name)| {
            let id = CardId::new(position as u32);
            (id, CardInfo::new(id, *name))
        })
        .collect();
    next.deck = (0..deck_names.len() as u32).map(CardId::new).collect();

    // Deal a block off the deck front per seat, in seat order; the
    // block keeps deck order, so index 0 is the first card of the block.
    let seats = players.len();
    next.hands = SeatMap::new(seats, |_| Vector::new());
    for seat in Seat::all(seats) {
        for _ in 0..hand_size {
            if let Some(id) = next.deck.pop_front() {
                next.hands[seat].push_back(id);
            }
        }
    }

    next.piles = crate::core::state::Piles::new();

    hgroup::on_start(&mut next, &Action::Start {
        deck: deck_names.to_vec(),
        players: players.to_vec(),
    });
    next
}

fn discard(state: &GameState, player: Seat, index: usize) -> GameState {
    if state.status != GameStatus::Playing
        || state.turn != player
        || state.clues >= MAX_CLUES
        || index >= state.hands[player].len()
    {
        return state.clone();
    }

    let mut next = state.clone();
    let prior = next.cards.clone();
    next.clues += 1;
    let id = next.hands[player].remove(index);
    next.discard.push_back(id);
    draw(&mut next, player);
    end_turn(
        &mut next,
        &Action::Discard { player, index },
        prior,
    );
    next
}

fn play(state: &GameState, player: Seat, index: usize) -> GameState {
    if state.status != GameStatus::Playing
        || state.turn != player
        || index >= state.hands[player].len()
    {
        return state.clone();
    }

    let mut next = state.clone();
    let prior = next.cards.clone();
    let id = next.hands[player].remove(index);
    let Some(name) = next.card(id).map(|info| info.name) else {
        log::warn!("no card record for played {}", id);
        return state.clone();
    };

    let next_value = next.pile_height(name.color) + 1;
    if name.value != next_value {
        // A fault, not an error: the card is lost to the discard.
        next.faults += 1;
        next.discard.push_back(id);
    } else {
        next.piles.push(name.color, id);
        if name.value == MAX_VALUE && next.clues < MAX_CLUES {
            next.clues += 1;
        }
    }
    draw(&mut next, player);
    end_turn(&mut next, &Action::Play { player, index }, prior);
    next
}

fn clue(
    state: &GameState,
    action: &Action,
    cluegiver: Seat,
    player: Seat,
    stamp: impl Fn(&mut CardInfo),
) -> GameState {
    if state.status != GameStatus::Playing
        || state.turn != cluegiver
        || state.clues == 0
        || player.index() >= state.hands.seat_count()
    {
        return state.clone();
    }

    let mut next = state.clone();
    let prior = next.cards.clone();
    next.clues -= 1;
    let hand = next.hands[player].clone();
    for id in hand.iter() {
        if let Some(info) = next.cards.get_mut(id) {
            stamp(info);
        } else {
            log::warn!("no card record for clued {}", id);
        }
    }
    end_turn(&mut next, action, prior);
    next
}

fn draw(state: &mut GameState, player: Seat) {
    if let Some(id) = state.deck.pop_front() {
        state.hands[player].push_front(id);
    }
}

/// Shared end-of-turn path: refresh the derived convention state while
/// the action's target is still "as clued", then advance the turn and
/// settle termination.
fn end_turn(
    state: &mut GameState,
    action: &Action,
    prior: im::OrdMap<CardId, CardInfo>,
) {
    hgroup::refresh(state, action, prior);

    let seats = state.player_count();
    state.turn = state.turn.next(seats);

    if state.status != GameStatus::Playing {
        return;
    }
    if state.piles.all_complete() {
        state.status = GameStatus::Win;
    } else if state.faults == MAX_FAULTS {
        state.status = GameStatus::Fault;
    } else if state.deck.is_empty() {
        if state.final_turns == seats {
            state.status = GameStatus::Time;
        } else {
            state.final_turns += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{standard_deck, Color};

    fn players(count: usize) -> Vec<Player> {
        (0..count)
            .map(|i| Player::new(format!("user{i}"), format!("Player {i}")))
            .collect()
    }

    fn started(hands: &[&[&str]], rest: &[&str]) -> GameState {
        let roster = players(hands.len());
        let mut state = GameState::initial();
        for player in &roster {
            state = apply(&state, &Action::Join(player.clone()));
        }
        let deck = hands
            .iter()
            .flat_map(|h| h.iter())
            .chain(rest.iter())
            .map(|s| s.parse().unwrap())
            .collect();
        apply(
            &state,
            &Action::Start {
                deck,
                players: roster,
            },
        )
    }

    #[test]
    fn test_join_appends_until_start() {
        let mut state = GameState::initial();
        state = apply(&state, &Action::Join(Player::new("a", "A")));
        state = apply(&state, &Action::Join(Player::new("b", "B")));
        assert_eq!(state.player_count(), 2);

        let state = apply(
            &state,
            &Action::Start {
                deck: standard_deck(),
                players: players(2),
            },
        );
        let after = apply(&state, &Action::Join(Player::new("c", "C")));
        assert_eq!(after, state);
    }

    #[test]
    fn test_start_deals_blocks_in_deck_order() {
        let state = started(
            &[
                &["R3", "W1", "B2", "G1", "W3"],
                &["W2", "B4", "R1", "B2", "W5"],
            ],
            &[],
        );
        assert_eq!(state.status, GameStatus::Playing);
        let hand0: Vec<String> = state.hands[Seat::new(0)]
            .iter()
            .map(|id| state.card(*id).unwrap().name.to_string())
            .collect();
        assert_eq!(hand0, vec!["R3", "W1", "B2", "G1", "W3"]);
        assert!(state.deck.is_empty());
    }

    #[test]
    fn test_start_requires_enough_cards() {
        let roster = players(2);
        let mut state = GameState::initial();
        for player in &roster {
            state = apply(&state, &Action::Join(player.clone()));
        }
        let after = apply(
            &state,
            &Action::Start {
                deck: vec!["B1".parse().unwrap(); 9],
                players: roster,
            },
        );
        assert_eq!(after, state);
    }

    #[test]
    fn test_discard_regains_clue_and_draws() {
        let state = started(
            &[
                &["R3", "W1", "B2", "G1", "W3"],
                &["W2", "B4", "R1", "B2", "W5"],
            ],
            &["Y1"],
        );
        // At 8 tokens a discard is a no-op.
        let blocked = apply(
            &state,
            &Action::Discard {
                player: Seat::new(0),
                index: 4,
            },
        );
        assert_eq!(blocked, state);

        let state = apply(
            &state,
            &Action::ClueColor {
                cluegiver: Seat::new(0),
                player: Seat::new(1),
                color: Color::Red,
            },
        );
        let state = apply(
            &state,
            &Action::Discard {
                player: Seat::new(1),
                index: 4,
            },
        );
        assert_eq!(state.clues, 8);
        assert_eq!(state.discard.len(), 1);
        // Drawn card arrives at the front.
        let newest = state.hands[Seat::new(1)][0];
        assert_eq!(state.card(newest).unwrap().name.to_string(), "Y1");
    }

    #[test]
    fn test_play_success_and_fault() {
        let state = started(
            &[
                &["B1", "W1", "B2", "G1", "W3"],
                &["W2", "B4", "R1", "B3", "W5"],
            ],
            &["G2", "Y1"],
        );
        let state = apply(
            &state,
            &Action::Play {
                player: Seat::new(0),
                index: 0,
            },
        );
        assert_eq!(state.pile_height(Color::Blue), 1);
        assert_eq!(state.faults, 0);

        // W2 on an empty white pile is a misplay.
        let state = apply(
            &state,
            &Action::Play {
                player: Seat::new(1),
                index: 0,
            },
        );
        assert_eq!(state.faults, 1);
        assert_eq!(state.pile_height(Color::White), 0);
        assert_eq!(state.discard.len(), 1);
    }

    #[test]
    fn test_play_completing_five_grants_clue() {
        let state = started(
            &[
                &["W1", "W2", "W3", "W4", "W5"],
                &["R1", "B4", "G1", "B3", "Y4"],
            ],
            &["G2", "Y1", "R2", "B1", "Y2", "R3", "G3", "B2", "Y3", "R4"],
        );
        let mut state = state;
        // Burn a clue so the cap is visible when the 5 lands.
        state = apply(
            &state,
            &Action::ClueNumber {
                cluegiver: Seat::new(0),
                player: Seat::new(1),
                value: 4,
            },
        );
        state = apply(
            &state,
            &Action::ClueNumber {
                cluegiver: Seat::new(1),
                player: Seat::new(0),
                value: 1,
            },
        );
        assert_eq!(state.clues, 6);

        // Seat 0 runs out the white pile; W1 sits clued at index 0.
        for _ in 0..5 {
            let index = state.hands[Seat::new(0)]
                .iter()
                .position(|id| {
                    let info = state.card(*id).unwrap();
                    info.name.color == Color::White
                        && info.name.value == state.pile_height(Color::White) + 1
                })
                .unwrap();
            state = apply(
                &state,
                &Action::Play {
                    player: Seat::new(0),
                    index,
                },
            );
            // Seat 1 passes the turn back with a clue, except after the
            // last play.
            if state.pile_height(Color::White) < 5 {
                state = apply(
                    &state,
                    &Action::ClueNumber {
                        cluegiver: Seat::new(1),
                        player: Seat::new(0),
                        value: 4,
                    },
                );
            }
        }
        assert_eq!(state.pile_height(Color::White), 5);
        // Four clues spent passing back, one regained from the 5.
        assert_eq!(state.clues, 3);
    }

    #[test]
    fn test_wrong_turn_actions_are_noops() {
        let state = started(
            &[
                &["R3", "W1", "B2", "G1", "W3"],
                &["W2", "B4", "R1", "B2", "W5"],
            ],
            &["Y1"],
        );
        let clue = Action::ClueNumber {
            cluegiver: Seat::new(1),
            player: Seat::new(0),
            value: 1,
        };
        assert_eq!(apply(&state, &clue), state);
        let play = Action::Play {
            player: Seat::new(1),
            index: 0,
        };
        assert_eq!(apply(&state, &play), state);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let state = started(
            &[
                &["R3", "W1", "B2", "G1", "W3"],
                &["W2", "B4", "R1", "B2", "W5"],
            ],
            &[],
        );
        let play = Action::Play {
            player: Seat::new(0),
            index: 9,
        };
        assert_eq!(apply(&state, &play), state);
    }

    #[test]
    fn test_three_faults_end_the_game() {
        let state = started(
            &[
                &["W2", "W3", "W4", "G1", "B1"],
                &["R2", "R3", "R4", "B3", "W5"],
            ],
            &["Y5", "Y4", "Y3"],
        );
        let mut state = state;
        for _ in 0..2 {
            state = apply(
                &state,
                &Action::Play {
                    player: Seat::new(0),
                    index: 0,
                },
            );
            state = apply(
                &state,
                &Action::Play {
                    player: Seat::new(1),
                    index: 0,
                },
            );
        }
        assert_eq!(state.faults, 3);
        assert_eq!(state.status, GameStatus::Fault);

        // Terminal: gameplay fields frozen.
        let frozen = apply(
            &state,
            &Action::Play {
                player: state.turn,
                index: 0,
            },
        );
        assert_eq!(frozen.faults, state.faults);
        assert_eq!(frozen.discard, state.discard);
        assert_eq!(frozen.piles, state.piles);
    }

    #[test]
    fn test_deck_exhaustion_reaches_time() {
        let state = started(
            &[
                &["W1", "W2", "W3", "G1", "B1"],
                &["R2", "R3", "R4", "B3", "W5"],
            ],
            &[],
        );
        // Deck is already empty; each player gets one final turn.
        let state = apply(
            &state,
            &Action::Play {
                player: Seat::new(0),
                index: 0,
            },
        );
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.final_turns, 1);
        let state = apply(
            &state,
            &Action::Play {
                player: Seat::new(1),
                index: 3,
            },
        );
        assert_eq!(state.final_turns, 2);
        let state = apply(
            &state,
            &Action::Play {
                player: Seat::new(0),
                index: 0,
            },
        );
        assert_eq!(state.status, GameStatus::Time);
    }

    #[test]
    fn test_clue_stamps_matching_cards_only() {
        let state = started(
            &[
                &["R3", "W1", "B2", "G1", "W3"],
                &["W2", "B4", "R1", "B2", "W5"],
            ],
            &[],
        );
        let state = apply(
            &state,
            &Action::ClueColor {
                cluegiver: Seat::new(0),
                player: Seat::new(1),
                color: Color::Blue,
            },
        );
        let clued: Vec<Option<Color>> = state.hands[Seat::new(1)]
            .iter()
            .map(|id| state.card(*id).unwrap().clued_color)
            .collect();
        assert_eq!(
            clued,
            vec![None, Some(Color::Blue), None, Some(Color::Blue), None]
        );
    }

    #[test]
    fn test_determinism() {
        let state = started(
            &[
                &["B1", "W1", "B2", "G1", "W3"],
                &["W2", "B4", "R1", "B3", "W5"],
            ],
            &["G2"],
        );
        let action = Action::Play {
            player: Seat::new(0),
            index: 0,
        };
        assert_eq!(apply(&state, &action), apply(&state, &action));
    }
}
