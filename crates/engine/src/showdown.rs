// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution.
use serde::{Deserialize, Serialize};

use holdem_cards::Card;
use holdem_eval::{EvalError, HandValue};

use crate::{Chips, Error, GameState, Player, Result};

/// A participant's best hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHandResult {
    /// The participant.
    pub player: Player,
    /// The participant's seat.
    pub player_index: usize,
    /// The best five cards out of hole plus community cards.
    pub best_hand: Vec<Card>,
    /// The value of the best hand.
    pub evaluation: HandValue,
}

/// The outcome of a showdown.
///
/// Computed once per hand and consumed immediately by
/// [distribute_pot]; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownResult {
    /// The participants sharing the best hand.
    pub winners: Vec<PlayerHandResult>,
    /// Results for every non folded participant.
    pub all_player_results: Vec<PlayerHandResult>,
    /// The pot share credited to each winner.
    pub pot_per_winner: Chips,
}

/// Finds the best five card hand among all C(n,5) subsets of the given
/// cards. Brute force is fine at n <= 7.
pub fn best_hand(cards: &[Card]) -> Result<(Vec<Card>, HandValue)> {
    let n = cards.len();
    let mut best: Option<(Vec<Card>, HandValue)> = None;

    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let hand = vec![cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let value = HandValue::eval(&hand)?;

                        match &best {
                            Some((_, best_value)) if *best_value >= value => {}
                            _ => best = Some((hand, value)),
                        }
                    }
                }
            }
        }
    }

    best.ok_or(Error::Eval(EvalError::InvalidHandSize { got: n }))
}

/// Resolves the showdown for every non folded participant.
///
/// Each participant plays the best five cards out of their hole cards plus
/// the community cards; every participant tied at the maximum is a winner.
/// The pot share is `pot / winners` in integer chips; on a split the
/// division remainder stays unawarded rather than going to an arbitrary
/// seat.
pub fn evaluate_showdown(state: &GameState) -> Result<ShowdownResult> {
    let mut all_player_results = Vec::new();
    for (player_index, player) in state.players.iter().enumerate() {
        if !player.in_hand() {
            continue;
        }

        let mut cards = player.hand.clone();
        cards.extend_from_slice(&state.community_cards);
        let (best_hand, evaluation) = best_hand(&cards)?;

        all_player_results.push(PlayerHandResult {
            player: player.clone(),
            player_index,
            best_hand,
            evaluation,
        });
    }

    // No participants means an uncontested pot, which is the caller's
    // business to settle.
    let Some(best_value) = all_player_results
        .iter()
        .map(|r| r.evaluation.clone())
        .max()
    else {
        return Ok(ShowdownResult {
            winners: Vec::new(),
            all_player_results,
            pot_per_winner: Chips::ZERO,
        });
    };

    let winners = all_player_results
        .iter()
        .filter(|r| r.evaluation == best_value)
        .cloned()
        .collect::<Vec<_>>();

    let pot_per_winner = state.pot / winners.len() as u32;

    Ok(ShowdownResult {
        winners,
        all_player_results,
        pot_per_winner,
    })
}

/// Credits the pot share to each winner and empties the pot.
///
/// Advancing the dealer and starting the next hand are left to the caller.
pub fn distribute_pot(state: &GameState, result: &ShowdownResult) -> GameState {
    let mut players = state.players.clone();
    for winner in &result.winners {
        players[winner.player_index].chips += result.pot_per_winner;
    }

    GameState {
        players,
        pot: Chips::ZERO,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_eval::HandRank;
    use rand::{SeedableRng, rngs::StdRng};

    use holdem_cards::{Rank, Suit};

    use crate::PlayerStatus;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    /// A river state with fixed hole and community cards.
    fn river_state(hands: [[Card; 2]; 3], board: [Card; 5], pot: u32) -> GameState {
        let mut rng = StdRng::seed_from_u64(13);
        let mut state = GameState::new(&mut rng);

        for (player, hole) in state.players.iter_mut().zip(hands) {
            player.hand = hole.to_vec();
        }

        state.community_cards = board.to_vec();
        state.pot = Chips::new(pot);
        state.phase = crate::Phase::Showdown;
        state
    }

    #[test]
    fn single_winner_takes_the_pot() {
        use Rank::*;
        use Suit::*;

        // Seat 0 completes a royal flush on the board.
        let state = river_state(
            [
                [card(Ace, Hearts), card(King, Hearts)],
                [card(Deuce, Clubs), card(Seven, Diamonds)],
                [card(Four, Spades), card(Nine, Clubs)],
            ],
            [
                card(Queen, Hearts),
                card(Jack, Hearts),
                card(Ten, Hearts),
                card(Trey, Diamonds),
                card(Eight, Spades),
            ],
            300,
        );

        let result = evaluate_showdown(&state).unwrap();
        assert_eq!(result.all_player_results.len(), 3);
        assert_eq!(result.winners.len(), 1);
        assert_eq!(result.winners[0].player_index, 0);
        assert_eq!(result.winners[0].evaluation.rank(), HandRank::RoyalFlush);
        assert_eq!(result.pot_per_winner, Chips::new(300));

        let state = distribute_pot(&state, &result);
        assert_eq!(state.players[0].chips, Chips::new(1300));
        assert_eq!(state.players[1].chips, Chips::new(1000));
        assert_eq!(state.pot, Chips::ZERO);
    }

    #[test]
    fn folded_players_do_not_contest() {
        use Rank::*;
        use Suit::*;

        let mut state = river_state(
            [
                [card(Ace, Hearts), card(King, Hearts)],
                [card(Deuce, Clubs), card(Seven, Diamonds)],
                [card(Four, Spades), card(Nine, Clubs)],
            ],
            [
                card(Queen, Hearts),
                card(Jack, Hearts),
                card(Ten, Hearts),
                card(Trey, Diamonds),
                card(Eight, Spades),
            ],
            120,
        );

        // The royal flush folded; somebody else wins.
        state.players[0].status = PlayerStatus::Folded;

        let result = evaluate_showdown(&state).unwrap();
        assert_eq!(result.all_player_results.len(), 2);
        assert!(result.winners.iter().all(|w| w.player_index != 0));
    }

    #[test]
    fn all_in_players_still_contest() {
        use Rank::*;
        use Suit::*;

        let mut state = river_state(
            [
                [card(Ace, Hearts), card(King, Hearts)],
                [card(Deuce, Clubs), card(Seven, Diamonds)],
                [card(Four, Spades), card(Nine, Clubs)],
            ],
            [
                card(Queen, Hearts),
                card(Jack, Hearts),
                card(Ten, Hearts),
                card(Trey, Diamonds),
                card(Eight, Spades),
            ],
            90,
        );

        state.players[0].status = PlayerStatus::AllIn;

        let result = evaluate_showdown(&state).unwrap();
        assert_eq!(result.winners.len(), 1);
        assert_eq!(result.winners[0].player_index, 0);
    }

    #[test]
    fn best_hand_uses_both_hole_cards_when_better() {
        use Rank::*;
        use Suit::*;

        // Seat 1 holds a pocket pair that plays as trips with the board.
        let state = river_state(
            [
                [card(Deuce, Clubs), card(Seven, Diamonds)],
                [card(Nine, Hearts), card(Nine, Diamonds)],
                [card(Four, Spades), card(King, Clubs)],
            ],
            [
                card(Nine, Spades),
                card(Five, Hearts),
                card(Queen, Diamonds),
                card(Trey, Diamonds),
                card(Eight, Spades),
            ],
            60,
        );

        let result = evaluate_showdown(&state).unwrap();
        assert_eq!(result.winners.len(), 1);
        assert_eq!(result.winners[0].player_index, 1);
        assert_eq!(
            result.winners[0].evaluation.rank(),
            HandRank::ThreeOfAKind
        );
    }

    #[test]
    fn tied_hands_split_the_pot() {
        use Rank::*;
        use Suit::*;

        // Seats 0 and 1 play the same pair of sevens with ace, king, queen
        // kickers; suits never break ties. Seat 2 only has a five kicker.
        let state = river_state(
            [
                [card(Queen, Spades), card(Jack, Spades)],
                [card(Queen, Clubs), card(Jack, Clubs)],
                [card(Four, Hearts), card(Five, Hearts)],
            ],
            [
                card(Seven, Clubs),
                card(Seven, Diamonds),
                card(Ace, Hearts),
                card(King, Diamonds),
                card(Deuce, Spades),
            ],
            301,
        );

        let result = evaluate_showdown(&state).unwrap();
        assert_eq!(result.winners.len(), 2);
        assert_eq!(result.pot_per_winner, Chips::new(150));

        // The odd chip is left on the floor, the documented remainder loss.
        let state = distribute_pot(&state, &result);
        assert_eq!(state.players[0].chips, Chips::new(1150));
        assert_eq!(state.players[1].chips, Chips::new(1150));
        assert_eq!(state.players[2].chips, Chips::new(1000));
        assert_eq!(state.pot, Chips::ZERO);
    }

    #[test]
    fn no_participants_yields_an_empty_result() {
        use Rank::*;
        use Suit::*;

        let mut state = river_state(
            [
                [card(Ace, Hearts), card(King, Hearts)],
                [card(Deuce, Clubs), card(Seven, Diamonds)],
                [card(Four, Spades), card(Nine, Clubs)],
            ],
            [
                card(Queen, Hearts),
                card(Jack, Hearts),
                card(Ten, Hearts),
                card(Trey, Diamonds),
                card(Eight, Spades),
            ],
            50,
        );

        for player in &mut state.players {
            player.status = PlayerStatus::Folded;
        }

        let result = evaluate_showdown(&state).unwrap();
        assert!(result.winners.is_empty());
        assert!(result.all_player_results.is_empty());
        assert_eq!(result.pot_per_winner, Chips::ZERO);
    }
}
