// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heuristic betting policy.
use log::debug;
use rand::prelude::*;

use holdem_cards::{Card, Rank, Suit};
use holdem_engine::{Chips, GameState, PlayerAction, Result};
use holdem_eval::HandValue;

/// Pot odds below this are worth a call with any made hand.
const GOOD_POT_ODDS: f64 = 0.2;
/// Pot odds above this are not worth chasing with nothing.
const TERRIBLE_POT_ODDS: f64 = 0.5;
/// Probability of a bluff raise.
const BLUFF_PROBABILITY: f64 = 0.15;
/// The small fixed bluff bet.
const BLUFF_BET: Chips = Chips::new(20);
/// Minimum stack before bluffing is worth it.
const MIN_BLUFF_STACK: Chips = Chips::new(50);

/// A Poker bot policy.
pub trait Strategy {
    /// Picks an action for the given seat.
    fn execute(&mut self, state: &GameState, seat: usize) -> Result<PlayerAction>;
}

/// A policy playing rough hand strength against pot odds.
///
/// The hand is ranked from a single five card combination: post-flop the
/// hole cards plus the board truncated to five, pre-flop the hole cards
/// padded with low filler clubs. This is deliberately weaker than the
/// showdown's best-of-seven search, the bot can misjudge a hand the
/// resolver would rank higher.
#[derive(Debug)]
pub struct HeuristicStrategy<R: Rng> {
    rng: R,
}

impl HeuristicStrategy<StdRng> {
    /// Creates a strategy with entropy seeded bluff rolls.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a strategy with deterministic bluff rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for HeuristicStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicStrategy<R> {
    /// Creates a strategy over the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn bluffs(&mut self) -> bool {
        self.rng.random::<f64>() < BLUFF_PROBABILITY
    }
}

/// Ranks the seat's cards as a single pseudo five card hand.
fn seat_hand_value(hand: &[Card], community: &[Card]) -> Result<HandValue> {
    let mut cards = hand.to_vec();

    if community.len() >= 3 {
        cards.extend_from_slice(community);
    } else {
        // Pre-flop there is nothing to combine with, pad the hole cards
        // with fixed low fillers to get a rankable hand. An approximation
        // of starting hand strength, not real pre-flop equity.
        let fillers = [
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Trey, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
        ];
        cards.extend(fillers.iter().take(5 - cards.len().min(5)));
    }

    cards.truncate(5);
    Ok(HandValue::eval(&cards)?)
}

impl<R: Rng> Strategy for HeuristicStrategy<R> {
    fn execute(&mut self, state: &GameState, seat: usize) -> Result<PlayerAction> {
        let player = &state.players[seat];
        let call_amount = state.current_bet - player.bet;

        let value = seat_hand_value(&player.hand, &state.community_cards)?;
        let strength = value.strength();

        // A raise can never put in more than the seat has behind.
        let max_raise = player.chips + player.bet;

        if call_amount == Chips::ZERO {
            // Straight or better bets half the pot.
            if strength >= 5 {
                let amount = state.current_bet + state.pot / 2;
                debug!("seat {seat} value bets with {value}");
                return Ok(PlayerAction::Raise(amount.min(max_raise)));
            }

            // Sometimes bluff at the pot with enough chips behind.
            if player.chips > MIN_BLUFF_STACK && self.bluffs() {
                debug!("seat {seat} bluffs with {value}");
                return Ok(PlayerAction::Raise(BLUFF_BET.min(player.chips)));
            }

            return Ok(PlayerAction::Check);
        }

        let pot_odds =
            call_amount.amount() as f64 / (state.pot + call_amount).amount() as f64;

        // Flush or better always raises three quarters of the pot.
        if strength >= 6 {
            let amount = state.current_bet + state.pot * 3 / 4;
            debug!("seat {seat} raises with {value}");
            return Ok(PlayerAction::Raise(amount.min(max_raise)));
        }

        // A made hand with good pot odds calls, strong ones occasionally
        // raise a third of the pot instead.
        if strength >= 2 && pot_odds < GOOD_POT_ODDS {
            if strength >= 4 && self.bluffs() {
                let amount = state.current_bet + state.pot * 3 / 10;
                return Ok(PlayerAction::Raise(amount.min(max_raise)));
            }

            return Ok(PlayerAction::Call);
        }

        // A made hand with mediocre odds.
        if strength >= 2 {
            return Ok(if pot_odds < GOOD_POT_ODDS * 1.5 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            });
        }

        // High card only, fold unless the call is nearly free.
        if pot_odds > TERRIBLE_POT_ODDS {
            return Ok(PlayerAction::Fold);
        }

        if pot_odds < GOOD_POT_ODDS * 0.5 {
            return Ok(PlayerAction::Call);
        }

        Ok(PlayerAction::Fold)
    }
}
