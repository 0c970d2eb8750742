// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state types.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, Deck};

use crate::{Chips, Player, PlayerStatus};

/// Chips each seat starts the game with.
pub const STARTING_CHIPS: Chips = Chips::new(1000);
/// The small blind, posted by the seat after the dealer.
pub const SMALL_BLIND: Chips = Chips::new(5);
/// The big blind, posted two seats after the dealer.
pub const BIG_BLIND: Chips = Chips::new(10);
/// Number of seats at the table.
pub const SEATS: usize = 3;

/// The phase of a hand.
///
/// Phases advance linearly, there are no backward transitions; after the
/// first hand a new hand moves from showdown straight to pre-flop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No hand dealt yet.
    Waiting,
    /// Hole cards dealt, blinds posted.
    PreFlop,
    /// Three community cards on the board.
    Flop,
    /// Four community cards on the board.
    Turn,
    /// All five community cards on the board.
    River,
    /// Betting is over, hands are compared.
    Showdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Waiting => "waiting",
            Phase::PreFlop => "pre-flop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        };

        write!(f, "{name}")
    }
}

/// A discrete betting action for the acting seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Give up the hand.
    Fold,
    /// Pass while owing nothing.
    Check,
    /// Match the table bet.
    Call,
    /// Raise to a new total bet for the round, not an increment.
    Raise(Chips),
    /// Commit the whole remaining stack.
    AllIn,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => write!(f, "fold"),
            PlayerAction::Check => write!(f, "check"),
            PlayerAction::Call => write!(f, "call"),
            PlayerAction::Raise(amount) => write!(f, "raise to {amount}"),
            PlayerAction::AllIn => write!(f, "all-in"),
        }
    }
}

/// The authoritative game state.
///
/// A plain value: every engine operation consumes a reference and returns a
/// new state, the caller owns the single authoritative copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vec<Player>,
    /// Undealt cards.
    pub deck: Deck,
    /// Community cards revealed so far, 0, 3, 4 or 5.
    pub community_cards: Vec<Card>,
    /// Chips committed and moved out of the player bet fields.
    pub pot: Chips,
    /// The seat to act.
    pub current_player_index: usize,
    /// The seat holding the dealer button.
    pub dealer_index: usize,
    /// The phase of the current hand.
    pub phase: Phase,
    /// The table's bet to match.
    pub current_bet: Chips,
    /// The seat whose bet set the current level, `None` before any raise
    /// this round. Play returning to this seat ends the round.
    pub last_raiser_index: Option<usize>,
}

impl GameState {
    /// Creates the fixed three seat table, one human seat and two bots,
    /// with a shuffled deck and no hand dealt.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let players = vec![
            Player::new("human", "You", STARTING_CHIPS, true),
            Player::new("ai-1", "Bot 1", STARTING_CHIPS, false),
            Player::new("ai-2", "Bot 2", STARTING_CHIPS, false),
        ];

        Self::with_players(players, rng)
    }

    /// Creates a game over the given seats.
    pub fn with_players<R: Rng>(players: Vec<Player>, rng: &mut R) -> Self {
        let deck = Deck::new().shuffled(rng);

        Self {
            players,
            deck,
            community_cards: Vec::new(),
            pot: Chips::ZERO,
            current_player_index: 1,
            dealer_index: 0,
            phase: Phase::Waiting,
            current_bet: Chips::ZERO,
            last_raiser_index: None,
        }
    }

    /// The seat currently to act.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Number of seats still able to act in the hand.
    pub fn count_active(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Number of seats still contesting the pot.
    pub fn count_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.in_hand()).count()
    }

    /// Number of seats holding chips.
    pub fn count_with_chips(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.chips > Chips::ZERO)
            .count()
    }

    /// Moves the button one seat for the next hand and parks the phase at
    /// waiting. The caller runs this between pot distribution and the next
    /// [start_new_hand](GameState::start_new_hand).
    pub fn advance_dealer(&self) -> GameState {
        GameState {
            dealer_index: (self.dealer_index + 1) % self.players.len(),
            phase: Phase::Waiting,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn new_game_layout() {
        let mut rng = StdRng::seed_from_u64(13);
        let state = GameState::new(&mut rng);

        assert_eq!(state.players.len(), SEATS);
        assert!(state.players[0].is_human);
        assert!(!state.players[1].is_human);
        assert!(!state.players[2].is_human);
        assert!(state.players.iter().all(|p| p.chips == STARTING_CHIPS));
        assert!(state.players.iter().all(|p| p.status == PlayerStatus::Active));

        assert_eq!(state.phase, Phase::Waiting);
        assert_eq!(state.pot, Chips::ZERO);
        assert_eq!(state.dealer_index, 0);
        assert_eq!(state.current_player_index, 1);
        assert_eq!(state.last_raiser_index, None);
        assert_eq!(state.deck.count(), Deck::SIZE);
    }

    #[test]
    fn advance_dealer_rotates_and_waits() {
        let mut rng = StdRng::seed_from_u64(13);
        let state = GameState::new(&mut rng);

        let state = state.advance_dealer();
        assert_eq!(state.dealer_index, 1);
        assert_eq!(state.phase, Phase::Waiting);

        let state = state.advance_dealer().advance_dealer();
        assert_eq!(state.dealer_index, 0);
    }
}
