// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The betting state machine.
use log::debug;
use rand::Rng;

use holdem_cards::Deck;

use crate::{
    BIG_BLIND, Chips, Error, GameState, Phase, PlayerAction, PlayerStatus, Result, SMALL_BLIND,
};

impl GameState {
    /// Starts a new hand.
    ///
    /// Shuffles a fresh deck, deals two hole cards to every seat, posts the
    /// blinds from the two seats after the dealer and opens pre-flop betting
    /// at the seat after the big blind. The big blind seat is recorded as the
    /// round's initial raiser so the completion check knows where action must
    /// return.
    pub fn start_new_hand<R: Rng>(&self, rng: &mut R) -> Result<GameState> {
        let mut deck = Deck::new().shuffled(rng);

        let mut players = self.players.clone();
        for player in &mut players {
            let (cards, rest) = deck.deal(2)?;
            player.hand = cards;
            player.bet = Chips::ZERO;
            player.status = PlayerStatus::Active;
            deck = rest;
        }

        let seats = players.len();
        let small_blind_index = (self.dealer_index + 1) % seats;
        let big_blind_index = (self.dealer_index + 2) % seats;

        players[small_blind_index].bet = SMALL_BLIND;
        players[small_blind_index].chips -= SMALL_BLIND;
        players[big_blind_index].bet = BIG_BLIND;
        players[big_blind_index].chips -= BIG_BLIND;

        debug!(
            "new hand, dealer seat {}, blinds at {small_blind_index} and {big_blind_index}",
            self.dealer_index
        );

        Ok(GameState {
            players,
            deck,
            community_cards: Vec::new(),
            pot: SMALL_BLIND + BIG_BLIND,
            current_bet: BIG_BLIND,
            phase: Phase::PreFlop,
            current_player_index: (big_blind_index + 1) % seats,
            last_raiser_index: Some(big_blind_index),
            ..self.clone()
        })
    }

    /// Applies an action for the seat to act.
    ///
    /// Validates the action against the betting rules, moves the turn to the
    /// next seat, and advances the phase when the betting round is complete.
    /// Illegal actions fail without changing anything; the engine never
    /// clamps or corrects them.
    pub fn process_action(&self, action: PlayerAction) -> Result<GameState> {
        let seat = self.current_player_index;
        let player = &self.players[seat];

        if !player.is_active() {
            return Err(Error::InactivePlayer { seat });
        }

        let mut players = self.players.clone();
        let mut pot = self.pot;
        let mut current_bet = self.current_bet;
        let mut last_raiser_index = self.last_raiser_index;

        match action {
            PlayerAction::Fold => {
                players[seat].status = PlayerStatus::Folded;
            }
            PlayerAction::Check => {
                if player.bet < self.current_bet {
                    return Err(Error::IllegalCheck {
                        owed: self.current_bet - player.bet,
                    });
                }
            }
            PlayerAction::Call => {
                let call_amount = self.current_bet - player.bet;
                players[seat].bet = self.current_bet;
                players[seat].chips -= call_amount;
                pot += call_amount;
            }
            PlayerAction::Raise(amount) => {
                if amount <= self.current_bet {
                    return Err(Error::IllegalRaise {
                        amount,
                        current_bet: self.current_bet,
                    });
                }

                // The amount is the seat's new total bet for the round.
                let raise_amount = amount - player.bet;
                players[seat].bet = amount;
                players[seat].chips -= raise_amount;
                pot += raise_amount;
                current_bet = amount;
                last_raiser_index = Some(seat);
            }
            PlayerAction::AllIn => {
                let stack = player.chips;
                players[seat].bet += stack;
                players[seat].chips = Chips::ZERO;
                players[seat].status = PlayerStatus::AllIn;
                pot += stack;

                // An all-in below the table bet is a call, not a raise.
                if player.bet + stack > self.current_bet {
                    current_bet = player.bet + stack;
                    last_raiser_index = Some(seat);
                }
            }
        }

        debug!("seat {seat} {action}, pot {pot}");

        // The turn always moves one seat; folded seats are skipped by the
        // completion check below, not here.
        let next_player_index = (seat + 1) % self.players.len();

        let state = GameState {
            players,
            pot,
            current_bet,
            current_player_index: next_player_index,
            last_raiser_index,
            ..self.clone()
        };

        if state.round_complete(next_player_index) {
            state.advance_phase()
        } else {
            Ok(state)
        }
    }

    /// Whether the betting round ends before the next seat acts.
    ///
    /// The round is over when at most one seat can still act, or when every
    /// active bet matches the table bet and action has come full circle back
    /// to whoever set the current level (the first seat after the dealer when
    /// nobody raised).
    fn round_complete(&self, next_player_index: usize) -> bool {
        if self.count_active() <= 1 {
            return true;
        }

        let all_bets_equal = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .all(|p| p.bet == self.current_bet);

        let round_closer = match self.last_raiser_index {
            Some(raiser) => raiser,
            None => (self.dealer_index + 1) % self.players.len(),
        };

        all_bets_equal && next_player_index == round_closer
    }

    /// Moves to the next phase, dealing community cards and opening a fresh
    /// betting round at the first seat after the dealer.
    fn advance_phase(&self) -> Result<GameState> {
        let (phase, cards_to_deal) = match self.phase {
            Phase::PreFlop => (Phase::Flop, 3),
            Phase::Flop => (Phase::Turn, 1),
            Phase::Turn => (Phase::River, 1),
            Phase::River => (Phase::Showdown, 0),
            Phase::Waiting | Phase::Showdown => return Ok(self.clone()),
        };

        let (cards, deck) = self.deck.deal(cards_to_deal)?;
        let mut community_cards = self.community_cards.clone();
        community_cards.extend(cards);

        let mut players = self.players.clone();
        for player in &mut players {
            player.bet = Chips::ZERO;
        }

        debug!("advancing to {phase}, board has {} cards", community_cards.len());

        Ok(GameState {
            phase,
            community_cards,
            deck,
            players,
            current_bet: Chips::ZERO,
            current_player_index: (self.dealer_index + 1) % self.players.len(),
            last_raiser_index: None,
            ..self.clone()
        })
    }
}
