// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker betting state machine and showdown resolver.
//!
//! The engine is a library with no I/O of its own: the caller owns a single
//! [GameState] value and threads it through the operations, each of which
//! returns a new state or result without touching the input. Turn order is
//! strictly sequential so there is no internal concurrency, and the only
//! randomness is the shuffle's injected [rand::Rng].
//!
//! A hand runs through [GameState::start_new_hand], a sequence of
//! [GameState::process_action] calls until the phase reaches
//! [Phase::Showdown], then [evaluate_showdown] and [distribute_pot].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod actions;
mod chips;
mod player;
mod showdown;
mod state;

pub use chips::Chips;
pub use player::{Player, PlayerStatus};
pub use showdown::{
    PlayerHandResult, ShowdownResult, best_hand, distribute_pot, evaluate_showdown,
};
pub use state::{BIG_BLIND, GameState, Phase, PlayerAction, SEATS, SMALL_BLIND, STARTING_CHIPS};

use holdem_cards::DeckError;
use holdem_eval::EvalError;

/// Errors from engine operations.
///
/// All variants are contract violations by the caller, none are retried or
/// recovered from inside the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dealing more cards than remain in the deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Evaluating a malformed hand.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// An action was submitted for a seat that cannot act.
    #[error("player at seat {seat} is not active")]
    InactivePlayer {
        /// The acting seat.
        seat: usize,
    },
    /// A check while owing chips to the table.
    #[error("cannot check while owing {owed} to call")]
    IllegalCheck {
        /// Chips owed to match the table bet.
        owed: Chips,
    },
    /// A raise that does not exceed the table bet.
    #[error("raise to {amount} must exceed the current bet of {current_bet}")]
    IllegalRaise {
        /// The rejected raise-to amount.
        amount: Chips,
        /// The table bet to beat.
        current_bet: Chips,
    },
}

/// Engine result type.
pub type Result<T> = std::result::Result<T, Error>;
