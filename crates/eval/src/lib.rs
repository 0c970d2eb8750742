// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hand evaluator.
//!
//! Ranks a 5-card hand into one of the ten Poker categories with the ordered
//! tiebreakers needed to compare hands within the same category. Hands compare
//! through [HandValue]'s `Ord`:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! # use holdem_eval::HandValue;
//! let quads = [
//!     Card::new(Rank::Nine, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Diamonds),
//!     Card::new(Rank::Nine, Suit::Clubs),
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//! let pair = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Ace, Suit::Diamonds),
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Spades),
//!     Card::new(Rank::Deuce, Suit::Hearts),
//! ];
//! let v1 = HandValue::eval(&quads).unwrap();
//! let v2 = HandValue::eval(&pair).unwrap();
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
pub use eval::{EvalError, HandRank, HandValue};
