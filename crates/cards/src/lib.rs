// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type holding the standard 52 cards. A deck is a value:
//! shuffling and dealing never mutate the deck they are called on, they
//! return a new one:
//!
//! ```
//! # use holdem_cards::Deck;
//! let deck = Deck::new();
//! let shuffled = deck.shuffled(&mut rand::rng());
//! let (holes, rest) = shuffled.deal(2).unwrap();
//! assert_eq!(holes.len(), 2);
//! assert_eq!(rest.count(), Deck::SIZE - 2);
//! assert_eq!(shuffled.count(), Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, DeckError, Rank, Suit};
