// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card rank, deuce to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The numeric value of this rank, 2 for deuce up to 14 for ace.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns all ranks in ascending order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A Poker card.
///
/// A card has no identity beyond its rank and suit, a standard deck holds
/// exactly one of each of the 52 combinations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Errors from dealing cards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Asked to deal more cards than remain in the deck.
    #[error("cannot deal {requested} cards from a deck of {remaining}")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// An ordered sequence of undealt cards.
///
/// A fresh deck holds the full 52 cards; dealing consumes it from the front
/// producing a new remaining deck value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new ordered deck of 52 cards.
    pub fn new() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Returns a uniformly shuffled copy of this deck.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals `n` cards from the front of the deck.
    ///
    /// Returns the dealt cards and the remaining deck, leaving this deck
    /// untouched. Fails if `n` exceeds the cards left in the deck.
    pub fn deal(&self, n: usize) -> Result<(Vec<Card>, Deck), DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        let dealt = self.cards[..n].to_vec();
        let remaining = Self {
            cards: self.cards[n..].to_vec(),
        };

        Ok((dealt, remaining))
    }

    /// The undealt cards in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards left in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
