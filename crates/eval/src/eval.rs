// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand ranking.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::Card;

/// Errors from evaluating a hand.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The hand does not hold exactly 5 cards.
    #[error("hand must contain exactly 5 cards, got {got}")]
    InvalidHandSize {
        /// Number of cards in the rejected hand.
        got: usize,
    },
}

/// The ten Poker hand categories from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No made hand, play the highest cards.
    HighCard = 1,
    /// One pair.
    Pair,
    /// Two distinct pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// A triple and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// The ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The ordinal strength of this category, 1 to 10.
    pub fn strength(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of an evaluated 5-cards hand.
///
/// Values order by category first and then by the category's tiebreakers in
/// rank significance order, so the derived `Ord` is the hand comparison: two
/// hands with the same category and tiebreakers are a true tie, suits never
/// break ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreakers: Vec<u8>,
}

impl HandValue {
    /// Evaluates a hand of exactly 5 cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if cards.len() != 5 {
            return Err(EvalError::InvalidHandSize { got: cards.len() });
        }

        let mut values = cards.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
        values.sort_unstable();

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());

        // The wheel A-2-3-4-5 plays as a five high straight.
        let wheel = values == [2, 3, 4, 5, 14];
        let straight = wheel || values.windows(2).all(|w| w[1] == w[0] + 1);
        let straight_high = if wheel { 5 } else { values[4] };

        // Ranks grouped by multiplicity, each group in descending rank order.
        let mut counts = [0u8; 15];
        for v in &values {
            counts[*v as usize] += 1;
        }

        let mut quads = Vec::new();
        let mut trips = Vec::new();
        let mut pairs = Vec::new();
        let mut singles = Vec::new();
        for v in (2..=14u8).rev() {
            match counts[v as usize] {
                4 => quads.push(v),
                3 => trips.push(v),
                2 => pairs.push(v),
                1 => singles.push(v),
                _ => {}
            }
        }

        let mut descending = values.clone();
        descending.reverse();

        let (rank, tiebreakers) = if flush && straight && straight_high == 14 {
            (HandRank::RoyalFlush, Vec::new())
        } else if flush && straight {
            (HandRank::StraightFlush, vec![straight_high])
        } else if let Some(&quad) = quads.first() {
            (HandRank::FourOfAKind, vec![quad, singles[0]])
        } else if let (Some(&trip), Some(&pair)) = (trips.first(), pairs.first()) {
            (HandRank::FullHouse, vec![trip, pair])
        } else if flush {
            (HandRank::Flush, descending)
        } else if straight {
            (HandRank::Straight, vec![straight_high])
        } else if let Some(&trip) = trips.first() {
            let mut tb = vec![trip];
            tb.extend_from_slice(&singles);
            (HandRank::ThreeOfAKind, tb)
        } else if pairs.len() == 2 {
            (HandRank::TwoPair, vec![pairs[0], pairs[1], singles[0]])
        } else if let Some(&pair) = pairs.first() {
            let mut tb = vec![pair];
            tb.extend_from_slice(&singles);
            (HandRank::Pair, tb)
        } else {
            (HandRank::HighCard, descending)
        };

        Ok(HandValue { rank, tiebreakers })
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The category ordinal, 1 to 10.
    pub fn strength(&self) -> u8 {
        self.rank.strength()
    }

    /// The numeric ranks breaking ties within the category.
    pub fn tiebreakers(&self) -> &[u8] {
        &self.tiebreakers
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}
