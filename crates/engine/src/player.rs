// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use serde::{Deserialize, Serialize};

use holdem_cards::Card;

use crate::Chips;

/// A player's standing in the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// In the hand and able to act.
    Active,
    /// Out of the current hand.
    Folded,
    /// Committed the whole stack, in the hand but done acting.
    AllIn,
    /// Eliminated from the game.
    Out,
}

/// A seat at the table.
///
/// Players exist only inside a [GameState](crate::GameState); seat order is
/// the turn order and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable player identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The remaining stack.
    pub chips: Chips,
    /// Hole cards, empty between hands.
    pub hand: Vec<Card>,
    /// Chips committed in the current betting round.
    pub bet: Chips,
    /// Standing in the current hand.
    pub status: PlayerStatus,
    /// A human seat, everything else is driven by a bot policy.
    pub is_human: bool,
}

impl Player {
    /// Creates a player with a starting stack.
    pub fn new(id: impl Into<String>, name: impl Into<String>, chips: Chips, is_human: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chips,
            hand: Vec::new(),
            bet: Chips::ZERO,
            status: PlayerStatus::Active,
            is_human,
        }
    }

    /// Whether this seat can still act in the betting round.
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Whether this seat still contests the pot at showdown.
    pub fn in_hand(&self) -> bool {
        self.status != PlayerStatus::Folded
    }
}
