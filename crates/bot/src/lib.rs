// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker bot policies.
//!
//! A bot implements the [Strategy] trait, mapping a read only view of the
//! game state to one [PlayerAction](holdem_engine::PlayerAction) for the
//! given seat. The shipped [HeuristicStrategy] plays from rough hand
//! strength and pot odds with an occasional bluff; it is intentionally a
//! heuristic, not a game theoretic policy.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod strategy;
pub use strategy::{HeuristicStrategy, Strategy};
