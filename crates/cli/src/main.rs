// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker bots table simulator.
//!
//! Seats three [HeuristicStrategy] bots at a table and plays hands until
//! the requested count or until a stack cannot post the big blind. Set
//! `RUST_LOG=debug` to trace every action.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};
use rand::prelude::*;

use holdem_bot::{HeuristicStrategy, Strategy};
use holdem_engine::{
    BIG_BLIND, Chips, Error, GameState, Phase, PlayerAction, distribute_pot, evaluate_showdown,
};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 100)]
    hands: u32,
    /// Seed for deterministic deals and bot decisions.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut strategy = match cli.seed {
        Some(seed) => HeuristicStrategy::seeded(seed.wrapping_add(1)),
        None => HeuristicStrategy::new(),
    };

    let mut state = GameState::new(&mut rng);

    for hand in 1..=cli.hands {
        if state.players.iter().any(|p| p.chips < BIG_BLIND) {
            info!("hand {hand}: a stack cannot post the big blind, stopping");
            break;
        }

        state = play_hand(&state, &mut rng, &mut strategy, hand)?;
        state = state.advance_dealer();
    }

    info!("final stacks");
    for player in &state.players {
        info!("  {:8} {:>8}", player.name, player.chips.to_string());
    }

    Ok(())
}

/// Plays one hand to completion and returns the state with the pot paid out.
fn play_hand<R: Rng>(
    state: &GameState,
    rng: &mut R,
    strategy: &mut impl Strategy,
    hand: u32,
) -> Result<GameState> {
    let mut state = state.start_new_hand(rng)?;
    debug!(
        "hand {hand}: dealer is {}",
        state.players[state.dealer_index].name
    );

    while state.phase != Phase::Showdown {
        // Everybody else folded, the last seat takes the pot uncontested.
        if state.count_in_hand() <= 1 {
            if let Some(winner) = state.players.iter().position(|p| p.in_hand()) {
                info!(
                    "hand {hand}: {} takes {} uncontested",
                    state.players[winner].name, state.pot
                );
                state.players[winner].chips += state.pot;
                state.pot = Chips::ZERO;
            }

            return Ok(state);
        }

        let seat = state.current_player_index;
        if !state.players[seat].is_active() {
            if state.count_active() >= 2 {
                // The seat folded or is all in, pass the action along.
                state.current_player_index = (seat + 1) % state.players.len();
                continue;
            }

            // Nobody left with an action and the board cannot be dealt
            // out, split the pot among the seats still in the hand.
            let contenders = state
                .players
                .iter()
                .enumerate()
                .filter(|(_, p)| p.in_hand())
                .map(|(i, _)| i)
                .collect::<Vec<_>>();
            let share = state.pot / contenders.len() as u32;
            warn!(
                "hand {hand}: no actor left on the {}, splitting {} among {} seats",
                state.phase,
                state.pot,
                contenders.len()
            );
            for &i in &contenders {
                state.players[i].chips += share;
            }
            state.pot = Chips::ZERO;

            return Ok(state);
        }

        let action = strategy.execute(&state, seat)?;
        debug!("hand {hand}: {} {action}", state.players[seat].name);

        state = match state.process_action(action) {
            // A raise clamped to a short stack can fall below the bet to
            // match, the seat calls instead.
            Err(Error::IllegalRaise { .. }) => state.process_action(PlayerAction::Call)?,
            other => other?,
        };
    }

    let result = evaluate_showdown(&state)?;
    for shown in &result.all_player_results {
        debug!(
            "hand {hand}: {} shows {}",
            shown.player.name, shown.evaluation
        );
    }
    for winner in &result.winners {
        info!(
            "hand {hand}: {} wins {} with {}",
            winner.player.name, result.pot_per_winner, winner.evaluation
        );
    }

    Ok(distribute_pot(&state, &result))
}
