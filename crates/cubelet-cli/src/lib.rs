//! Command-line front end for the cubelet crates.
//!
//! The `cubelet` binary parses [`Cli`] with clap and hands it to [`run`],
//! which writes its report to any [`std::io::Write`].
//!
//! # Commands
//!
//! - `apply <ALG>`: apply an algorithm to a solved cube and print the state
//!   vectors, progress detectors and move history.
//! - `moves`: list the 27 canonical moves.
//! - `scramble [--length N] [--seed HEX] [--reject-cross]`: generate a
//!   reproducible scramble.
//! - `score <GOAL> <ALG> [--goals-dir DIR]`: score a state against a goal.
//! - `goals [--goals-dir DIR]`: list goals.
//! - `stats [--length N] [--samples K]`: sample scrambles in parallel and print
//!   detector histograms.

mod args;
mod commands;
pub mod stats;

pub use self::{
    args::{Cli, Command, GoalArgs, ScrambleArgs},
    commands::{CliError, run},
};
