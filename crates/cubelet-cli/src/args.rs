use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cubelet_scrambler::ScrambleSeed;

/// Inspect 3x3 puzzle states, goals and scrambles.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// `cubelet` subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply an algorithm to a solved cube and print the result.
    Apply {
        /// Algorithm text, e.g. "R U R' U'" or "(r U R' U') M2".
        algorithm: String,
    },
    /// List the 27 canonical moves with their action index.
    Moves,
    /// Generate a scramble.
    Scramble {
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Seed (64 hex digits) to reproduce a scramble.
        #[arg(long, value_name = "HEX")]
        seed: Option<ScrambleSeed>,
    },
    /// Score the state reached by an algorithm against a goal.
    Score {
        /// Goal name, or a short alias such as "cross" or "f2l_fr".
        goal: String,
        /// Algorithm text applied to a solved cube.
        algorithm: String,
        #[command(flatten)]
        goals: GoalArgs,
    },
    /// List the available goals with their pictures.
    Goals {
        #[command(flatten)]
        goals: GoalArgs,
    },
    /// Sample scrambles in parallel and print progress-detector histograms.
    Stats {
        #[command(flatten)]
        scramble: ScrambleArgs,
        /// Number of scrambles to sample.
        #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
        samples: usize,
    },
}

/// Scramble generation options.
#[derive(Debug, Clone, Copy, Args)]
pub struct ScrambleArgs {
    /// Number of moves per scramble.
    #[arg(short, long, value_name = "MOVES", default_value_t = 20)]
    pub length: usize,
    /// Re-draw scrambles that leave the cross complete.
    #[arg(long)]
    pub reject_cross: bool,
}

/// Goal catalog options.
#[derive(Debug, Clone, Args)]
pub struct GoalArgs {
    /// Directory of JSON goal files to load in addition to the built-in goals.
    #[arg(long, value_name = "DIR")]
    pub goals_dir: Option<PathBuf>,
}
