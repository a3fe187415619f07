use std::io::{self, Write};

use cubelet_core::{Algorithm, Cube, CubeState, Move, NotationError};
use cubelet_goals::{GoalCatalog, GoalError};
use cubelet_scrambler::Scrambler;

use crate::{Cli, Command, GoalArgs, ScrambleArgs, stats::DetectorHistogram};

/// Errors reported by `cubelet` commands.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The algorithm argument could not be parsed.
    #[display("{_0}")]
    Notation(#[from] NotationError),
    /// Goal loading or lookup failed.
    #[display("{_0}")]
    Goal(#[from] GoalError),
    /// Writing the output failed.
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
}

/// Runs `cli`, writing human-readable output to `out`.
///
/// # Errors
///
/// Returns [`CliError`] if an argument is invalid, goals cannot be loaded, or
/// `out` fails.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Command::Apply { algorithm } => apply(&algorithm, out),
        Command::Moves => moves(out),
        Command::Scramble { scramble, seed } => {
            let scrambler = scrambler(scramble);
            let scramble = match seed {
                Some(seed) => scrambler.generate_with_seed(seed),
                None => scrambler.generate(),
            };
            writeln!(out, "Scramble: {}", scramble.moves)?;
            writeln!(out, "Seed: {}", scramble.seed)?;
            Ok(())
        }
        Command::Score {
            goal,
            algorithm,
            goals,
        } => score(&goal, &algorithm, &goals, out),
        Command::Goals { goals } => list_goals(&goals, out),
        Command::Stats { scramble, samples } => {
            log::info!(
                "sampling {samples} scrambles of length {} in parallel",
                scramble.length
            );
            let histogram = DetectorHistogram::sample(&scrambler(scramble), samples);
            writeln!(out, "{histogram}")?;
            Ok(())
        }
    }
}

fn scrambler(args: ScrambleArgs) -> Scrambler {
    let scrambler = Scrambler::new(args.length);
    if args.reject_cross {
        scrambler.rejecting_complete_cross()
    } else {
        scrambler
    }
}

fn catalog(args: &GoalArgs) -> Result<GoalCatalog, GoalError> {
    let mut catalog = GoalCatalog::builtin();
    if let Some(dir) = &args.goals_dir {
        catalog.extend_from_dir(dir)?;
    }
    Ok(catalog)
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_state(out: &mut impl Write, state: &CubeState) -> io::Result<()> {
    writeln!(out, "corner_pos: {}", join(state.corner_pos()))?;
    writeln!(out, "corner_ori: {}", join(state.corner_ori()))?;
    writeln!(out, "edge_pos:   {}", join(state.edge_pos()))?;
    writeln!(out, "edge_ori:   {}", join(state.edge_ori()))?;
    writeln!(out, "is_solved:        {}", state.is_solved())?;
    writeln!(out, "cross_count:      {}", state.cross_count())?;
    writeln!(out, "f2l_slots_solved: {}", state.f2l_slots_solved())?;
    writeln!(out, "eo_solved:        {}", state.eo_solved())?;
    writeln!(
        out,
        "parity:           corners {:?}, edges {:?}",
        state.corner_parity(),
        state.edge_parity()
    )
}

fn apply(algorithm: &str, out: &mut impl Write) -> Result<(), CliError> {
    let mut cube = Cube::new();
    cube.apply_algorithm(algorithm)?;
    write_state(out, &cube.state())?;
    let history: Algorithm = cube.history().iter().copied().collect();
    writeln!(out, "history ({}): {history}", history.len())?;
    Ok(())
}

fn moves(out: &mut impl Write) -> Result<(), CliError> {
    for mv in Move::ALL {
        let kind = if mv.is_rotation() { "rotation" } else { "face turn" };
        writeln!(out, "{:>2}  {:<3} {kind}", mv.index(), mv.to_string())?;
    }
    Ok(())
}

fn score(
    goal: &str,
    algorithm: &str,
    args: &GoalArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let catalog = catalog(args)?;
    let Some(goal) = catalog.resolve(goal) else {
        return Err(GoalError::UnknownGoal {
            name: goal.to_owned(),
        }
        .into());
    };
    let mut cube = Cube::new();
    cube.apply_algorithm(algorithm)?;
    writeln!(out, "{}: {:.3}", goal.name, goal.score(&cube.state()))?;
    Ok(())
}

fn list_goals(args: &GoalArgs, out: &mut impl Write) -> Result<(), CliError> {
    let catalog = catalog(args)?;
    for goal in &catalog {
        writeln!(
            out,
            "{} ({} edges, {} corners)",
            goal.name,
            goal.required_edges.len(),
            goal.required_corners.len()
        )?;
        if let Some(visual) = goal.visual_text() {
            for line in visual.lines() {
                writeln!(out, "    {line}")?;
            }
        }
    }
    Ok(())
}
