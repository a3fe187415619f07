use std::{io, path::PathBuf};

use cubelet_core::PieceKind;

/// Errors raised while building a goal catalog or querying it by name.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GoalError {
    /// A goal directory or file could not be read.
    #[display("failed to read {}", path.display())]
    Io {
        /// The directory or file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A goal file is not valid goal JSON.
    #[display("invalid goal JSON in {origin}")]
    Json {
        /// Where the JSON came from (a file path, or `<string>`).
        origin: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },
    /// A requirement names a piece, slot or orientation outside its piece class.
    #[display(
        "goal {goal:?}: {kind} requirement #{index} (id {id}, pos {pos}, ori {ori}) is out of range"
    )]
    InvalidRequirement {
        /// Goal name.
        goal: String,
        /// Piece class of the requirement.
        kind: PieceKind,
        /// Position of the requirement in its list.
        index: usize,
        /// Required piece identity.
        id: u8,
        /// Required slot.
        pos: u8,
        /// Required orientation.
        ori: u8,
    },
    /// A goal lists the same piece twice.
    #[display("goal {goal:?} requires {kind} {id} more than once")]
    DuplicatePiece {
        /// Goal name.
        goal: String,
        /// Piece class.
        kind: PieceKind,
        /// Repeated piece identity.
        id: u8,
    },
    /// Two goals share a name.
    #[display("duplicate goal name {name:?}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
    /// No goal with this name is loaded.
    #[display("unknown goal {name:?}")]
    UnknownGoal {
        /// The requested name.
        name: String,
    },
}
