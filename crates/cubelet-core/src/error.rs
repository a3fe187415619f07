use crate::PieceKind;

/// Error returned when a move name does not match the `<BASE><MODIFIER>?` grammar.
///
/// This is the only failure mode of move application. Valid bases are
/// `U D L R F B x y z`; valid modifiers are `""`, `"'"` and `"2"`.
///
/// # Examples
///
/// ```
/// use cubelet_core::{Move, MoveError};
///
/// let err = "Q".parse::<Move>().unwrap_err();
/// assert_eq!(err, MoveError::UnknownMove { name: "Q".to_owned() });
/// assert_eq!(err.to_string(), "unknown move: \"Q\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The move name has an unknown base letter or modifier.
    #[display("unknown move: {name:?}")]
    UnknownMove {
        /// The rejected move name.
        name: String,
    },
}

/// Error returned when raw vectors do not describe a reachable puzzle state.
///
/// States built through move application never produce this error; it guards
/// [`CubeState::from_parts`](crate::CubeState::from_parts) and deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// A position vector is not a permutation of its slot indices.
    #[display("{kind} positions are not a permutation")]
    NotAPermutation {
        /// The offending piece class.
        kind: PieceKind,
    },
    /// An orientation value is outside `0..3` (corners) or `0..2` (edges).
    #[display("{kind} orientation {value} at slot {slot} is out of range")]
    OrientationOutOfRange {
        /// The offending piece class.
        kind: PieceKind,
        /// Slot index holding the bad value.
        slot: usize,
        /// The out-of-range value.
        value: u8,
    },
    /// The corner twists do not sum to a multiple of 3.
    #[display("corner twists sum to {sum}, which is not a multiple of 3")]
    CornerTwistSum {
        /// Sum of all corner orientations.
        sum: u32,
    },
    /// An odd number of edges is flipped.
    #[display("{count} edges are flipped, expected an even count")]
    OddEdgeFlips {
        /// Number of edges with orientation 1.
        count: u32,
    },
}
