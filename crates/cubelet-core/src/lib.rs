//! Core data structures for a 3×3 twisty puzzle.
//!
//! This crate models the puzzle as a permutation/orientation state over its 8 corner
//! and 12 edge pieces, and provides the primitives every other component builds on:
//! applying named moves, asking whether the puzzle is solved, and reading cheap
//! progress counters.
//!
//! # Overview
//!
//! The crate is organized leaves first:
//!
//! 1. **Pieces** - Canonical slot/piece identities
//!    - [`piece`]: [`Corner`] and [`Edge`] names (`URF`, `UR`, ...) and their indices
//!
//! 2. **Move catalog** - The nine generator moves and the 27 named moves
//!    - [`move_catalog`]: [`Generator`] and its permutation/orientation [`GeneratorTable`]
//!    - [`moves`]: [`Move`] and [`Modifier`], the fixed action index space
//!
//! 3. **State** - The mutable configuration
//!    - [`cube_state`]: [`CubeState`], a `Copy` snapshot of piece positions and orientations
//!    - [`cube`]: [`Cube`], a state plus its append-only move history
//!
//! 4. **Queries** - Read-only progress detectors
//!    - [`progress`]: cross, F2L pair and edge-orientation counters
//!
//! 5. **Notation** - Human-written algorithm text
//!    - [`notation`]: [`Algorithm`] and [`parse_algorithm`], including wide and slice turns
//!
//! # Examples
//!
//! ```
//! use cubelet_core::Cube;
//!
//! let mut cube = Cube::new();
//! assert!(cube.is_solved());
//!
//! cube.apply_move("R")?;
//! cube.apply_move("U")?;
//! assert!(!cube.is_solved());
//! assert_eq!(cube.history().len(), 2);
//!
//! cube.apply_move("U'")?;
//! cube.apply_move("R'")?;
//! assert!(cube.is_solved());
//! # Ok::<(), cubelet_core::MoveError>(())
//! ```

pub mod cube;
pub mod cube_state;
mod error;
pub mod move_catalog;
pub mod moves;
pub mod notation;
pub mod piece;
pub mod progress;

// Re-export commonly used types
pub use self::{
    cube::Cube,
    cube_state::{CubeState, CubeStateParts, Parity},
    error::{MoveError, StateError},
    move_catalog::{Generator, GeneratorTable},
    moves::{Modifier, Move},
    notation::{Algorithm, NotationError, parse_algorithm},
    piece::{Corner, Edge, PieceKind},
};
