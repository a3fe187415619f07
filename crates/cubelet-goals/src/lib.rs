//! Goal scoring for 3×3 twisty-puzzle states.
//!
//! A [`Goal`] names a partial target configuration: a set of edges and corners,
//! each with a target slot and orientation. [`Goal::score`] measures how close a
//! [`CubeState`](cubelet_core::CubeState) is to it, in `[0, 1]`, which external
//! training loops use for reward shaping.
//!
//! Goals live in a [`GoalCatalog`], built from the [`builtin`] goals, from a
//! directory of JSON goal files, or both. Once built, a catalog is only read.
//!
//! # Examples
//!
//! ```
//! use cubelet_core::Cube;
//! use cubelet_goals::GoalCatalog;
//!
//! let catalog = GoalCatalog::builtin();
//!
//! let mut cube = Cube::new();
//! cube.apply_move("F")?;
//! // F moves UF out of the cross.
//! assert_eq!(catalog.score(&cube.state(), "White Cross")?, 0.75);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builtin;
mod catalog;
mod error;
mod goal;

pub use self::{
    catalog::GoalCatalog,
    error::GoalError,
    goal::{Goal, PieceRequirement},
};
