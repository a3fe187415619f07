//! Reproducible scramble generation.
//!
//! A [`Scrambler`] draws random face-turn sequences from a [`ScrambleSeed`];
//! the same seed always gives the same [`Scramble`], so a scramble can be
//! reported and replayed by its seed alone.
//!
//! # Examples
//!
//! ```
//! use cubelet_scrambler::{ScrambleSeed, Scrambler};
//!
//! let seed: ScrambleSeed =
//!     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
//! let scramble = Scrambler::new(10).generate_with_seed(seed);
//!
//! let cube = scramble.to_cube();
//! assert_eq!(cube.history(), scramble.moves.moves());
//! println!("{} (seed {})", scramble.moves, scramble.seed);
//! # Ok::<(), cubelet_scrambler::SeedParseError>(())
//! ```

mod scrambler;
mod seed;

pub use self::{
    scrambler::{Scramble, Scrambler},
    seed::{ScrambleSeed, SeedParseError},
};
