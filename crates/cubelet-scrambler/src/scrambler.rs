use std::fmt;

use cubelet_core::{Algorithm, Cube, CubeState, Generator, Move};
use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::ScrambleSeed;

type Rejection = Box<dyn Fn(&CubeState) -> bool + Send + Sync>;

/// A generated scramble together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// The scramble moves, all face turns.
    pub moves: Algorithm,
    /// Seed passed to [`Scrambler::generate_with_seed`] to get this scramble back.
    pub seed: ScrambleSeed,
}

impl Scramble {
    /// Applies the scramble to `cube`, recording every move in its history.
    pub fn apply_to(&self, cube: &mut Cube) {
        cube.apply_all(self.moves.iter().copied());
    }

    /// Returns a solved cube with the scramble applied.
    #[must_use]
    pub fn to_cube(&self) -> Cube {
        let mut cube = Cube::new();
        self.apply_to(&mut cube);
        cube
    }

    /// Returns the state the scramble leads to from solved.
    #[must_use]
    pub fn state(&self) -> CubeState {
        state_after(&self.moves)
    }
}

/// Generates random face-turn scrambles.
///
/// Moves are drawn uniformly from the 18 face turns, except that a move never
/// turns the same face as the move before it. Whole-cube rotations are never
/// used.
///
/// An optional rejection predicate re-draws scrambles that leave the cube too
/// close to solved. It is not consulted for zero-length scrambles, and gives up
/// after [`Scrambler::max_attempts`] draws, returning the last one.
///
/// # Examples
///
/// ```
/// use cubelet_scrambler::{ScrambleSeed, Scrambler};
///
/// let scrambler = Scrambler::new(20).rejecting_complete_cross();
/// let scramble = scrambler.generate();
/// assert_eq!(scramble.moves.len(), 20);
/// assert!(scramble.to_cube().cross_count() < 4);
///
/// let again = scrambler.generate_with_seed(scramble.seed);
/// assert_eq!(again, scramble);
/// ```
pub struct Scrambler {
    length: usize,
    max_attempts: usize,
    rejection: Option<Rejection>,
}

impl fmt::Debug for Scrambler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrambler")
            .field("length", &self.length)
            .field("max_attempts", &self.max_attempts)
            .field("rejection", &self.rejection.is_some())
            .finish()
    }
}

impl Scrambler {
    /// Default number of draws before a rejection predicate is ignored.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

    /// Creates a scrambler producing `length` moves, with no rejection.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            rejection: None,
        }
    }

    /// Number of moves per scramble.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Maximum number of draws per scramble when a rejection predicate is set.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Re-draws scrambles for which `reject` returns `true`.
    #[must_use]
    pub fn with_rejection<F>(mut self, reject: F) -> Self
    where
        F: Fn(&CubeState) -> bool + Send + Sync + 'static,
    {
        self.rejection = Some(Box::new(reject));
        self
    }

    /// Re-draws scrambles that leave the cross complete.
    #[must_use]
    pub fn rejecting_complete_cross(self) -> Self {
        self.with_rejection(|state| state.cross_count() == 4)
    }

    /// Sets the draw limit; values below 1 are treated as 1.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Generates a scramble from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> Scramble {
        self.generate_with_seed(ScrambleSeed::random())
    }

    /// Generates the scramble determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: ScrambleSeed) -> Scramble {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut moves = self.draw(&mut rng);

        if let Some(reject) = self.rejection.as_ref().filter(|_| self.length > 0) {
            let mut attempt = 1;
            while reject(&state_after(&moves)) {
                if attempt >= self.max_attempts {
                    log::warn!(
                        "scramble still rejected after {attempt} attempts (seed {seed}); keeping it"
                    );
                    break;
                }
                log::debug!("rejected scramble attempt {attempt}: {moves}");
                moves = self.draw(&mut rng);
                attempt += 1;
            }
        }

        Scramble { moves, seed }
    }

    fn draw(&self, rng: &mut Pcg64) -> Algorithm {
        let mut moves = Algorithm::new();
        let mut last: Option<Generator> = None;
        for _ in 0..self.length {
            let mv = match last {
                None => Move::FACE_TURNS[rng.random_range(0..Move::FACE_TURNS.len())],
                Some(last) => {
                    // Skip the three moves of the previous face.
                    let mut index = rng.random_range(0..Move::FACE_TURNS.len() - 3);
                    let start = last.index() * 3;
                    if index >= start {
                        index += 3;
                    }
                    Move::FACE_TURNS[index]
                }
            };
            last = Some(mv.generator());
            moves.push(mv);
        }
        moves
    }
}

fn state_after(moves: &Algorithm) -> CubeState {
    moves
        .iter()
        .fold(CubeState::SOLVED, |state, &mv| state.with_move(mv))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SEEDS: [&str; 3] = [
        "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
        "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
        "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    ];

    fn seeds() -> impl Iterator<Item = ScrambleSeed> {
        SEEDS.into_iter().map(|seed| seed.parse().unwrap())
    }

    fn assert_well_formed(scramble: &Scramble, length: usize) {
        assert_eq!(scramble.moves.len(), length);
        assert!(scramble.moves.iter().all(|mv| !mv.is_rotation()));
        for pair in scramble.moves.moves().windows(2) {
            assert_ne!(
                pair[0].generator(),
                pair[1].generator(),
                "{} repeats a face",
                scramble.moves
            );
        }
    }

    #[test]
    fn test_same_seed_same_scramble() {
        let scrambler = Scrambler::new(25);
        for seed in seeds() {
            let a = scrambler.generate_with_seed(seed);
            let b = scrambler.generate_with_seed(seed);
            assert_eq!(a, b);
            assert_eq!(a.seed, seed);
            assert_well_formed(&a, 25);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let scrambler = Scrambler::new(25);
        let scrambles: Vec<_> = seeds()
            .map(|seed| scrambler.generate_with_seed(seed))
            .collect();
        assert_ne!(scrambles[0].moves, scrambles[1].moves);
        assert_ne!(scrambles[1].moves, scrambles[2].moves);
    }

    #[test]
    fn test_zero_length() {
        let scrambler = Scrambler::new(0).with_rejection(|_| true);
        let scramble = scrambler.generate();
        assert!(scramble.moves.is_empty());
        assert!(scramble.to_cube().is_solved());
    }

    #[test]
    fn test_cube_history_equals_scramble() {
        let scramble = Scrambler::new(12).generate();
        let cube = scramble.to_cube();
        assert_eq!(cube.history(), scramble.moves.moves());
        assert_eq!(cube.state(), scramble.state());

        let mut existing = Cube::new();
        existing.apply_move("x").unwrap();
        scramble.apply_to(&mut existing);
        assert_eq!(existing.history().len(), 13);
    }

    #[test]
    fn test_rejection_of_complete_cross() {
        // A single D turn is the only one-move scramble that keeps the cross.
        let scrambler = Scrambler::new(1).rejecting_complete_cross();
        for _ in 0..200 {
            let scramble = scrambler.generate();
            assert_ne!(scramble.moves.moves()[0].generator(), Generator::D);
            assert!(scramble.to_cube().cross_count() < 4);
        }
    }

    #[test]
    fn test_rejection_gives_up_after_max_attempts() {
        let scrambler = Scrambler::new(5).with_rejection(|_| true).with_max_attempts(3);
        assert_eq!(scrambler.max_attempts(), 3);
        let scramble = scrambler.generate();
        assert_well_formed(&scramble, 5);
        assert_eq!(Scrambler::new(5).with_max_attempts(0).max_attempts(), 1);
    }

    #[test]
    fn test_rejection_is_reproducible() {
        let scrambler = Scrambler::new(3).with_rejection(|state| state.cross_count() >= 2);
        for seed in seeds() {
            let a = scrambler.generate_with_seed(seed);
            assert_eq!(scrambler.generate_with_seed(seed), a);
        }
    }

    proptest! {
        #[test]
        fn prop_scrambles_are_well_formed(bytes in any::<[u8; 32]>(), length in 0_usize..40) {
            let seed = ScrambleSeed::from_bytes(bytes);
            let scramble = Scrambler::new(length).generate_with_seed(seed);
            assert_well_formed(&scramble, length);
            let state = scramble.state();
            prop_assert_eq!(state.corner_parity(), state.edge_parity());
        }
    }
}
