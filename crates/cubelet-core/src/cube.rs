//! The stateful puzzle handle.
//!
//! [`Cube`] couples a [`CubeState`] with the append-only log of accepted moves.
//! It is the interface external collaborators drive: apply a named move, ask
//! whether it is solved, read progress counters, take a copy, replay history.

use crate::{CubeState, Move, MoveError, NotationError, notation};

/// A puzzle state plus the moves that produced it.
///
/// # Examples
///
/// ```
/// use cubelet_core::Cube;
///
/// let mut cube = Cube::new();
/// cube.apply_move("R")?;
/// cube.apply_move("U2")?;
/// assert!(!cube.is_solved());
/// assert_eq!(cube.history().len(), 2);
///
/// let mut branch = cube.copy();
/// branch.apply_move("U2")?;
/// branch.apply_move("R'")?;
/// assert!(branch.is_solved());
/// assert!(!cube.is_solved());
///
/// assert!(cube.apply_move("Q").is_err());
/// assert_eq!(cube.history().len(), 2);
/// # Ok::<(), cubelet_core::MoveError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cube {
    state: CubeState,
    history: Vec<Move>,
}

impl Cube {
    /// Creates a solved cube with empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cube in `state` with empty history.
    #[must_use]
    pub fn from_state(state: CubeState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> CubeState {
        self.state
    }

    /// Returns the moves applied since creation or the last [`Cube::reset`].
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Parses and applies a canonical move name.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownMove`] if `name` is not one of the 27
    /// canonical names. The cube and its history are left unchanged.
    pub fn apply_move(&mut self, name: &str) -> Result<(), MoveError> {
        let mv = name.parse()?;
        self.apply(mv);
        Ok(())
    }

    /// Applies a move and records it in the history.
    pub fn apply(&mut self, mv: Move) {
        self.history.push(mv);
        self.state.apply(mv);
    }

    /// Applies every move of `moves` in order.
    pub fn apply_all<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Move>,
    {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Parses algorithm text and applies it.
    ///
    /// The whole text is parsed before anything is applied.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError`] if the text contains an unknown token; the
    /// cube is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubelet_core::Cube;
    ///
    /// let mut cube = Cube::new();
    /// cube.apply_algorithm("(R U R' U') // trigger")?;
    /// assert_eq!(cube.history().len(), 4);
    /// assert!(cube.apply_algorithm("R R R ?").is_err());
    /// assert_eq!(cube.history().len(), 4);
    /// # Ok::<(), cubelet_core::NotationError>(())
    /// ```
    pub fn apply_algorithm(&mut self, text: &str) -> Result<(), NotationError> {
        let moves = notation::parse_algorithm(text)?;
        self.apply_all(moves);
        Ok(())
    }

    /// Returns to the solved state and clears the history.
    pub fn reset(&mut self) {
        self.state = CubeState::SOLVED;
        self.history.clear();
    }

    /// Returns an independent copy, history included.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// See [`CubeState::is_solved`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// See [`CubeState::cross_count`].
    #[must_use]
    pub fn cross_count(&self) -> usize {
        self.state.cross_count()
    }

    /// See [`CubeState::f2l_slots_solved`].
    #[must_use]
    pub fn f2l_slots_solved(&self) -> usize {
        self.state.f2l_slots_solved()
    }

    /// See [`CubeState::eo_solved`].
    #[must_use]
    pub fn eo_solved(&self) -> bool {
        self.state.eo_solved()
    }
}

impl From<CubeState> for Cube {
    fn from(state: CubeState) -> Self {
        Self::from_state(state)
    }
}
