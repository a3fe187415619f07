//! Piece positions and orientations.
//!
//! [`CubeState`] is the permutation/orientation vector pair for corners and for
//! edges. It is a small `Copy` value: branching consumers (search, rollouts)
//! take snapshots by value instead of sharing and undoing a mutable state.
//!
//! A slot `i` is solved iff `pos[i] == i` and `ori[i] == 0`; the whole state is
//! solved iff every slot of both piece classes is.
//!
//! # Examples
//!
//! ```
//! use cubelet_core::CubeState;
//!
//! let mut state = CubeState::SOLVED;
//! let snapshot = state;
//!
//! state.apply("F".parse()?);
//! assert_ne!(state, snapshot);
//! assert!(snapshot.is_solved());
//! assert_eq!(state.edge_ori()[1], 1); // F flips the edge it brings to UF
//! # Ok::<(), cubelet_core::MoveError>(())
//! ```

use crate::{Generator, GeneratorTable, Move, PieceKind, StateError};

/// Parity of a permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Even number of transpositions.
    Even,
    /// Odd number of transpositions.
    Odd,
}

/// Positions and orientations of the pieces of one class.
///
/// `N` is the number of slots and `M` the orientation modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Orbit<const N: usize, const M: u8> {
    pos: [u8; N],
    ori: [u8; N],
}

type Corners = Orbit<8, 3>;
type Edges = Orbit<12, 2>;

impl<const N: usize, const M: u8> Orbit<N, M> {
    #[expect(clippy::cast_possible_truncation)]
    const SOLVED: Self = {
        let mut pos = [0; N];
        let mut i = 0;
        while i < N {
            pos[i] = i as u8;
            i += 1;
        }
        Self { pos, ori: [0; N] }
    };

    /// Gather update shared by corners and edges.
    ///
    /// Reads only from `self` and writes only to the returned value, so a
    /// permutation can never observe its own partial result.
    #[inline]
    fn permuted(&self, perm: &[u8; N], delta: &[u8; N]) -> Self {
        let mut next = Self {
            pos: [0; N],
            ori: [0; N],
        };
        for (slot, (&src, &delta)) in perm.iter().zip(delta).enumerate() {
            let src = usize::from(src);
            next.pos[slot] = self.pos[src];
            next.ori[slot] = (self.ori[src] + delta) % M;
        }
        next
    }

    #[inline]
    fn is_home(&self, slot: usize) -> bool {
        usize::from(self.pos[slot]) == slot && self.ori[slot] == 0
    }

    #[inline]
    fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    fn parity(&self) -> Parity {
        let mut visited = [false; N];
        let mut even_cycles = 0_usize;
        for start in 0..N {
            if visited[start] {
                continue;
            }
            let mut len = 0_usize;
            let mut slot = start;
            while !visited[slot] {
                visited[slot] = true;
                slot = usize::from(self.pos[slot]);
                len += 1;
            }
            if len % 2 == 0 {
                even_cycles += 1;
            }
        }
        if even_cycles % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    fn orientation_sum(&self) -> u32 {
        self.ori.iter().copied().map(u32::from).sum()
    }

    fn validated(kind: PieceKind, pos: [u8; N], ori: [u8; N]) -> Result<Self, StateError> {
        let mut seen = [false; N];
        for &piece in &pos {
            match seen.get_mut(usize::from(piece)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(StateError::NotAPermutation { kind }),
            }
        }
        if let Some((slot, &value)) = ori.iter().enumerate().find(|&(_, &o)| o >= M) {
            return Err(StateError::OrientationOutOfRange { kind, slot, value });
        }
        Ok(Self { pos, ori })
    }
}

/// Positions and orientations of all 20 movable pieces.
///
/// Every state reachable from [`CubeState::SOLVED`] by moves satisfies:
///
/// - both position vectors are permutations,
/// - corner orientations sum to a multiple of 3,
/// - an even number of edges is flipped,
/// - corner and edge permutations have equal parity, as long as no whole-cube
///   rotation has been applied an odd number of quarter turns (a quarter
///   rotation also permutes the unmodelled centres, so it flips one of the two
///   parities relative to the other).
///
/// Equality compares the vectors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "CubeStateParts", try_from = "CubeStateParts")]
pub struct CubeState {
    corners: Corners,
    edges: Edges,
}

/// The raw vectors of a [`CubeState`], as exchanged with external callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CubeStateParts {
    /// Piece identity occupying each corner slot.
    pub corner_pos: [u8; 8],
    /// Twist (0-2) of each corner slot's occupant.
    pub corner_ori: [u8; 8],
    /// Piece identity occupying each edge slot.
    pub edge_pos: [u8; 12],
    /// Flip (0-1) of each edge slot's occupant.
    pub edge_ori: [u8; 12],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl CubeState {
    /// The solved (identity) state.
    pub const SOLVED: Self = Self {
        corners: Corners::SOLVED,
        edges: Edges::SOLVED,
    };

    /// Builds a state from raw vectors, checking the move-reachability invariants.
    ///
    /// Permutation parity is not checked, since whole-cube rotations legitimately
    /// produce states whose corner and edge parities differ.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if a position vector is not a permutation, an
    /// orientation is out of range, the corner twists do not sum to a multiple
    /// of 3, or an odd number of edges is flipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubelet_core::{CubeState, StateError};
    ///
    /// let mut parts = CubeState::SOLVED.to_parts();
    /// parts.corner_ori[0] = 1;
    /// assert_eq!(
    ///     CubeState::from_parts(parts),
    ///     Err(StateError::CornerTwistSum { sum: 1 })
    /// );
    /// ```
    pub fn from_parts(parts: CubeStateParts) -> Result<Self, StateError> {
        let corners = Corners::validated(PieceKind::Corner, parts.corner_pos, parts.corner_ori)?;
        let edges = Edges::validated(PieceKind::Edge, parts.edge_pos, parts.edge_ori)?;

        let sum = corners.orientation_sum();
        if sum % 3 != 0 {
            return Err(StateError::CornerTwistSum { sum });
        }
        let count = edges.orientation_sum();
        if count % 2 != 0 {
            return Err(StateError::OddEdgeFlips { count });
        }
        Ok(Self { corners, edges })
    }

    /// Returns independent copies of the raw vectors.
    #[must_use]
    pub fn to_parts(&self) -> CubeStateParts {
        CubeStateParts {
            corner_pos: self.corners.pos,
            corner_ori: self.corners.ori,
            edge_pos: self.edges.pos,
            edge_ori: self.edges.ori,
        }
    }

    /// Piece identity occupying each corner slot.
    #[must_use]
    pub fn corner_pos(&self) -> &[u8; 8] {
        &self.corners.pos
    }

    /// Twist (0-2) of each corner slot's occupant.
    #[must_use]
    pub fn corner_ori(&self) -> &[u8; 8] {
        &self.corners.ori
    }

    /// Piece identity occupying each edge slot.
    #[must_use]
    pub fn edge_pos(&self) -> &[u8; 12] {
        &self.edges.pos
    }

    /// Flip (0-1) of each edge slot's occupant.
    #[must_use]
    pub fn edge_ori(&self) -> &[u8; 12] {
        &self.edges.ori
    }

    /// Returns `true` iff every piece is in its home slot with orientation 0.
    #[must_use]
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.corners.is_solved() && self.edges.is_solved()
    }

    /// Returns `true` if corner slot `slot` holds its own piece, untwisted.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 8`.
    #[must_use]
    #[inline]
    pub fn is_corner_home(&self, slot: usize) -> bool {
        self.corners.is_home(slot)
    }

    /// Returns `true` if edge slot `slot` holds its own piece, unflipped.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= 12`.
    #[must_use]
    #[inline]
    pub fn is_edge_home(&self, slot: usize) -> bool {
        self.edges.is_home(slot)
    }

    /// Parity of the corner permutation.
    #[must_use]
    pub fn corner_parity(&self) -> Parity {
        self.corners.parity()
    }

    /// Parity of the edge permutation.
    #[must_use]
    pub fn edge_parity(&self) -> Parity {
        self.edges.parity()
    }

    /// Applies one generator quarter turn.
    #[inline]
    pub fn apply_generator(&mut self, generator: Generator) {
        let GeneratorTable {
            corner_perm,
            corner_twist,
            edge_perm,
            edge_flip,
        } = generator.table();
        self.corners = self.corners.permuted(corner_perm, corner_twist);
        self.edges = self.edges.permuted(edge_perm, edge_flip);
    }

    /// Applies a named move by repeating its generator.
    #[inline]
    pub fn apply(&mut self, mv: Move) {
        for _ in 0..mv.repetitions() {
            self.apply_generator(mv.generator());
        }
    }

    /// Returns a copy of this state with `mv` applied.
    #[must_use]
    pub fn with_move(mut self, mv: Move) -> Self {
        self.apply(mv);
        self
    }
}

impl From<CubeState> for CubeStateParts {
    fn from(state: CubeState) -> Self {
        state.to_parts()
    }
}

impl TryFrom<CubeStateParts> for CubeState {
    type Error = StateError;

    fn try_from(parts: CubeStateParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}
