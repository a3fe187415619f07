//! Progress detectors.
//!
//! Cheap, read-only queries used as partial-progress metrics by search and
//! training loops. Each one inspects a fixed handful of slots and is safe to call
//! after every move.
//!
//! - **Cross**: the four U-layer edges `UR UF UL UB` (slots 0-3).
//! - **F2L pairs**: the middle-layer edge and the D-layer corner beneath it,
//!   `(FR, DFR)`, `(FL, DLF)`, `(BL, DBL)`, `(BR, DRB)`.
//! - **EO**: whether the edges currently in slots 0-3 are unflipped,
//!   regardless of which pieces they are.
//!
//! # Examples
//!
//! ```
//! use cubelet_core::CubeState;
//!
//! let mut state = CubeState::SOLVED;
//! assert_eq!(state.cross_count(), 4);
//! assert_eq!(state.f2l_slots_solved(), 4);
//! assert!(state.eo_solved());
//!
//! state.apply("F".parse()?);
//! assert_eq!(state.cross_count(), 3);
//! assert_eq!(state.f2l_slots_solved(), 2);
//! assert!(!state.eo_solved());
//! # Ok::<(), cubelet_core::MoveError>(())
//! ```

use crate::{Corner, CubeState, Edge};

/// Edge slots making up the cross.
pub const CROSS_EDGES: [Edge; 4] = [Edge::Ur, Edge::Uf, Edge::Ul, Edge::Ub];

/// The four `(edge, corner)` slot pairs counted by [`CubeState::f2l_slots_solved`].
pub const F2L_PAIRS: [(Edge, Corner); 4] = [
    (Edge::Fr, Corner::Dfr),
    (Edge::Fl, Corner::Dlf),
    (Edge::Bl, Corner::Dbl),
    (Edge::Br, Corner::Drb),
];

impl CubeState {
    /// Number of cross edges (slots 0-3) holding their own piece unflipped, 0-4.
    #[must_use]
    #[inline]
    pub fn cross_count(&self) -> usize {
        CROSS_EDGES
            .iter()
            .filter(|edge| self.is_edge_home(edge.index()))
            .count()
    }

    /// Number of F2L pairs whose edge and corner are both solved, 0-4.
    #[must_use]
    #[inline]
    pub fn f2l_slots_solved(&self) -> usize {
        F2L_PAIRS
            .iter()
            .filter(|(edge, corner)| {
                self.is_edge_home(edge.index()) && self.is_corner_home(corner.index())
            })
            .count()
    }

    /// Returns `true` if every edge currently in slots 0-3 has orientation 0.
    #[must_use]
    #[inline]
    pub fn eo_solved(&self) -> bool {
        CROSS_EDGES
            .iter()
            .all(|edge| self.edge_ori()[edge.index()] == 0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{CubeStateParts, Move};

    fn state_after(moves: &str) -> CubeState {
        let mut state = CubeState::SOLVED;
        for name in moves.split_whitespace() {
            state.apply(name.parse().unwrap());
        }
        state
    }

    #[test]
    fn test_solved_counts() {
        let state = CubeState::SOLVED;
        assert_eq!(state.cross_count(), 4);
        assert_eq!(state.f2l_slots_solved(), 4);
        assert!(state.eo_solved());
    }

    #[test]
    fn test_u_displaces_every_cross_edge() {
        let state = state_after("U");
        assert_eq!(&state.edge_pos()[..4], &[3, 0, 1, 2]);
        assert_eq!(state.cross_count(), 0);
        assert_eq!(state.f2l_slots_solved(), 4);
        assert!(state.eo_solved());
        assert_eq!(state_after("U2").cross_count(), 0);
    }

    #[test]
    fn test_d_keeps_cross_and_breaks_pairs() {
        let state = state_after("D");
        assert_eq!(state.cross_count(), 4);
        assert_eq!(state.f2l_slots_solved(), 0);
    }

    #[test]
    fn test_r_breaks_two_pairs_and_one_cross_edge() {
        let state = state_after("R");
        assert_eq!(state.cross_count(), 3);
        assert_eq!(state.f2l_slots_solved(), 2);
        assert!(state.eo_solved());
    }

    #[test]
    fn test_eo_ignores_piece_identity() {
        // U only permutes the cross edges, so they are all wrong but oriented.
        let state = state_after("U");
        assert_eq!(state.cross_count(), 0);
        assert!(state.eo_solved());

        // A hand-built state with two flipped cross edges in place.
        let mut parts = CubeState::SOLVED.to_parts();
        parts.edge_ori[0] = 1;
        parts.edge_ori[3] = 1;
        let state = CubeState::from_parts(parts).unwrap();
        assert_eq!(state.cross_count(), 2);
        assert!(!state.eo_solved());
    }

    #[test]
    fn test_pair_requires_both_pieces() {
        let mut parts: CubeStateParts = CubeState::SOLVED.to_parts();
        parts.corner_ori[Corner::Dfr.index()] = 1;
        parts.corner_ori[Corner::Dlf.index()] = 2;
        let state = CubeState::from_parts(parts).unwrap();
        assert!(state.is_edge_home(Edge::Fr.index()));
        assert_eq!(state.f2l_slots_solved(), 2);
    }

    proptest! {
        #[test]
        fn prop_counters_stay_in_range(indices in prop::collection::vec(0..Move::COUNT, 0..40)) {
            let mut state = CubeState::SOLVED;
            for i in indices {
                state.apply(Move::ALL[i]);
                prop_assert!(state.cross_count() <= 4);
                prop_assert!(state.f2l_slots_solved() <= 4);
                if state.is_solved() {
                    prop_assert_eq!(state.cross_count(), 4);
                    prop_assert_eq!(state.f2l_slots_solved(), 4);
                    prop_assert!(state.eo_solved());
                }
            }
        }
    }
}
