//! The generator move catalog.
//!
//! Nine generator moves define every change the puzzle can undergo: the six
//! clockwise face quarter turns `U D L R F B` and the three whole-cube
//! rotations `x y z` (which follow `R`, `U` and `F` respectively). Every named
//! move is a repetition of one generator; see [`Modifier`](crate::Modifier).
//!
//! Each generator is described by a [`GeneratorTable`] of four destination-indexed
//! arrays. For a destination slot `i`:
//!
//! - `corner_perm[i]` is the slot whose occupant moves into slot `i`,
//! - `corner_twist[i]` is the twist (mod 3) added to the piece landing in slot `i`,
//! - `edge_perm[i]` and `edge_flip[i]` are the same for edges (flip mod 2).
//!
//! Corner twist counts clockwise turns of the piece's U/D sticker away from the
//! slot's U/D face; edge flip is 1 when the piece's reference sticker (U/D, or
//! F/B for the middle layer) leaves the slot's reference face.
//!
//! # Examples
//!
//! ```
//! use cubelet_core::Generator;
//!
//! let u = Generator::U.table();
//! // U cycles the four upper edges: UB -> UR -> UF -> UL -> UB.
//! assert_eq!(&u.edge_perm[..4], &[3, 0, 1, 2]);
//! assert!(u.edge_flip.iter().all(|&f| f == 0));
//! ```

use std::fmt::{self, Display};

/// Permutation and orientation effect of one generator move.
///
/// All four arrays are destination-indexed: they say what lands in slot `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorTable {
    /// Source corner slot for each destination slot.
    pub corner_perm: [u8; 8],
    /// Twist added (mod 3) to the corner landing in each slot.
    pub corner_twist: [u8; 8],
    /// Source edge slot for each destination slot.
    pub edge_perm: [u8; 12],
    /// Flip added (mod 2) to the edge landing in each slot.
    pub edge_flip: [u8; 12],
}

/// One of the nine generator moves.
///
/// Face turns are clockwise as seen when looking at that face. Rotations turn
/// the whole puzzle: `x` like `R`, `y` like `U`, `z` like `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Generator {
    /// Up face.
    U,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Right face.
    R,
    /// Front face.
    F,
    /// Back face.
    B,
    /// Whole-cube rotation following `R`.
    X,
    /// Whole-cube rotation following `U`.
    Y,
    /// Whole-cube rotation following `F`.
    Z,
}

impl Generator {
    /// All generators in canonical order (`U D L R F B x y z`).
    pub const ALL: [Self; 9] = [
        Self::U,
        Self::D,
        Self::L,
        Self::R,
        Self::F,
        Self::B,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Returns the generator's position in [`Generator::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the letter used in move names (`'U'`, ..., `'x'`, `'y'`, `'z'`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::U => 'U',
            Self::D => 'D',
            Self::L => 'L',
            Self::R => 'R',
            Self::F => 'F',
            Self::B => 'B',
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
        }
    }

    /// Looks up a generator by its move-name letter.
    ///
    /// Letters are case-sensitive: face turns are upper case, rotations lower case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubelet_core::Generator;
    ///
    /// assert_eq!(Generator::from_letter('R'), Some(Generator::R));
    /// assert_eq!(Generator::from_letter('y'), Some(Generator::Y));
    /// assert_eq!(Generator::from_letter('r'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Self::U),
            'D' => Some(Self::D),
            'L' => Some(Self::L),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'B' => Some(Self::B),
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Returns `true` for the whole-cube rotations `x`, `y` and `z`.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Z)
    }

    /// Returns the permutation/orientation table of this generator.
    #[must_use]
    pub fn table(self) -> &'static GeneratorTable {
        &TABLES[self as usize]
    }
}

impl Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

const NO_TWIST: [u8; 8] = [0; 8];
const NO_FLIP: [u8; 12] = [0; 12];

static TABLES: [GeneratorTable; 9] = [
    // U: corners (URF UFL ULB UBR) and edges (UR UF UL UB) cycle, no orientation change.
    GeneratorTable {
        corner_perm: [3, 0, 1, 2, 4, 5, 6, 7],
        corner_twist: NO_TWIST,
        edge_perm: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
        edge_flip: NO_FLIP,
    },
    // D
    GeneratorTable {
        corner_perm: [0, 1, 2, 3, 5, 6, 7, 4],
        corner_twist: NO_TWIST,
        edge_perm: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
        edge_flip: NO_FLIP,
    },
    // L
    GeneratorTable {
        corner_perm: [0, 2, 6, 3, 4, 1, 5, 7],
        corner_twist: [0, 1, 2, 0, 0, 2, 1, 0],
        edge_perm: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
        edge_flip: NO_FLIP,
    },
    // R
    GeneratorTable {
        corner_perm: [4, 1, 2, 0, 7, 5, 6, 3],
        corner_twist: [2, 0, 0, 1, 1, 0, 0, 2],
        edge_perm: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
        edge_flip: NO_FLIP,
    },
    // F: the only face turns that flip edges are F and B.
    GeneratorTable {
        corner_perm: [1, 5, 2, 3, 0, 4, 6, 7],
        corner_twist: [1, 2, 0, 0, 2, 1, 0, 0],
        edge_perm: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
        edge_flip: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // B
    GeneratorTable {
        corner_perm: [0, 1, 3, 7, 4, 5, 2, 6],
        corner_twist: [0, 0, 1, 2, 0, 0, 2, 1],
        edge_perm: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
        edge_flip: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
    // x = R + M' + L'. The M-slice edges change reference face and flip.
    GeneratorTable {
        corner_perm: [4, 5, 1, 0, 7, 6, 2, 3],
        corner_twist: [2, 1, 2, 1, 1, 2, 1, 2],
        edge_perm: [8, 5, 9, 1, 11, 7, 10, 3, 4, 6, 2, 0],
        edge_flip: [0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0],
    },
    // y = U + E' + D'. The E-slice edges flip.
    GeneratorTable {
        corner_perm: [3, 0, 1, 2, 7, 4, 5, 6],
        corner_twist: NO_TWIST,
        edge_perm: [3, 0, 1, 2, 7, 4, 5, 6, 11, 8, 9, 10],
        edge_flip: [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
    },
    // z = F + S + B'. Every edge flips.
    GeneratorTable {
        corner_perm: [1, 5, 6, 2, 0, 4, 7, 3],
        corner_twist: [1, 2, 1, 2, 2, 1, 2, 1],
        edge_perm: [2, 9, 6, 10, 0, 8, 4, 11, 1, 5, 7, 3],
        edge_flip: [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    },
];
