//! Named moves and the fixed action index space.
//!
//! A move name has the form `<BASE><MODIFIER>?` where `BASE` is one of the nine
//! generator letters `U D L R F B x y z` and `MODIFIER` is `""`, `"'"` or `"2"`.
//! There are exactly 27 valid names. Their canonical order,
//!
//! ```text
//! U U' U2 D D' D2 L L' L2 R R' R2 F F' F2 B B' B2 x x' x2 y y' y2 z z' z2
//! ```
//!
//! is the index space used by any action-indexed consumer and is stable.
//!
//! Moves are not separately tabulated: a move is its generator applied
//! [`Modifier::repetitions`] times (1, 3 or 2).
//!
//! # Examples
//!
//! ```
//! use cubelet_core::{Generator, Modifier, Move};
//!
//! let mv: Move = "R'".parse()?;
//! assert_eq!(mv.generator(), Generator::R);
//! assert_eq!(mv.modifier(), Modifier::Prime);
//! assert_eq!(mv.index(), 10);
//! assert_eq!(Move::ALL[10], mv);
//! assert_eq!(mv.inverse().to_string(), "R");
//! # Ok::<(), cubelet_core::MoveError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Generator, MoveError};

/// How many times a move repeats its generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    /// No suffix: one quarter turn.
    Single,
    /// `'` suffix: three quarter turns (one counter-clockwise turn).
    Prime,
    /// `2` suffix: two quarter turns.
    Double,
}

impl Modifier {
    /// All modifiers in canonical order (`""`, `"'"`, `"2"`).
    pub const ALL: [Self; 3] = [Self::Single, Self::Prime, Self::Double];

    /// Returns the number of generator applications: 1, 3 or 2.
    #[must_use]
    pub const fn repetitions(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Prime => 3,
            Self::Double => 2,
        }
    }

    /// Returns the modifier performing `quarter_turns` clockwise quarter turns.
    ///
    /// Turns are taken modulo 4; `None` is returned when they cancel out.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubelet_core::Modifier;
    ///
    /// assert_eq!(Modifier::from_quarter_turns(3), Some(Modifier::Prime));
    /// assert_eq!(Modifier::from_quarter_turns(6), Some(Modifier::Double));
    /// assert_eq!(Modifier::from_quarter_turns(8), None);
    /// ```
    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: u32) -> Option<Self> {
        match quarter_turns % 4 {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Prime),
            _ => None,
        }
    }

    /// Returns the modifier that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Single => Self::Prime,
            Self::Prime => Self::Single,
            Self::Double => Self::Double,
        }
    }

    /// Returns the move-name suffix: `""`, `"'"` or `"2"`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Single => "",
            Self::Prime => "'",
            Self::Double => "2",
        }
    }

    /// Parses a move-name suffix.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Self::Single),
            "'" => Some(Self::Prime),
            "2" => Some(Self::Double),
            _ => None,
        }
    }
}

/// One of the 27 named moves: a generator plus a modifier.
///
/// Serialized as its name (for example `"U2"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    generator: Generator,
    modifier: Modifier,
}

impl Move {
    /// Number of named moves.
    pub const COUNT: usize = 27;

    /// All 27 moves in canonical action-index order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::new(Generator::U, Modifier::Single); 27];
        let mut g = 0;
        while g < Generator::ALL.len() {
            let mut m = 0;
            while m < Modifier::ALL.len() {
                all[g * 3 + m] = Self::new(Generator::ALL[g], Modifier::ALL[m]);
                m += 1;
            }
            g += 1;
        }
        all
    };

    /// The 18 face turns (everything but `x`, `y` and `z`), in canonical order.
    pub const FACE_TURNS: [Self; 18] = {
        let mut turns = [Self::ALL[0]; 18];
        let mut i = 0;
        while i < turns.len() {
            turns[i] = Self::ALL[i];
            i += 1;
        }
        turns
    };

    /// Creates a move from its parts.
    #[must_use]
    pub const fn new(generator: Generator, modifier: Modifier) -> Self {
        Self {
            generator,
            modifier,
        }
    }

    /// Returns the generator this move repeats.
    #[must_use]
    pub const fn generator(self) -> Generator {
        self.generator
    }

    /// Returns the modifier of this move.
    #[must_use]
    pub const fn modifier(self) -> Modifier {
        self.modifier
    }

    /// Returns the number of generator applications (1, 3 or 2).
    #[must_use]
    pub const fn repetitions(self) -> u8 {
        self.modifier.repetitions()
    }

    /// Returns this move's position in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.generator as usize * 3 + self.modifier as usize
    }

    /// Returns the move at `index` in [`Move::ALL`], or `None` if out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.generator, self.modifier.inverse())
    }

    /// Returns `true` for `x`, `y` and `z` moves.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        self.generator.is_rotation()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.generator.letter(), self.modifier.suffix())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let generator = chars.next().and_then(Generator::from_letter);
        let modifier = Modifier::from_suffix(chars.as_str());
        match (generator, modifier) {
            (Some(generator), Some(modifier)) => Ok(Self::new(generator, modifier)),
            _ => Err(MoveError::UnknownMove { name: s.to_owned() }),
        }
    }
}

impl TryFrom<String> for Move {
    type Error = MoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [&str; 27] = [
        "U", "U'", "U2", "D", "D'", "D2", "L", "L'", "L2", "R", "R'", "R2", "F", "F'", "F2", "B",
        "B'", "B2", "x", "x'", "x2", "y", "y'", "y2", "z", "z'", "z2",
    ];

    #[test]
    fn test_canonical_order() {
        let names: Vec<_> = Move::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, CANONICAL);
        for (i, mv) in Move::ALL.into_iter().enumerate() {
            assert_eq!(mv.index(), i);
            assert_eq!(Move::from_index(i), Some(mv));
        }
        assert_eq!(Move::from_index(27), None);
    }

    #[test]
    fn test_face_turns_exclude_rotations() {
        assert_eq!(Move::FACE_TURNS.len(), 18);
        assert!(Move::FACE_TURNS.iter().all(|mv| !mv.is_rotation()));
        assert_eq!(Move::FACE_TURNS[17].to_string(), "B2");
    }

    #[test]
    fn test_parse_all_names() {
        for name in CANONICAL {
            let mv: Move = name.parse().unwrap();
            assert_eq!(mv.to_string(), name);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        for name in ["", "Q", "u", "X", "R3", "R''", "R2'", "M", "U ", " U", "Rw"] {
            assert_eq!(
                name.parse::<Move>(),
                Err(MoveError::UnknownMove {
                    name: name.to_owned()
                }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_repetitions_and_inverse() {
        assert_eq!(Modifier::Single.repetitions(), 1);
        assert_eq!(Modifier::Prime.repetitions(), 3);
        assert_eq!(Modifier::Double.repetitions(), 2);
        for mv in Move::ALL {
            let total = u32::from(mv.repetitions()) + u32::from(mv.inverse().repetitions());
            assert_eq!(total % 4, 0, "{mv} and its inverse must cancel");
            assert_eq!(mv.inverse().inverse(), mv);
        }
    }

    #[test]
    fn test_serde_uses_move_names() {
        let json = serde_json::to_string(&Move::new(Generator::Y, Modifier::Double)).unwrap();
        assert_eq!(json, "\"y2\"");
        let mv: Move = serde_json::from_str("\"F'\"").unwrap();
        assert_eq!(mv, Move::new(Generator::F, Modifier::Prime));
        assert!(serde_json::from_str::<Move>("\"Q2\"").is_err());
    }
}
