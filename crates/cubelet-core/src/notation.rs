//! Human-written algorithm text.
//!
//! [`parse_algorithm`] turns text as it appears in solve databases and
//! hand-typed scrambles into canonical [`Move`]s. On top of the 27 canonical
//! names it understands:
//!
//! - `//` comments up to the end of the line,
//! - parentheses (grouping only, the contents are kept) and `|` separators,
//! - the typographic apostrophe `’`,
//! - wide turns `r l u d f b` (also written `Rw Lw Uw Dw Fw Bw`),
//! - slice turns `M E S`.
//!
//! Wide and slice turns are expressed with a rotation, since centres are not
//! part of the state: `r = x L`, `l = x' R`, `u = y D`, `d = y' U`,
//! `f = z B`, `b = z' F`, `M = x' R L'`, `E = y' U D'` and `S = z F' B`.
//! A modifier applies to every part, so `r' = x' L'` and `M2 = x2 R2 L2`.
//!
//! # Examples
//!
//! ```
//! use cubelet_core::{Algorithm, parse_algorithm};
//!
//! let moves = parse_algorithm("(R U R’ U’) // sexy move")?;
//! assert_eq!(moves.len(), 4);
//!
//! let alg: Algorithm = "r U M'".parse()?;
//! assert_eq!(alg.to_string(), "x L U x R' L");
//! assert_eq!(alg.inverse().to_string(), "L' R x' U' L' x'");
//! # Ok::<(), cubelet_core::NotationError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Generator, Modifier, Move};

/// Error returned when algorithm text contains something that is not a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NotationError {
    /// A token is neither a canonical move nor a known wide or slice turn.
    #[display("unknown token {token:?} at position {position}")]
    UnknownToken {
        /// The offending token, after comment and separator removal.
        token: String,
        /// Zero-based index of the token in the cleaned token stream.
        position: usize,
    },
}

/// Parts of a non-canonical turn, as quarter turns (`Single` or `Prime`).
type Expansion = &'static [(Generator, Modifier)];

fn expansion(base: &str) -> Option<Expansion> {
    use Generator::{B, D, F, L, R, U, X, Y, Z};
    use Modifier::{Prime, Single};

    let parts: Expansion = match base.as_bytes() {
        b"r" | b"Rw" => &[(X, Single), (L, Single)],
        b"l" | b"Lw" => &[(X, Prime), (R, Single)],
        b"u" | b"Uw" => &[(Y, Single), (D, Single)],
        b"d" | b"Dw" => &[(Y, Prime), (U, Single)],
        b"f" | b"Fw" => &[(Z, Single), (B, Single)],
        b"b" | b"Bw" => &[(Z, Prime), (F, Single)],
        b"M" => &[(X, Prime), (R, Single), (L, Prime)],
        b"E" => &[(Y, Prime), (U, Single), (D, Prime)],
        b"S" => &[(Z, Single), (F, Prime), (B, Single)],
        _ => return None,
    };
    Some(parts)
}

/// Applies the token's modifier to one quarter-turn part.
const fn scaled(part: Modifier, by: Modifier) -> Modifier {
    match by {
        Modifier::Single => part,
        Modifier::Prime => part.inverse(),
        Modifier::Double => Modifier::Double,
    }
}

fn expand_token(token: &str, out: &mut Vec<Move>) -> bool {
    if let Ok(mv) = token.parse::<Move>() {
        out.push(mv);
        return true;
    }

    let split = token.find(['\'', '2']).unwrap_or(token.len());
    let (base, suffix) = token.split_at(split);
    let (Some(parts), Some(modifier)) = (expansion(base), Modifier::from_suffix(suffix)) else {
        return false;
    };
    out.extend(
        parts
            .iter()
            .map(|&(generator, part)| Move::new(generator, scaled(part, modifier))),
    );
    true
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(|line| line.split_once("//").map_or(line, |(code, _)| code))
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '|')))
        .filter(|token| !token.is_empty())
        .map(|token| token.replace('’', "'"))
}

/// Parses algorithm text into canonical moves.
///
/// # Errors
///
/// Returns [`NotationError::UnknownToken`] for the first token that is not a
/// canonical move, a wide turn or a slice turn.
///
/// # Examples
///
/// ```
/// use cubelet_core::{NotationError, parse_algorithm};
///
/// let moves = parse_algorithm("M2 | U")?;
/// let names: Vec<_> = moves.iter().map(ToString::to_string).collect();
/// assert_eq!(names, ["x2", "R2", "L2", "U"]);
///
/// assert_eq!(
///     parse_algorithm("R Q"),
///     Err(NotationError::UnknownToken { token: "Q".into(), position: 1 })
/// );
/// # Ok::<(), NotationError>(())
/// ```
pub fn parse_algorithm(text: &str) -> Result<Vec<Move>, NotationError> {
    let mut moves = Vec::new();
    for (position, token) in tokens(text).enumerate() {
        if !expand_token(&token, &mut moves) {
            return Err(NotationError::UnknownToken { token, position });
        }
    }
    Ok(moves)
}

/// A sequence of canonical moves.
///
/// Parses with [`parse_algorithm`] and displays as space-separated canonical
/// names, so a displayed algorithm always parses back to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Algorithm(Vec<Move>);

impl Algorithm {
    /// Creates an empty algorithm.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the moves in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    /// Returns the number of canonical moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the algorithm has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a move.
    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// Returns an iterator over the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// Returns the algorithm that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|mv| mv.inverse()).collect()
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Algorithm {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_algorithm(s).map(Self)
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl From<Algorithm> for Vec<Move> {
    fn from(alg: Algorithm) -> Self {
        alg.0
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Move> for Algorithm {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Algorithm {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
