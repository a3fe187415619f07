use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The 32-byte seed a scramble is generated from.
///
/// Displayed and parsed as 64 lowercase hexadecimal digits, so a scramble can
/// be reproduced from the seed printed next to it.
///
/// # Examples
///
/// ```
/// use cubelet_scrambler::ScrambleSeed;
///
/// let text = format!("{}ff", "00".repeat(31));
/// let seed: ScrambleSeed = text.parse()?;
/// assert_eq!(seed.as_bytes()[31], 0xff);
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), cubelet_scrambler::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ScrambleSeed([u8; 32]);

impl ScrambleSeed {
    /// Number of hexadecimal digits in the text form.
    pub const HEX_LEN: usize = 64;

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for ScrambleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when a seed string is not 64 hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string does not have exactly 64 characters.
    #[display("seed must be {} hex digits, got {len}", ScrambleSeed::HEX_LEN)]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit {found:?} at position {position}")]
    InvalidDigit {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for ScrambleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Self::HEX_LEN {
            return Err(SeedParseError::InvalidLength { len });
        }

        let mut bytes = [0_u8; 32];
        for (position, found) in s.chars().enumerate() {
            let digit = found
                .to_digit(16)
                .ok_or(SeedParseError::InvalidDigit { position, found })?;
            let byte = &mut bytes[position / 2];
            #[expect(clippy::cast_possible_truncation)]
            let digit = digit as u8;
            *byte = (*byte << 4) | digit;
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for ScrambleSeed {
    type Error = SeedParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScrambleSeed> for String {
    fn from(seed: ScrambleSeed) -> Self {
        seed.to_string()
    }
}
