//! Canonical piece and slot identities.
//!
//! Every piece has a home slot with the same index, so the same enums name both
//! "the piece URF" and "the slot URF". Corner slots are numbered
//! `URF UFL ULB UBR DFR DLF DBL DRB` (0-7) and edge slots
//! `UR UF UL UB DR DF DL DB FR FL BL BR` (0-11).
//!
//! # Examples
//!
//! ```
//! use cubelet_core::{Corner, Edge};
//!
//! assert_eq!(Corner::Dfr.index(), 4);
//! assert_eq!(Edge::from_index(8), Some(Edge::Fr));
//! assert_eq!(Edge::Bl.to_string(), "BL");
//! ```

use std::fmt::{self, Display};

/// The two classes of movable pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// One of the 8 three-sticker corner pieces.
    Corner,
    /// One of the 12 two-sticker edge pieces.
    Edge,
}

impl PieceKind {
    /// Number of slots of this class (8 or 12).
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Corner => Corner::COUNT,
            Self::Edge => Edge::COUNT,
        }
    }

    /// Number of distinct orientations of a piece of this class (3 or 2).
    #[must_use]
    pub const fn orientations(self) -> u8 {
        match self {
            Self::Corner => 3,
            Self::Edge => 2,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corner => f.write_str("corner"),
            Self::Edge => f.write_str("edge"),
        }
    }
}

macro_rules! piece_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $count:literal, [$($variant:ident => $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum $name {
            $(
                #[doc = concat!("The `", $label, "` piece/slot.")]
                $variant,
            )+
        }

        impl $name {
            /// Number of slots of this class.
            pub const COUNT: usize = $count;

            /// All pieces in slot-index order.
            pub const ALL: [Self; $count] = [$(Self::$variant),+];

            /// Returns the slot index of this piece.
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Returns the piece at the given slot index, or `None` if out of range.
            #[must_use]
            pub const fn from_index(index: usize) -> Option<Self> {
                if index < $count {
                    Some(Self::ALL[index])
                } else {
                    None
                }
            }

            /// Returns the conventional face-letter name, such as `"URF"` or `"FR"`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

piece_enum!(
    /// A corner piece, or the slot it calls home.
    Corner, 8, [
        Urf => "URF",
        Ufl => "UFL",
        Ulb => "ULB",
        Ubr => "UBR",
        Dfr => "DFR",
        Dlf => "DLF",
        Dbl => "DBL",
        Drb => "DRB",
    ]
);

piece_enum!(
    /// An edge piece, or the slot it calls home.
    Edge, 12, [
        Ur => "UR",
        Uf => "UF",
        Ul => "UL",
        Ub => "UB",
        Dr => "DR",
        Df => "DF",
        Dl => "DL",
        Db => "DB",
        Fr => "FR",
        Fl => "FL",
        Bl => "BL",
        Br => "BR",
    ]
);
