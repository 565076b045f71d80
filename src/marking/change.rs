use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Lateral directions in which a lane change is permitted, seen from
/// the lane's own direction of travel.
///
/// The variants form a two-bit set, `Right` being the low bit and
/// `Left` the high bit, so permissions compose with `&` and `|`:
///
/// ```rust
/// use lanegraph::LaneChange;
///
/// assert_eq!(LaneChange::Right | LaneChange::Left, LaneChange::Both);
/// assert_eq!(LaneChange::Both & LaneChange::Left, LaneChange::Left);
/// assert_eq!(LaneChange::Right & LaneChange::Left, LaneChange::None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum LaneChange {
    #[default]
    None,
    Right,
    Left,
    Both,
}

impl LaneChange {
    const RIGHT: u8 = 0b01;
    const LEFT: u8 = 0b10;

    /// The two-bit representation of the permission.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Right => Self::RIGHT,
            Self::Left => Self::LEFT,
            Self::Both => Self::RIGHT | Self::LEFT,
        }
    }

    /// Builds a permission from its two-bit representation, ignoring
    /// any higher bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match (bits & Self::RIGHT != 0, bits & Self::LEFT != 0) {
            (false, false) => Self::None,
            (true, false) => Self::Right,
            (false, true) => Self::Left,
            (true, true) => Self::Both,
        }
    }

    /// Swaps `Right` and `Left`. `Both` and `None` are symmetric.
    #[inline]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            other => other,
        }
    }

    #[inline]
    pub const fn allows_right(self) -> bool {
        self.bits() & Self::RIGHT != 0
    }

    #[inline]
    pub const fn allows_left(self) -> bool {
        self.bits() & Self::LEFT != 0
    }
}

impl BitAnd for LaneChange {
    type Output = LaneChange;

    fn bitand(self, rhs: Self) -> Self::Output {
        LaneChange::from_bits(self.bits() & rhs.bits())
    }
}

impl BitOr for LaneChange {
    type Output = LaneChange;

    fn bitor(self, rhs: Self) -> Self::Output {
        LaneChange::from_bits(self.bits() | rhs.bits())
    }
}
