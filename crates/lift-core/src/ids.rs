//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`, but
//! callers should prefer the `.index()` helper when indexing a `Vec`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a rider in the building's rider store.  Riders are never
    /// removed from the store, so an id stays valid for the whole run.
    pub struct RiderId(u32);
}

typed_id! {
    /// Level of a floor.  `FloorId::GROUND` is level 0.
    pub struct FloorId(u32);
}

impl FloorId {
    pub const GROUND: FloorId = FloorId(0);

    #[inline]
    pub fn is_ground(self) -> bool {
        self == Self::GROUND
    }

    /// The floor directly above.
    #[inline]
    pub fn up(self) -> FloorId {
        FloorId(self.0 + 1)
    }

    /// The floor directly below, saturating at ground.
    #[inline]
    pub fn down(self) -> FloorId {
        FloorId(self.0.saturating_sub(1))
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RiderId({})", self.0)
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "Floor G")
        } else {
            write!(f, "Floor {}", self.0)
        }
    }
}
