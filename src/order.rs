//! Byte order selection for a [`crate::Buffer`].
//!
//! [`ByteOrder`] is the only configuration a buffer takes. It is fixed at construction and decides
//! how every multi-byte value is laid out on the wire. It can be parsed from configuration strings
//! (`"big"`, `"be"`, `"little"`, `"le"`, case-insensitive) through [`std::str::FromStr`].
//!
//! ```rust
//! use endianbuf::ByteOrder;
//!
//! let order: ByteOrder = "LE".parse().unwrap();
//! assert_eq!(order, ByteOrder::Little);
//! assert_eq!(order.to_string(), "little");
//! assert_eq!(ByteOrder::default(), ByteOrder::Big);
//! ```

use strum::{Display, EnumCount, EnumIter, EnumString};

/// Wire byte order of multi-byte values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum ByteOrder {
    /// Most significant byte first
    #[default]
    #[strum(to_string = "big", serialize = "be")]
    Big,
    /// Least significant byte first
    #[strum(to_string = "little", serialize = "le")]
    Little,
}

impl ByteOrder {
    /// The byte order of the target this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Returns `true` if this order matches the host's native order.
    #[must_use]
    pub fn is_native(self) -> bool {
        self == Self::native()
    }
}
