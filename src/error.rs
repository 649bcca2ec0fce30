use thiserror::Error;

/// Builds an [`crate::Error::OutOfBounds`] for a request of `$requested` bytes at `$offset`
/// against a buffer holding `$len` bytes.
macro_rules! out_of_bounds {
    ($offset:expr, $requested:expr, $len:expr) => {
        crate::Error::OutOfBounds {
            offset: $offset,
            requested: $requested,
            len: $len,
        }
    };
}

/// The error type of this library.
///
/// Reads are the only fallible operations on a [`crate::Buffer`]. Writes always succeed and grow
/// the buffer as needed, so a single variant covers every failure the codec can report.
///
/// # Examples
///
/// ```rust
/// use endianbuf::{Buffer, ByteOrder, Error};
///
/// let mut buffer = Buffer::with_content(ByteOrder::Big, vec![0x01, 0x02]);
/// match buffer.read_u32() {
///     Err(Error::OutOfBounds { offset, requested, len }) => {
///         assert_eq!((offset, requested, len), (0, 4, 2));
///     }
///     Ok(value) => panic!("unexpected value {value}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read would have consumed bytes beyond the logical end of the buffer.
    ///
    /// The buffer is left untouched when this is returned: neither the cursor nor the content
    /// changes.
    #[error("Out of bound read - {requested} byte(s) at offset {offset}, buffer length is {len}")]
    OutOfBounds {
        /// Cursor position at which the read was attempted
        offset: usize,
        /// Number of bytes the read required
        requested: usize,
        /// Logical length of the buffer at the time of the read
        len: usize,
    },
}
