//! Random-access binary buffer with a cursor and a fixed byte order.
//!
//! This module provides [`crate::Buffer`], an owned byte store with a read/write cursor. Typed
//! reads decode integers, floats and fixed-length strings at the cursor; typed writes encode them
//! at the cursor. Unlike an append-only writer, a write in the middle of the content overwrites
//! the bytes it covers and only grows the buffer when it runs past the end.
//!
//! # Key Components
//!
//! ## State Control
//! - [`crate::Buffer::set_content`] - Replace the content and rewind
//! - [`crate::Buffer::rewind`] / [`crate::Buffer::seek`] / [`crate::Buffer::skip`] - Move the cursor
//! - [`crate::Buffer::clear`] - Drop all content
//! - [`crate::Buffer::export`] - Copy out the content
//!
//! ## Typed Access
//! - [`crate::Buffer::read`] / [`crate::Buffer::write`] - Generic over [`crate::Codec`]
//! - `read_u8` .. `read_i64`, `write_u8` .. `write_i64`, plus `f32` / `f64`
//! - [`crate::Buffer::peek`] - Decode without advancing
//!
//! ## Fixed-Length Strings
//! - [`crate::Buffer::read_fixed_string`] - Read a field and strip its NUL padding
//! - [`crate::Buffer::write_fixed_string`] - Write a value padded or truncated to a field width
//!
//! # Examples
//!
//! ```rust
//! use endianbuf::{Buffer, ByteOrder};
//!
//! let mut buffer = Buffer::new(ByteOrder::Little);
//! buffer.write_u16(0x0809).write_fixed_string("Book", 8).write_i32(-1);
//! assert_eq!(buffer.size(), 14);
//!
//! // Patch the record type in place
//! buffer.rewind().write_u16(0x0805);
//! assert_eq!(buffer.size(), 14);
//!
//! buffer.rewind();
//! assert_eq!(buffer.read_u16()?, 0x0805);
//! assert_eq!(buffer.read_fixed_string(8)?, b"Book");
//! assert_eq!(buffer.read_i32()?, -1);
//! # Ok::<(), endianbuf::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`crate::Buffer`] is `Send` and `Sync`, but every operation that reads or writes takes
//! `&mut self`. Sharing one buffer between threads requires external synchronization such as a
//! `Mutex`.

use crate::{
    fixed,
    io::{read_at, splice_at, write_at, Codec},
    ByteOrder, Result,
};

/// Generates the named accessor pair for each primitive type.
macro_rules! typed_accessors {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "` at the cursor and advance past it.")]
            ///
            /// # Errors
            /// Returns [`crate::Error::OutOfBounds`] if the value would extend past the end.
            pub fn $read(&mut self) -> Result<$ty> {
                self.read::<$ty>()
            }

            #[doc = concat!("Write a `", stringify!($ty), "` at the cursor and advance past it.")]
            pub fn $write(&mut self, value: $ty) -> &mut Self {
                self.write::<$ty>(value)
            }
        )*
    };
}

/// An owned byte buffer with a cursor and a fixed byte order.
///
/// The byte order is chosen once at construction and applies to every multi-byte read and write.
/// Reads are bounds-checked against the logical length and leave the buffer untouched on failure.
/// Writes never fail: they overwrite, append, or both, and zero-fill any gap left by seeking past
/// the end.
///
/// # Examples
///
/// ```rust
/// use endianbuf::{Buffer, ByteOrder};
///
/// let mut be = Buffer::new(ByteOrder::Big);
/// be.write_u16(0x127);
/// assert_eq!(be.as_slice(), &[0x01, 0x27]);
///
/// let mut le = Buffer::new(ByteOrder::Little);
/// le.write_u16(0x127);
/// assert_eq!(le.as_slice(), &[0x27, 0x01]);
///
/// be.rewind();
/// le.rewind();
/// assert_eq!(be.read_u16()?, le.read_u16()?);
/// # Ok::<(), endianbuf::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    /// The buffer content; its length is the logical size
    data: Vec<u8>,
    /// Cursor for the next read or write, may exceed `data.len()` after a seek
    position: usize,
    /// Wire byte order
    order: ByteOrder,
    /// `order` differs from the host's byte order
    needs_swap: bool,
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer::new(ByteOrder::default())
    }
}

impl Buffer {
    /// Create an empty buffer using `order` for all multi-byte values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::{Buffer, ByteOrder};
    /// let buffer = Buffer::new(ByteOrder::Little);
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.byte_order(), ByteOrder::Little);
    /// ```
    #[must_use]
    pub fn new(order: ByteOrder) -> Self {
        Buffer {
            data: Vec::new(),
            position: 0,
            order,
            needs_swap: !order.is_native(),
        }
    }

    /// Create an empty big-endian buffer.
    #[must_use]
    pub fn big_endian() -> Self {
        Buffer::new(ByteOrder::Big)
    }

    /// Create an empty little-endian buffer.
    #[must_use]
    pub fn little_endian() -> Self {
        Buffer::new(ByteOrder::Little)
    }

    /// Create a buffer over existing content with the cursor at 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::{Buffer, ByteOrder};
    /// let mut buffer = Buffer::with_content(ByteOrder::Big, vec![0x00, 0x2A]);
    /// assert_eq!(buffer.read_u16()?, 42);
    /// # Ok::<(), endianbuf::Error>(())
    /// ```
    #[must_use]
    pub fn with_content(order: ByteOrder, data: impl Into<Vec<u8>>) -> Self {
        let mut buffer = Buffer::new(order);
        buffer.set_content(data);
        buffer
    }

    /// The byte order this buffer was created with.
    #[must_use]
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Returns `true` if the buffer's byte order differs from the host's.
    ///
    /// Decoding never depends on this; it is reported for callers that hand raw content to
    /// host-order code.
    #[must_use]
    pub fn needs_swap(&self) -> bool {
        self.needs_swap
    }

    /// Replace the content and move the cursor to the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::Buffer;
    /// let mut buffer = Buffer::default();
    /// buffer.write_u32(7);
    /// buffer.set_content(vec![0x01, 0x02, 0x03]);
    /// assert_eq!(buffer.size(), 3);
    /// assert_eq!(buffer.position(), 0);
    /// ```
    pub fn set_content(&mut self, data: impl Into<Vec<u8>>) -> &mut Self {
        self.data = data.into();
        self.position = 0;
        self
    }

    /// Move the cursor to the start.
    pub fn rewind(&mut self) -> &mut Self {
        self.position = 0;
        self
    }

    /// Drop all content and move the cursor to the start.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self.position = 0;
        self
    }

    /// Move the cursor to `pos`.
    ///
    /// The position is not validated here. A read from an invalid position fails with
    /// [`crate::Error::OutOfBounds`]; a write past the end zero-fills the gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::Buffer;
    /// let mut buffer = Buffer::default();
    /// buffer.seek(3).write_u8(0xFF);
    /// assert_eq!(buffer.as_slice(), &[0x00, 0x00, 0x00, 0xFF]);
    /// ```
    pub fn seek(&mut self, pos: usize) -> &mut Self {
        self.position = pos;
        self
    }

    /// Move the cursor forward by `step` bytes without decoding them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `step` bytes remain.
    pub fn skip(&mut self, step: usize) -> Result<&mut Self> {
        self.position = self.calc_end_position(step)?;
        Ok(self)
    }

    /// Current cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Logical size of the content in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the cursor and the end, zero if the cursor is past the end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns a copy of the full content. The cursor is not affected.
    #[must_use]
    pub fn export(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Borrow the full content.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its content.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Read a `T` at the cursor in the buffer's byte order and advance past it.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the value would extend past the end. The cursor
    /// is left where it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::{Buffer, ByteOrder};
    /// let mut buffer = Buffer::with_content(ByteOrder::Little, vec![0xFE, 0xFF, 0x01]);
    /// let value: i16 = buffer.read()?;
    /// assert_eq!(value, -2);
    /// assert!(buffer.read::<u16>().is_err());
    /// assert_eq!(buffer.position(), 2);
    /// # Ok::<(), endianbuf::Error>(())
    /// ```
    pub fn read<T: Codec>(&mut self) -> Result<T> {
        read_at::<T>(&self.data, &mut self.position, self.order)
    }

    /// Decode a `T` at the cursor without advancing.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the value would extend past the end.
    pub fn peek<T: Codec>(&self) -> Result<T> {
        let mut temp_position = self.position;
        read_at::<T>(&self.data, &mut temp_position, self.order)
    }

    /// Write a `T` at the cursor in the buffer's byte order and advance past it.
    pub fn write<T: Codec>(&mut self, value: T) -> &mut Self {
        write_at(&mut self.data, &mut self.position, value, self.order);
        self
    }

    typed_accessors! {
        u8 => read_u8, write_u8;
        i8 => read_i8, write_i8;
        u16 => read_u16, write_u16;
        i16 => read_i16, write_i16;
        u32 => read_u32, write_u32;
        i32 => read_i32, write_i32;
        u64 => read_u64, write_u64;
        i64 => read_i64, write_i64;
        f32 => read_f32, write_f32;
        f64 => read_f64, write_f64;
    }

    /// Read `length` raw bytes at the cursor and advance past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&[u8]> {
        let start = self.position;
        let end = self.calc_end_position(length)?;
        self.position = end;
        Ok(&self.data[start..end])
    }

    /// Write raw bytes at the cursor and advance past them.
    ///
    /// At the end the bytes are appended. Inside the content they overwrite what they cover and
    /// only grow the buffer if they run past the end. Past the end the gap is zero-filled first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::Buffer;
    /// let mut buffer = Buffer::with_content(Default::default(), b"ABCDE".to_vec());
    /// buffer.seek(3).write_bytes(b"xyz");
    /// assert_eq!(buffer.as_slice(), b"ABCxyz");
    /// assert_eq!(buffer.position(), 6);
    /// ```
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        splice_at(&mut self.data, &mut self.position, bytes);
        self
    }

    /// Read a fixed-length string field of `length` bytes with its trailing NUL padding removed.
    ///
    /// The cursor always advances by `length`. A field without trailing NUL is returned whole;
    /// an all-NUL field yields an empty result.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::Buffer;
    /// let mut buffer = Buffer::with_content(Default::default(), b"AB\0\0\0ABCDE".to_vec());
    /// assert_eq!(buffer.read_fixed_string(5)?, b"AB");
    /// assert_eq!(buffer.read_fixed_string(5)?, b"ABCDE");
    /// # Ok::<(), endianbuf::Error>(())
    /// ```
    pub fn read_fixed_string(&mut self, length: usize) -> Result<Vec<u8>> {
        let field = self.read_bytes(length)?;
        Ok(fixed::trim_nul(field).to_vec())
    }

    /// Write `value` as a fixed-length field of `length` bytes.
    ///
    /// A `length` of 0 uses the value's own byte length. Shorter values are zero-padded, longer
    /// ones truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use endianbuf::Buffer;
    /// let mut buffer = Buffer::default();
    /// buffer.write_fixed_string("AB", 4).write_fixed_string("ABCDEF", 3);
    /// assert_eq!(buffer.as_slice(), b"AB\0\0ABC");
    /// ```
    pub fn write_fixed_string(&mut self, value: impl AsRef<[u8]>, length: usize) -> &mut Self {
        let value = value.as_ref();
        let length = if length == 0 { value.len() } else { length };
        let field = fixed::encode(value, length);
        self.write_bytes(&field)
    }

    /// Write `value` as a field of its own byte length.
    pub fn write_string(&mut self, value: impl AsRef<[u8]>) -> &mut Self {
        self.write_fixed_string(value, 0)
    }

    /// Computes `position + length`, failing if it overflows or passes the end.
    fn calc_end_position(&self, length: usize) -> Result<usize> {
        self.position
            .checked_add(length)
            .filter(|end| *end <= self.data.len())
            .ok_or(out_of_bounds!(self.position, length, self.data.len()))
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Buffer> for Vec<u8> {
    fn from(buffer: Buffer) -> Self {
        buffer.into_inner()
    }
}
