//! Endian-explicit encoding and decoding of primitive values.
//!
//! This module is the codec layer underneath [`crate::Buffer`]. The [`Codec`] trait maps every
//! supported primitive to its fixed-size byte array in either byte order, and the free functions
//! apply it at an offset inside a byte store:
//!
//! - [`read_at`] decodes a value at an offset and advances the offset, bounds-checked
//! - [`write_at`] encodes a value and hands it to [`splice_at`]
//! - [`splice_at`] is the positional write primitive: append, overwrite in place, or both
//!
//! Signed and unsigned types decode the same way, through `from_be_bytes` / `from_le_bytes`.
//! The host's byte order never enters the computation, so a given byte sequence always decodes to
//! the same value for a given [`ByteOrder`].
//!
//! # Examples
//!
//! ```rust
//! use endianbuf::{io::{read_at, write_at}, ByteOrder};
//!
//! let mut data = Vec::new();
//! let mut offset = 0;
//! write_at(&mut data, &mut offset, -2_i16, ByteOrder::Big);
//! write_at(&mut data, &mut offset, 0x0127_u16, ByteOrder::Little);
//! assert_eq!(data, [0xFF, 0xFE, 0x27, 0x01]);
//!
//! offset = 0;
//! let first: i16 = read_at(&data, &mut offset, ByteOrder::Big)?;
//! let second: u16 = read_at(&data, &mut offset, ByteOrder::Little)?;
//! assert_eq!((first, second), (-2, 0x0127));
//! # Ok::<(), endianbuf::Error>(())
//! ```

use log::{debug, trace};

use crate::{ByteOrder, Result};

/// Endian-aware conversion between a primitive and its byte representation.
///
/// Each implementation names the fixed-size array holding its encoding (e.g. `[u8; 4]` for
/// `u32`). It is implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64`, `f32` and
/// `f64`.
pub trait Codec: Sized + Copy {
    /// The byte array this type encodes to.
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Decode from little-endian bytes
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Decode from big-endian bytes
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Encode as little-endian bytes
    fn to_le_bytes(self) -> Self::Bytes;
    /// Encode as big-endian bytes
    fn to_be_bytes(self) -> Self::Bytes;

    /// Decode from bytes laid out in `order`.
    fn decode(bytes: Self::Bytes, order: ByteOrder) -> Self {
        match order {
            ByteOrder::Big => Self::from_be_bytes(bytes),
            ByteOrder::Little => Self::from_le_bytes(bytes),
        }
    }

    /// Encode into bytes laid out in `order`.
    fn encode(self, order: ByteOrder) -> Self::Bytes {
        match order {
            ByteOrder::Big => self.to_be_bytes(),
            ByteOrder::Little => self.to_le_bytes(),
        }
    }
}

macro_rules! impl_codec {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Codec for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }
            }
        )*
    };
}

impl_codec!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Reads a value of type `T` in `order` from `data` at `offset`, advancing the offset.
///
/// The offset only moves when the read succeeds.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if fewer than `size_of::<T>()` bytes are available at
/// `offset`, including when `offset` already lies past the end of `data`.
///
/// # Examples
///
/// ```rust
/// use endianbuf::{io::read_at, ByteOrder};
///
/// let data = [0x00, 0x00, 0x01, 0x23];
/// let mut offset = 0;
/// let value: u32 = read_at(&data, &mut offset, ByteOrder::Big)?;
/// assert_eq!(value, 0x123);
/// assert_eq!(offset, 4);
/// # Ok::<(), endianbuf::Error>(())
/// ```
pub fn read_at<T: Codec>(data: &[u8], offset: &mut usize, order: ByteOrder) -> Result<T> {
    let width = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(width).filter(|end| *end <= data.len()) else {
        trace!(
            "rejecting {width} byte read at offset {} of {}",
            *offset,
            data.len()
        );
        return Err(out_of_bounds!(*offset, width, data.len()));
    };

    let Ok(bytes) = data[*offset..end].try_into() else {
        return Err(out_of_bounds!(*offset, width, data.len()));
    };

    *offset = end;
    Ok(T::decode(bytes, order))
}

/// Encodes `value` in `order` and writes it into `data` at `offset` via [`splice_at`].
pub fn write_at<T: Codec>(data: &mut Vec<u8>, offset: &mut usize, value: T, order: ByteOrder) {
    splice_at(data, offset, value.encode(order).as_ref());
}

/// Writes `bytes` into `data` at `offset` and advances the offset past them.
///
/// - At the end of `data` the bytes are appended.
/// - Inside `data` the bytes overwrite the existing span. Any part that runs past the old end is
///   appended, so the length only grows when the span crosses it.
/// - Past the end of `data` the gap is zero-filled first, then the bytes are appended.
///
/// # Examples
///
/// ```rust
/// use endianbuf::io::splice_at;
///
/// let mut data = b"ABCDE".to_vec();
/// let mut offset = 1;
/// splice_at(&mut data, &mut offset, b"xy");
/// assert_eq!(data, b"AxyDE");
///
/// offset = 4;
/// splice_at(&mut data, &mut offset, b"zz");
/// assert_eq!(data, b"AxyDzz");
/// assert_eq!(offset, 6);
/// ```
pub fn splice_at(data: &mut Vec<u8>, offset: &mut usize, bytes: &[u8]) {
    let start = *offset;
    if start > data.len() {
        debug!(
            "zero-filling {} byte gap before write at offset {start}",
            start - data.len()
        );
        data.resize(start, 0);
    }

    if start == data.len() {
        data.extend_from_slice(bytes);
    } else {
        let overlap = bytes.len().min(data.len() - start);
        trace!(
            "splicing {} byte(s) at offset {start}, {overlap} overwritten",
            bytes.len()
        );
        data[start..start + overlap].copy_from_slice(&bytes[..overlap]);
        data.extend_from_slice(&bytes[overlap..]);
    }

    *offset = start + bytes.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    fn read_first<T: Codec>(order: ByteOrder) -> T {
        let mut offset = 0;
        read_at(&TEST_BUFFER, &mut offset, order).unwrap()
    }

    #[test]
    fn read_le() {
        assert_eq!(read_first::<u8>(ByteOrder::Little), 0x01);
        assert_eq!(read_first::<i8>(ByteOrder::Little), 0x01);
        assert_eq!(read_first::<u16>(ByteOrder::Little), 0x0201);
        assert_eq!(read_first::<i16>(ByteOrder::Little), 0x0201);
        assert_eq!(read_first::<u32>(ByteOrder::Little), 0x0403_0201);
        assert_eq!(read_first::<i32>(ByteOrder::Little), 0x0403_0201);
        assert_eq!(read_first::<u64>(ByteOrder::Little), 0x0807_0605_0403_0201);
        assert_eq!(read_first::<i64>(ByteOrder::Little), 0x0807_0605_0403_0201);
    }

    #[test]
    fn read_be() {
        assert_eq!(read_first::<u8>(ByteOrder::Big), 0x01);
        assert_eq!(read_first::<i8>(ByteOrder::Big), 0x01);
        assert_eq!(read_first::<u16>(ByteOrder::Big), 0x0102);
        assert_eq!(read_first::<i16>(ByteOrder::Big), 0x0102);
        assert_eq!(read_first::<u32>(ByteOrder::Big), 0x0102_0304);
        assert_eq!(read_first::<i32>(ByteOrder::Big), 0x0102_0304);
        assert_eq!(read_first::<u64>(ByteOrder::Big), 0x0102_0304_0506_0708);
        assert_eq!(read_first::<i64>(ByteOrder::Big), 0x0102_0304_0506_0708);
    }

    #[test]
    fn read_floats() {
        assert_eq!(read_first::<f32>(ByteOrder::Big), 2.3879393e-38);
        assert_eq!(read_first::<f32>(ByteOrder::Little), 1.5399896e-36);
        assert_eq!(read_first::<f64>(ByteOrder::Big), 8.20788039913184e-304);
        assert_eq!(read_first::<f64>(ByteOrder::Little), 5.447603722011605e-270);
    }

    #[test]
    fn read_signed_negative() {
        let data = [0xFF, 0xFE];
        let mut offset = 0;
        assert_eq!(read_at::<i16>(&data, &mut offset, ByteOrder::Big).unwrap(), -2);
        offset = 0;
        assert_eq!(read_at::<i16>(&data, &mut offset, ByteOrder::Little).unwrap(), -257);
    }

    #[test]
    fn read_from_offset() {
        let mut offset = 2;
        let result = read_at::<u16>(&TEST_BUFFER, &mut offset, ByteOrder::Big).unwrap();
        assert_eq!(result, 0x0304);
        assert_eq!(offset, 4);

        let result = read_at::<u16>(&TEST_BUFFER, &mut offset, ByteOrder::Little).unwrap();
        assert_eq!(result, 0x0605);
        assert_eq!(offset, 6);
    }

    #[test]
    fn errors() {
        let buffer = [0xFF, 0xFF, 0xFF, 0xFF];

        let mut offset = 0;
        let result = read_at::<u64>(&buffer, &mut offset, ByteOrder::Little);
        assert_eq!(
            result,
            Err(Error::OutOfBounds {
                offset: 0,
                requested: 8,
                len: 4
            })
        );
        assert_eq!(offset, 0);

        let mut offset = 3;
        assert!(read_at::<u16>(&buffer, &mut offset, ByteOrder::Big).is_err());
        assert_eq!(offset, 3);

        let mut offset = usize::MAX;
        assert!(read_at::<u8>(&buffer, &mut offset, ByteOrder::Big).is_err());
        assert_eq!(offset, usize::MAX);
    }

    #[test]
    fn write_sequential() {
        let mut data = Vec::new();
        let mut offset = 0;

        write_at(&mut data, &mut offset, 0x1234u16, ByteOrder::Little);
        write_at(&mut data, &mut offset, 0x5678u16, ByteOrder::Big);
        write_at(&mut data, &mut offset, -1i32, ByteOrder::Little);
        assert_eq!(offset, 8);
        assert_eq!(data, [0x34, 0x12, 0x56, 0x78, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn write_floats() {
        let mut data = Vec::new();
        let mut offset = 0;
        write_at(&mut data, &mut offset, 1.0f32, ByteOrder::Little);
        write_at(&mut data, &mut offset, 1.0f64, ByteOrder::Big);
        assert_eq!(
            data,
            [0x00, 0x00, 0x80, 0x3F, 0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn splice_inside() {
        let mut data = vec![0xAA; 6];
        let mut offset = 2;
        splice_at(&mut data, &mut offset, &[0x01, 0x02]);
        assert_eq!(data, [0xAA, 0xAA, 0x01, 0x02, 0xAA, 0xAA]);
        assert_eq!(offset, 4);
    }

    #[test]
    fn splice_crossing_end() {
        let mut data = vec![0xAA; 3];
        let mut offset = 1;
        splice_at(&mut data, &mut offset, &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(data, [0xAA, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(offset, 5);
    }

    #[test]
    fn splice_past_end_zero_fills() {
        let mut data = vec![0xAA];
        let mut offset = 4;
        splice_at(&mut data, &mut offset, &[0x01]);
        assert_eq!(data, [0xAA, 0x00, 0x00, 0x00, 0x01]);
        assert_eq!(offset, 5);
    }

    #[test]
    fn splice_empty() {
        let mut data = vec![0xAA, 0xBB];
        let mut offset = 1;
        splice_at(&mut data, &mut offset, &[]);
        assert_eq!(data, [0xAA, 0xBB]);
        assert_eq!(offset, 1);
    }

    #[test]
    fn round_trip_consistency() {
        const VALUE_U32: u32 = 0x12345678;
        const VALUE_I32: i32 = -12345;
        const VALUE_F32: f32 = 3.14159;

        for order in [ByteOrder::Big, ByteOrder::Little] {
            let mut data = Vec::new();
            let mut offset = 0;
            write_at(&mut data, &mut offset, VALUE_U32, order);
            write_at(&mut data, &mut offset, VALUE_I32, order);
            write_at(&mut data, &mut offset, VALUE_F32, order);

            offset = 0;
            assert_eq!(read_at::<u32>(&data, &mut offset, order).unwrap(), VALUE_U32);
            assert_eq!(read_at::<i32>(&data, &mut offset, order).unwrap(), VALUE_I32);
            assert_eq!(read_at::<f32>(&data, &mut offset, order).unwrap(), VALUE_F32);
        }
    }
}
