// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # endianbuf
//!
//! A random-access binary buffer for legacy file formats and wire protocols. [`Buffer`] holds an
//! owned byte sequence and a cursor, and reads and writes fixed-width integers, floats and
//! fixed-length string fields in a byte order chosen at construction. Decoded values depend only
//! on the bytes and the declared [`ByteOrder`], never on the host.
//!
//! ## Features
//!
//! - **Both byte orders** - big-endian and little-endian, signed and unsigned, 8 to 64 bits
//! - **Random access** - writes in the middle of the content overwrite in place, writes at the
//!   end append
//! - **Bounds-checked reads** - a read past the end returns [`Error::OutOfBounds`] and leaves the
//!   buffer untouched
//! - **Fixed-length strings** - NUL-padded fields with padding, truncation and trimming
//!
//! ## Quick Start
//!
//! ```rust
//! use endianbuf::{Buffer, ByteOrder};
//!
//! let mut buffer = Buffer::new(ByteOrder::Little);
//! buffer
//!     .write_u16(0x0809)
//!     .write_u16(8)
//!     .write_fixed_string("BIFF", 8);
//!
//! buffer.rewind();
//! assert_eq!(buffer.read_u16()?, 0x0809);
//! let length = buffer.read_u16()?;
//! assert_eq!(buffer.read_fixed_string(length as usize)?, b"BIFF");
//! # Ok::<(), endianbuf::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`buffer`] - the [`Buffer`] type and its cursor semantics
//! - [`io`] - the [`Codec`] trait and offset-based read / write / splice primitives
//! - [`fixed`] - NUL padding and trimming for fixed-length fields
//! - [`ByteOrder`] - byte order configuration
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger.
//! Rejected reads and splice writes are logged at `trace`, zero-filled gaps at `debug`.

#[macro_use]
pub(crate) mod error;

/// Byte order configuration
pub mod order;

/// Endian-explicit codecs and offset-based primitives
///
/// The building blocks [`Buffer`] is made of. Useful on their own when a caller manages its own
/// `Vec<u8>` and offset.
pub mod io;

/// NUL padding and trimming for fixed-length string fields
pub mod fixed;

/// The cursor-based [`Buffer`]
pub mod buffer;

/// `endianbuf` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `endianbuf` Error type
///
/// Only reads fail; see [`Error::OutOfBounds`].
pub use error::Error;

/// Random-access byte buffer with a cursor and fixed byte order.
pub use buffer::Buffer;

/// Byte order of multi-byte values.
pub use order::ByteOrder;

/// Endian-aware conversion trait for the supported primitives.
pub use io::Codec;
