//! Primitives shared by every legacy (`Writable`) filter encoding.
//!
//! The legacy region server instantiates filters and comparators by reading a
//! class name off the wire, so every encoding starts with a one-byte name
//! length followed by the name. The remaining fields are fixed-width
//! big-endian integers, `u16`-prefixed UTF-8 strings, and byte arrays using
//! the RPC layer's length-prefixed convention implemented by
//! [`put_byte_array`].
//!
//! Each writer has a matching size function; encoders add the sizes of the
//! fields they write to produce an exact prediction.

use bytes::BufMut;

use crate::error::EncodeError;

/// Marker written after the comparable class code meaning "this object has no
/// class code, read its class name instead".
pub const NO_CODE: u8 = 0;

/// Bytes [`put_byte_array`] writes ahead of the payload.
pub const BYTE_ARRAY_OVERHEAD: usize = 3;

/// Hadoop vlong length-class marker announcing two big-endian payload bytes.
const VLONG_TWO_BYTES: u8 = 0x8E;

/// Longest payload a `u16` length prefix can describe.
pub const MAX_SHORT_LEN: usize = u16::MAX as usize;

/// Size of a class-name header written by [`put_type_name`].
#[must_use]
#[inline]
pub const fn type_name_size(name: &str) -> usize {
    1 + name.len()
}

/// Writes a one-byte length followed by the class name.
///
/// Class names are protocol constants well below 256 bytes.
#[inline]
pub fn put_type_name<B: BufMut + ?Sized>(buf: &mut B, name: &'static str) {
    debug_assert!(name.len() <= u8::MAX as usize, "class name too long: {name}");
    buf.put_u8(name.len() as u8);
    buf.put_slice(name.as_bytes());
}

/// Size of a `u16`-prefixed field written by [`put_short_bytes`].
#[must_use]
#[inline]
pub const fn short_bytes_size(bytes: &[u8]) -> usize {
    2 + bytes.len()
}

/// Writes a big-endian `u16` length followed by `bytes`.
///
/// `field` names the value in the error returned when it does not fit.
pub fn put_short_bytes<B: BufMut + ?Sized>(
    buf: &mut B,
    field: &'static str,
    bytes: &[u8],
) -> Result<(), EncodeError> {
    let len = short_len(field, bytes.len())?;
    buf.put_u16(len);
    buf.put_slice(bytes);
    Ok(())
}

/// Size of a byte array written by [`put_byte_array`].
#[must_use]
#[inline]
pub const fn byte_array_size(bytes: &[u8]) -> usize {
    BYTE_ARRAY_OVERHEAD + bytes.len()
}

/// Writes a length-prefixed byte array.
///
/// The prefix is a Hadoop vlong pinned to its two-byte form: the length-class
/// marker `0x8E` followed by the payload length as a big-endian `u16`. Pinning
/// the width keeps the prefix at [`BYTE_ARRAY_OVERHEAD`] bytes for every
/// payload, which the server's vlong reader accepts for short arrays too.
pub fn put_byte_array<B: BufMut + ?Sized>(buf: &mut B, bytes: &[u8]) -> Result<(), EncodeError> {
    let len = short_len("byte array", bytes.len())?;
    buf.put_u8(VLONG_TWO_BYTES);
    buf.put_u16(len);
    buf.put_slice(bytes);
    Ok(())
}

fn short_len(field: &'static str, len: usize) -> Result<u16, EncodeError> {
    u16::try_from(len).map_err(|_| EncodeError::FieldTooLong {
        field,
        len,
        max: MAX_SHORT_LEN,
    })
}
