//! The encoding contract shared by filters and comparators.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::EncodeError;
use crate::version::ServerVersion;

/// Encodes a filter or comparator in both wire formats.
///
/// Transports only ever talk to this trait (or to the [`crate::ScanFilter`]
/// and [`crate::Comparator`] sum types that dispatch over it), so a new filter
/// is added by implementing it; nothing downstream branches on concrete
/// types.
///
/// # Size contract
///
/// [`legacy_size`](Self::legacy_size) must return exactly the number of bytes
/// [`encode_legacy`](Self::encode_legacy) writes for the same version.
/// Transports preallocate that many bytes, so any disagreement corrupts the
/// request frame. [`encode_legacy_to_bytes`](Self::encode_legacy_to_bytes)
/// verifies the contract on every call.
pub trait WireEncode {
    /// Returns the fully-qualified class name the server resolves this type by.
    ///
    /// The value is a protocol constant and never derived at runtime.
    fn type_name(&self) -> &'static str;

    /// Returns [`type_name`](Self::type_name) as the bytes put on the wire.
    fn name(&self) -> &'static [u8] {
        self.type_name().as_bytes()
    }

    /// Returns the encoded structured record holding this value's fields.
    ///
    /// The record is not self-describing; callers wrap it in an envelope that
    /// carries [`type_name`](Self::type_name).
    fn to_structured(&self) -> Bytes;

    /// Returns the exact number of bytes
    /// [`encode_legacy`](Self::encode_legacy) writes for `version`.
    fn legacy_size(&self, version: ServerVersion) -> usize;

    /// Writes the legacy encoding into `buf`.
    ///
    /// On error `buf` may hold a partial encoding and must be discarded.
    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError>;

    /// Encodes the legacy form into a buffer of exactly
    /// [`legacy_size`](Self::legacy_size) bytes.
    ///
    /// Returns [`EncodeError::SizeMismatch`] when the prediction and the
    /// encoder disagree.
    fn encode_legacy_to_bytes(&self, version: ServerVersion) -> Result<Bytes, EncodeError> {
        let predicted = self.legacy_size(version);
        let mut buf = BytesMut::with_capacity(predicted);
        self.encode_legacy(version, &mut buf)?;

        let written = buf.len();
        if written != predicted {
            #[cfg(feature = "tracing")]
            tracing::error!(
                name = self.type_name(),
                predicted,
                written,
                "legacy size prediction does not match encoder output"
            );
            return Err(EncodeError::SizeMismatch {
                name: self.type_name(),
                predicted,
                written,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            name = self.type_name(),
            version = version.as_u8(),
            bytes = written,
            "encoded legacy form"
        );
        Ok(buf.freeze())
    }
}

/// Serializes a structured record.
pub(crate) fn encode_record<M: prost::Message>(record: &M) -> Bytes {
    Bytes::from(record.encode_to_vec())
}
