//! Scan filters and the [`ScanFilter`] sum type transports dispatch over.
//!
//! ## Legacy wire format
//!
//! Every filter starts with its class-name header, followed by fixed fields:
//!
//! | Filter | Fields after the header |
//! |--------|-------------------------|
//! | `ColumnPaginationFilter` | `limit: i32 BE`, `offset: i32 BE` |
//! | `KeyOnlyFilter` | `len_as_val: u8` (`1`/`0`) |
//! | `FirstKeyOnlyFilter` | none |
//! | `QualifierFilter`, `RowFilter`, `FamilyFilter`, `ValueFilter` | `u16` operator name, comparator |
//!
//! ## Structured wire format
//!
//! Each filter fills its schema record; [`ScanFilter::to_envelope`] wraps the
//! encoded record in the `Filter { name, serialized_filter }` envelope the
//! protobuf RPC expects.

mod compare_based;
mod key_only;
mod pagination;

use core::fmt;

use bytes::{BufMut, Bytes};

use crate::encode::{WireEncode, encode_record};
use crate::error::EncodeError;
use crate::structured;
use crate::version::{ServerVersion, WireFormat};

pub use compare_based::{FamilyFilter, QualifierFilter, RowFilter, ValueFilter};
pub use key_only::{FirstKeyOnlyFilter, KeyOnlyFilter};
pub use pagination::{ColumnPaginationFilter, PaginationOffset, UNSET_OFFSET};

/// Every filter this crate can put on the wire.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ScanFilter {
    /// See [`ColumnPaginationFilter`].
    ColumnPagination(ColumnPaginationFilter),
    /// See [`KeyOnlyFilter`].
    KeyOnly(KeyOnlyFilter),
    /// See [`FirstKeyOnlyFilter`].
    FirstKeyOnly(FirstKeyOnlyFilter),
    /// See [`QualifierFilter`].
    Qualifier(QualifierFilter),
    /// See [`RowFilter`].
    Row(RowFilter),
    /// See [`FamilyFilter`].
    Family(FamilyFilter),
    /// See [`ValueFilter`].
    Value(ValueFilter),
}

/// Expands `$body` once per variant with `$f` bound to the inner filter.
macro_rules! dispatch {
    ($self:expr, $f:ident => $body:expr) => {
        match $self {
            ScanFilter::ColumnPagination($f) => $body,
            ScanFilter::KeyOnly($f) => $body,
            ScanFilter::FirstKeyOnly($f) => $body,
            ScanFilter::Qualifier($f) => $body,
            ScanFilter::Row($f) => $body,
            ScanFilter::Family($f) => $body,
            ScanFilter::Value($f) => $body,
        }
    };
}

impl ScanFilter {
    /// Builds the structured `Filter` envelope naming this filter.
    #[must_use]
    pub fn to_envelope(&self) -> structured::Filter {
        structured::Filter {
            name: self.type_name().to_owned(),
            serialized_filter: Some(self.to_structured()),
        }
    }

    /// Encodes the filter in the format a server reporting `version` expects.
    ///
    /// Structured servers receive the encoded envelope; legacy servers receive
    /// the legacy form, sized exactly as predicted.
    pub fn encode_for(&self, version: ServerVersion) -> Result<Bytes, EncodeError> {
        let format = version.wire_format();
        let bytes = match format {
            WireFormat::Structured => encode_record(&self.to_envelope()),
            WireFormat::Legacy => self.encode_legacy_to_bytes(version)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            filter = self.type_name(),
            version = version.as_u8(),
            %format,
            bytes = bytes.len(),
            "encoded scan filter"
        );
        Ok(bytes)
    }
}

impl WireEncode for ScanFilter {
    fn type_name(&self) -> &'static str {
        dispatch!(self, f => f.type_name())
    }

    fn to_structured(&self) -> Bytes {
        dispatch!(self, f => f.to_structured())
    }

    fn legacy_size(&self, version: ServerVersion) -> usize {
        dispatch!(self, f => f.legacy_size(version))
    }

    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        dispatch!(self, f => f.encode_legacy(version, buf))
    }
}

impl fmt::Display for ScanFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, inner => fmt::Display::fmt(inner, f))
    }
}

macro_rules! impl_from_filter {
    ($($filter:ident => $variant:ident),+ $(,)?) => {$(
        impl From<$filter> for ScanFilter {
            fn from(filter: $filter) -> Self {
                Self::$variant(filter)
            }
        }
    )+};
}

impl_from_filter! {
    ColumnPaginationFilter => ColumnPagination,
    KeyOnlyFilter => KeyOnly,
    FirstKeyOnlyFilter => FirstKeyOnly,
    QualifierFilter => Qualifier,
    RowFilter => Row,
    FamilyFilter => Family,
    ValueFilter => Value,
}
