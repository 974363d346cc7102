use core::fmt;

use bytes::{BufMut, Bytes};

use crate::encode::{WireEncode, encode_record};
use crate::error::EncodeError;
use crate::legacy;
use crate::structured;
use crate::version::ServerVersion;

/// Returns only the key part of each cell, dropping values.
///
/// With `len_as_val` set, each value is replaced by its length instead of
/// being emptied.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyOnlyFilter {
    #[cfg_attr(feature = "serde", serde(default))]
    len_as_val: bool,
}

impl KeyOnlyFilter {
    /// Server class name.
    pub const NAME: &'static str = "org.apache.hadoop.hbase.filter.KeyOnlyFilter";

    /// Creates a filter that empties values.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_len_as_val(false)
    }

    /// Creates a filter, replacing values with their length when `len_as_val`.
    #[must_use]
    pub const fn with_len_as_val(len_as_val: bool) -> Self {
        Self { len_as_val }
    }

    /// Reports whether values are replaced by their length.
    #[must_use]
    pub const fn len_as_val(&self) -> bool {
        self.len_as_val
    }
}

impl WireEncode for KeyOnlyFilter {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn to_structured(&self) -> Bytes {
        encode_record(&structured::KeyOnlyFilter {
            len_as_val: self.len_as_val,
        })
    }

    fn legacy_size(&self, _version: ServerVersion) -> usize {
        legacy::type_name_size(Self::NAME) + 1
    }

    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        _version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        legacy::put_type_name(buf, Self::NAME);
        buf.put_u8(u8::from(self.len_as_val));
        Ok(())
    }
}

impl fmt::Display for KeyOnlyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyOnlyFilter({})", self.len_as_val)
    }
}

/// Returns only the first cell of each row.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirstKeyOnlyFilter {}

impl FirstKeyOnlyFilter {
    /// Server class name.
    pub const NAME: &'static str = "org.apache.hadoop.hbase.filter.FirstKeyOnlyFilter";

    /// Creates the filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl WireEncode for FirstKeyOnlyFilter {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn to_structured(&self) -> Bytes {
        encode_record(&structured::FirstKeyOnlyFilter {})
    }

    fn legacy_size(&self, _version: ServerVersion) -> usize {
        legacy::type_name_size(Self::NAME)
    }

    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        _version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        legacy::put_type_name(buf, Self::NAME);
        Ok(())
    }
}

impl fmt::Display for FirstKeyOnlyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FirstKeyOnlyFilter")
    }
}
