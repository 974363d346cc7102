use core::fmt;

use bytes::{BufMut, Bytes};

use crate::encode::{WireEncode, encode_record};
use crate::error::EncodeError;
use crate::legacy;
use crate::structured;
use crate::version::ServerVersion;

/// Offset written by the legacy encoding when the filter has no integer offset.
pub const UNSET_OFFSET: i32 = -1;

/// Where pagination starts.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaginationOffset {
    /// Skip this many columns, found by scanning sequentially.
    Index(i32),
    /// Seek to the first column at or after this qualifier.
    ///
    /// Only servers speaking the structured format understand bookmarks.
    ColumnBookmark(Bytes),
}

/// Returns at most `limit` columns per row, starting at an offset.
///
/// Only the most recent version of each column is counted. When several
/// column families are scanned, the returned columns may span them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnPaginationFilter {
    limit: i32,
    offset: PaginationOffset,
}

impl ColumnPaginationFilter {
    /// Server class name.
    pub const NAME: &'static str = "org.apache.hadoop.hbase.filter.ColumnPaginationFilter";

    /// Paginates by skipping `offset` columns.
    #[must_use]
    pub const fn by_offset(limit: i32, offset: i32) -> Self {
        Self {
            limit,
            offset: PaginationOffset::Index(offset),
        }
    }

    /// Paginates by seeking to the `column_offset` qualifier.
    #[must_use]
    pub fn by_column_offset(limit: i32, column_offset: impl Into<Bytes>) -> Self {
        Self {
            limit,
            offset: PaginationOffset::ColumnBookmark(column_offset.into()),
        }
    }

    /// Returns the column limit.
    #[must_use]
    pub const fn limit(&self) -> i32 {
        self.limit
    }

    /// Returns the pagination start.
    #[must_use]
    pub const fn offset(&self) -> &PaginationOffset {
        &self.offset
    }

    /// Integer offset written by the legacy encoding.
    const fn legacy_offset(&self) -> i32 {
        match self.offset {
            PaginationOffset::Index(offset) => offset,
            PaginationOffset::ColumnBookmark(_) => UNSET_OFFSET,
        }
    }
}

impl WireEncode for ColumnPaginationFilter {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn to_structured(&self) -> Bytes {
        let (offset, column_offset) = match &self.offset {
            PaginationOffset::Index(offset) if *offset >= 0 => (Some(*offset), None),
            PaginationOffset::Index(_) => (None, None),
            PaginationOffset::ColumnBookmark(bookmark) => (None, Some(bookmark.clone())),
        };
        encode_record(&structured::ColumnPaginationFilter {
            limit: self.limit,
            offset,
            column_offset,
        })
    }

    fn legacy_size(&self, _version: ServerVersion) -> usize {
        legacy::type_name_size(Self::NAME) + 4 + 4
    }

    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        _version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        legacy::put_type_name(buf, Self::NAME);
        buf.put_i32(self.limit);
        // bookmarks have no legacy representation
        buf.put_i32(self.legacy_offset());
        Ok(())
    }
}

impl fmt::Display for ColumnPaginationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.offset {
            PaginationOffset::Index(offset) => {
                write!(f, "ColumnPaginationFilter(limit={} offset={offset})", self.limit)
            }
            PaginationOffset::ColumnBookmark(bookmark) => write!(
                f,
                "ColumnPaginationFilter(limit={} columnOffset={})",
                self.limit,
                bookmark.escape_ascii()
            ),
        }
    }
}
