#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! Wire encoding for region server scan filters and comparators.
//!
//! Filters describe server-side row and column predicates attached to a scan
//! or get request. Region servers accept them in one of two incompatible
//! formats, chosen by the version byte the RPC layer negotiated:
//!
//! - **structured**: protobuf records wrapped in a `Filter { name, serialized_filter }`
//!   envelope, spoken by 0.95+ servers;
//! - **legacy**: a length-prefixed `Writable` stream whose first field is the
//!   server-side class name, spoken by 0.90 and 0.92 servers.
//!
//! Every filter and comparator implements [`WireEncode`]. Transports predict
//! the legacy size, allocate exactly that many bytes and encode into them, or
//! simply call [`ScanFilter::encode_for`] and let the server version pick the
//! format.
//!
//! # Examples
//!
//! ```
//! use scan_filter::{
//!     BinaryComparator, CompareOp, QualifierFilter, ScanFilter, ServerVersion, WireEncode,
//! };
//!
//! let filter = ScanFilter::from(QualifierFilter::new(
//!     CompareOp::Equal,
//!     BinaryComparator::new(&b"abc"[..]),
//! ));
//!
//! let version = ServerVersion::V092_OR_ABOVE;
//! let legacy = filter.encode_for(version).expect("filter encodes");
//! assert_eq!(legacy.len(), filter.legacy_size(version));
//! assert_eq!(legacy[0] as usize, QualifierFilter::NAME.len());
//! ```
//!
//! Pagination by column bookmark is only understood by structured servers;
//! legacy servers receive the limit with an unset offset.
//!
//! ```
//! use scan_filter::{ColumnPaginationFilter, UNSET_OFFSET, ServerVersion, WireEncode};
//!
//! let filter = ColumnPaginationFilter::by_column_offset(10, &b"bookmark"[..]);
//! let legacy = filter
//!     .encode_legacy_to_bytes(ServerVersion::V090_AND_BEFORE)
//!     .expect("filter encodes");
//! assert!(legacy.ends_with(&UNSET_OFFSET.to_be_bytes()));
//! ```

mod comparator;
mod compare;
mod encode;
mod error;
mod filter;
pub mod legacy;
pub mod structured;
mod version;

pub use comparator::{
    BinaryComparator, Comparator, DEFAULT_CHARSET, PATTERN_FLAGS, RegexStringComparator,
};
pub use compare::{CompareFilter, CompareOp};
pub use encode::WireEncode;
pub use error::{EncodeError, ParseCompareOpError};
pub use filter::{
    ColumnPaginationFilter, FamilyFilter, FirstKeyOnlyFilter, KeyOnlyFilter, PaginationOffset,
    QualifierFilter, RowFilter, ScanFilter, UNSET_OFFSET, ValueFilter,
};
pub use version::{ServerVersion, WireFormat};
