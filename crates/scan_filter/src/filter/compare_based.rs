use core::fmt;

use bytes::{BufMut, Bytes};

use crate::compare::{CompareFilter, CompareOp};
use crate::comparator::Comparator;
use crate::encode::{WireEncode, encode_record};
use crate::error::EncodeError;
use crate::legacy;
use crate::structured;
use crate::version::ServerVersion;

/// Declares a filter that applies a [`CompareFilter`] to one component of
/// each cell. All of them share the same shape on the wire: a class-name
/// header followed by the compare record.
macro_rules! declare_compare_filters {
    ($(
        $(#[$doc:meta])*
        $filter:ident => $name:literal;
    )+) => {$(
        $(#[$doc])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $filter {
            compare: CompareFilter,
        }

        impl $filter {
            /// Server class name.
            pub const NAME: &'static str = $name;

            /// Creates a filter matching cells where `op` holds against `comparator`.
            #[must_use]
            pub fn new(op: CompareOp, comparator: impl Into<Comparator>) -> Self {
                Self {
                    compare: CompareFilter::new(op, comparator),
                }
            }

            /// Returns the compare record.
            #[must_use]
            pub const fn compare(&self) -> &CompareFilter {
                &self.compare
            }
        }

        impl From<CompareFilter> for $filter {
            fn from(compare: CompareFilter) -> Self {
                Self { compare }
            }
        }

        impl WireEncode for $filter {
            fn type_name(&self) -> &'static str {
                Self::NAME
            }

            fn to_structured(&self) -> Bytes {
                encode_record(&structured::$filter {
                    compare_filter: Some(self.compare.to_structured()),
                })
            }

            fn legacy_size(&self, version: ServerVersion) -> usize {
                legacy::type_name_size(Self::NAME) + self.compare.legacy_size(version)
            }

            fn encode_legacy<B: BufMut + ?Sized>(
                &self,
                version: ServerVersion,
                buf: &mut B,
            ) -> Result<(), EncodeError> {
                legacy::put_type_name(buf, Self::NAME);
                self.compare.encode_legacy(version, buf)
            }
        }

        impl fmt::Display for $filter {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($filter), self.compare)
            }
        }
    )+};
}

declare_compare_filters! {
    /// Filters on the column qualifier.
    QualifierFilter => "org.apache.hadoop.hbase.filter.QualifierFilter";
    /// Filters on the row key.
    RowFilter => "org.apache.hadoop.hbase.filter.RowFilter";
    /// Filters on the column family.
    FamilyFilter => "org.apache.hadoop.hbase.filter.FamilyFilter";
    /// Filters on the cell value.
    ValueFilter => "org.apache.hadoop.hbase.filter.ValueFilter";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{BinaryComparator, RegexStringComparator};
    use prost::Message;

    #[test]
    fn legacy_form_is_name_header_then_compare_record() {
        let version = ServerVersion::V090_AND_BEFORE;
        let compare = CompareFilter::new(CompareOp::Less, BinaryComparator::new(&b"r"[..]));
        let filter = RowFilter::from(compare.clone());

        let bytes = filter.encode_legacy_to_bytes(version).unwrap();

        let mut expected = Vec::new();
        legacy::put_type_name(&mut expected, RowFilter::NAME);
        compare.encode_legacy(version, &mut expected).unwrap();
        assert_eq!(&bytes[..], &expected[..]);
        assert_eq!(
            filter.legacy_size(version),
            1 + RowFilter::NAME.len() + compare.legacy_size(version)
        );
    }

    #[test]
    fn structured_form_embeds_compare_record() {
        let filter = ValueFilter::new(CompareOp::NotEqual, RegexStringComparator::new("^$"));
        let record = structured::ValueFilter::decode(filter.to_structured()).unwrap();
        assert_eq!(record.compare_filter, Some(filter.compare().to_structured()));
    }

    #[test]
    fn each_filter_declares_its_own_class_name() {
        let names = [
            QualifierFilter::NAME,
            RowFilter::NAME,
            FamilyFilter::NAME,
            ValueFilter::NAME,
        ];
        for name in names {
            assert!(name.starts_with("org.apache.hadoop.hbase.filter."));
        }
        assert_eq!(FamilyFilter::NAME, "org.apache.hadoop.hbase.filter.FamilyFilter");
    }

    #[test]
    fn display_wraps_compare_record() {
        let filter = QualifierFilter::new(CompareOp::Equal, BinaryComparator::new(&b"q"[..]));
        assert_eq!(
            filter.to_string(),
            "QualifierFilter(compareOp=EQUAL comparator=BinaryComparator(q))"
        );
    }
}
