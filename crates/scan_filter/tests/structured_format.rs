//! Structured (protobuf) records as a 0.95+ region server decodes them.
//!
//! Every test decodes the produced bytes with the schema records rather than
//! comparing raw bytes, mirroring what the server does on receipt.

use prost::Message;
use scan_filter::structured::{self, CompareType};
use scan_filter::{
    BinaryComparator, ColumnPaginationFilter, CompareOp, FirstKeyOnlyFilter, KeyOnlyFilter,
    QualifierFilter, RegexStringComparator, RowFilter, ScanFilter, ServerVersion, WireEncode,
};

// ============================================================================
// Envelopes
// ============================================================================

#[test]
fn encode_for_structured_server_wraps_record_in_filter_envelope() {
    let filter = ScanFilter::from(ColumnPaginationFilter::by_offset(10, 5));
    let bytes = filter.encode_for(ServerVersion::V095_OR_ABOVE).unwrap();

    let envelope = structured::Filter::decode(bytes).unwrap();
    assert_eq!(envelope.name, ColumnPaginationFilter::NAME);

    let record =
        structured::ColumnPaginationFilter::decode(envelope.serialized_filter.unwrap()).unwrap();
    assert_eq!(record.limit, 10);
    assert_eq!(record.offset, Some(5));
    assert_eq!(record.column_offset, None);
}

#[test]
fn legacy_versions_never_receive_the_envelope() {
    let filter = ScanFilter::from(KeyOnlyFilter::new());
    for version in [ServerVersion::V090_AND_BEFORE, ServerVersion::V092_OR_ABOVE] {
        let bytes = filter.encode_for(version).unwrap();
        assert_eq!(bytes, filter.encode_legacy_to_bytes(version).unwrap());
    }
}

// ============================================================================
// Filter records
// ============================================================================

#[test]
fn bookmark_pagination_sends_column_offset_only() {
    let filter = ColumnPaginationFilter::by_column_offset(25, &b"qual-17"[..]);
    let record = structured::ColumnPaginationFilter::decode(filter.to_structured()).unwrap();

    assert_eq!(record.limit, 25);
    assert_eq!(record.offset, None);
    assert_eq!(record.column_offset.as_deref(), Some(&b"qual-17"[..]));
}

#[test]
fn key_only_flag_survives_decoding() {
    for len_as_val in [false, true] {
        let filter = KeyOnlyFilter::with_len_as_val(len_as_val);
        let record = structured::KeyOnlyFilter::decode(filter.to_structured()).unwrap();
        assert_eq!(record.len_as_val, len_as_val);
    }
}

#[test]
fn first_key_only_has_an_empty_record() {
    let envelope = ScanFilter::from(FirstKeyOnlyFilter::new()).to_envelope();
    assert_eq!(envelope.name, FirstKeyOnlyFilter::NAME);
    assert_eq!(envelope.serialized_filter.as_deref(), Some(&[][..]));
}

#[test]
fn qualifier_filter_nests_compare_record_and_comparator_envelope() {
    let filter = QualifierFilter::new(CompareOp::GreaterOrEqual, BinaryComparator::new(&b"c1"[..]));
    let record = structured::QualifierFilter::decode(filter.to_structured()).unwrap();

    let compare = record.compare_filter.unwrap();
    assert_eq!(
        CompareType::try_from(compare.compare_op).ok(),
        Some(CompareType::GreaterOrEqual)
    );

    let envelope = compare.comparator.unwrap();
    assert_eq!(envelope.name, BinaryComparator::NAME);

    let comparator =
        structured::BinaryComparator::decode(envelope.serialized_comparator.unwrap()).unwrap();
    let value = comparator.comparable.and_then(|c| c.value).unwrap();
    assert_eq!(&value[..], b"c1");
}

#[test]
fn regex_comparator_record_carries_pattern_flags_and_charset() {
    let filter = RowFilter::new(
        CompareOp::Equal,
        RegexStringComparator::new("^user-[0-9]+$"),
    );
    let record = structured::RowFilter::decode(filter.to_structured()).unwrap();
    let envelope = record.compare_filter.and_then(|c| c.comparator).unwrap();
    assert_eq!(envelope.name, RegexStringComparator::NAME);

    let regex =
        structured::RegexStringComparator::decode(envelope.serialized_comparator.unwrap()).unwrap();
    assert_eq!(regex.pattern, "^user-[0-9]+$");
    assert_eq!(regex.pattern_flags, scan_filter::PATTERN_FLAGS);
    assert_eq!(regex.charset, scan_filter::DEFAULT_CHARSET);
}
