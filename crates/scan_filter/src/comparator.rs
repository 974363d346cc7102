//! Byte-array comparators embedded in compare-based filters.
//!
//! Every comparator's legacy form opens with the same header: the
//! version-dependent `WritableByteArrayComparable` class code, a
//! [`NO_CODE`](crate::legacy::NO_CODE) marker, and the comparator's class
//! name. The variant payload follows.

use core::fmt;

use bytes::{BufMut, Bytes};

use crate::encode::{WireEncode, encode_record};
use crate::error::EncodeError;
use crate::legacy;
use crate::structured;
use crate::version::ServerVersion;

/// Charset name a [`RegexStringComparator`] declares unless told otherwise.
pub const DEFAULT_CHARSET: &str = "ISO-8859-1";

/// Pattern flags sent with every regex comparator.
pub const PATTERN_FLAGS: i32 = 0;

const fn comparable_header_size(name: &str) -> usize {
    1 + 1 + legacy::type_name_size(name)
}

fn put_comparable_header<B: BufMut + ?Sized>(
    buf: &mut B,
    version: ServerVersion,
    name: &'static str,
) {
    buf.put_u8(version.writable_byte_array_comparable_code());
    buf.put_u8(legacy::NO_CODE);
    legacy::put_type_name(buf, name);
}

/// Lexicographically compares against a byte array.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryComparator {
    value: Bytes,
}

impl BinaryComparator {
    /// Server class name.
    pub const NAME: &'static str = "org.apache.hadoop.hbase.filter.BinaryComparator";

    /// Creates a comparator matching against `value`.
    #[must_use]
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the value compared against.
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl WireEncode for BinaryComparator {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn to_structured(&self) -> Bytes {
        encode_record(&structured::BinaryComparator {
            comparable: Some(structured::ByteArrayComparable {
                value: Some(self.value.clone()),
            }),
        })
    }

    fn legacy_size(&self, _version: ServerVersion) -> usize {
        comparable_header_size(Self::NAME) + legacy::byte_array_size(&self.value)
    }

    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        put_comparable_header(buf, version, Self::NAME);
        legacy::put_byte_array(buf, &self.value)
    }
}

impl fmt::Display for BinaryComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryComparator({})", self.value.escape_ascii())
    }
}

/// Matches cells against a regular expression evaluated by the server.
///
/// The declared charset tells the server how to decode cell bytes before
/// matching. Pattern and charset name are always sent as UTF-8 text in the
/// legacy encoding, whatever the declared charset is.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegexStringComparator {
    pattern: String,
    #[cfg_attr(feature = "serde", serde(default = "default_charset"))]
    charset: String,
}

#[cfg(feature = "serde")]
fn default_charset() -> String {
    DEFAULT_CHARSET.to_owned()
}

impl RegexStringComparator {
    /// Server class name.
    pub const NAME: &'static str = "org.apache.hadoop.hbase.filter.RegexStringComparator";

    /// Creates a comparator declaring [`DEFAULT_CHARSET`].
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_charset(pattern, DEFAULT_CHARSET)
    }

    /// Creates a comparator declaring the charset named `charset`.
    ///
    /// The name is passed to the server verbatim.
    #[must_use]
    pub fn with_charset(pattern: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            charset: charset.into(),
        }
    }

    /// Creates a comparator declaring the canonical name of `encoding`.
    #[cfg(feature = "charset")]
    #[must_use]
    pub fn with_encoding(
        pattern: impl Into<String>,
        encoding: &'static encoding_rs::Encoding,
    ) -> Self {
        Self::with_charset(pattern, encoding.name())
    }

    /// Returns the regular expression.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the declared charset name.
    #[must_use]
    pub fn charset(&self) -> &str {
        &self.charset
    }
}

impl WireEncode for RegexStringComparator {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn to_structured(&self) -> Bytes {
        encode_record(&structured::RegexStringComparator {
            pattern: self.pattern.clone(),
            pattern_flags: PATTERN_FLAGS,
            charset: self.charset.clone(),
        })
    }

    fn legacy_size(&self, _version: ServerVersion) -> usize {
        comparable_header_size(Self::NAME)
            + legacy::short_bytes_size(self.pattern.as_bytes())
            + legacy::short_bytes_size(self.charset.as_bytes())
    }

    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        put_comparable_header(buf, version, Self::NAME);
        legacy::put_short_bytes(buf, "regex pattern", self.pattern.as_bytes())?;
        legacy::put_short_bytes(buf, "regex charset", self.charset.as_bytes())
    }
}

impl fmt::Display for RegexStringComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegexStringComparator(pattern={:?}, charset={})",
            self.pattern, self.charset
        )
    }
}

/// Every comparator a compare-based filter can carry.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Comparator {
    /// See [`BinaryComparator`].
    Binary(BinaryComparator),
    /// See [`RegexStringComparator`].
    RegexString(RegexStringComparator),
}

impl Comparator {
    /// Builds the structured envelope naming this comparator.
    #[must_use]
    pub fn to_envelope(&self) -> structured::Comparator {
        structured::Comparator {
            name: self.type_name().to_owned(),
            serialized_comparator: Some(self.to_structured()),
        }
    }
}

impl WireEncode for Comparator {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Binary(c) => c.type_name(),
            Self::RegexString(c) => c.type_name(),
        }
    }

    fn to_structured(&self) -> Bytes {
        match self {
            Self::Binary(c) => c.to_structured(),
            Self::RegexString(c) => c.to_structured(),
        }
    }

    fn legacy_size(&self, version: ServerVersion) -> usize {
        match self {
            Self::Binary(c) => c.legacy_size(version),
            Self::RegexString(c) => c.legacy_size(version),
        }
    }

    fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        match self {
            Self::Binary(c) => c.encode_legacy(version, buf),
            Self::RegexString(c) => c.encode_legacy(version, buf),
        }
    }
}

impl From<BinaryComparator> for Comparator {
    fn from(comparator: BinaryComparator) -> Self {
        Self::Binary(comparator)
    }
}

impl From<RegexStringComparator> for Comparator {
    fn from(comparator: RegexStringComparator) -> Self {
        Self::RegexString(comparator)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(c) => fmt::Display::fmt(c, f),
            Self::RegexString(c) => fmt::Display::fmt(c, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    const BINARY_NAME_LEN: u8 = 47;
    const REGEX_NAME_LEN: u8 = 52;

    #[test]
    fn class_name_lengths() {
        assert_eq!(BinaryComparator::NAME.len(), BINARY_NAME_LEN as usize);
        assert_eq!(RegexStringComparator::NAME.len(), REGEX_NAME_LEN as usize);
    }

    #[test]
    fn binary_legacy_layout() {
        let comparator = BinaryComparator::new(&b"abc"[..]);
        let bytes = comparator
            .encode_legacy_to_bytes(ServerVersion::V092_OR_ABOVE)
            .unwrap();

        let mut expected = vec![0x35, 0x00, BINARY_NAME_LEN];
        expected.extend_from_slice(BinaryComparator::NAME.as_bytes());
        expected.extend_from_slice(&[0x8E, 0x00, 0x03]);
        expected.extend_from_slice(b"abc");
        assert_eq!(&bytes[..], &expected[..]);
    }

    #[test]
    fn kind_byte_follows_server_version() {
        let comparator = BinaryComparator::new(&b"x"[..]);
        let old = comparator
            .encode_legacy_to_bytes(ServerVersion::V090_AND_BEFORE)
            .unwrap();
        let new = comparator
            .encode_legacy_to_bytes(ServerVersion::V092_OR_ABOVE)
            .unwrap();
        assert_eq!(old[0], 0x34);
        assert_eq!(new[0], 0x35);
        assert_eq!(old[1..], new[1..]);
    }

    #[test]
    fn binary_structured_wraps_value_in_comparable() {
        let record = structured::BinaryComparator::decode(
            BinaryComparator::new(&b"abc"[..]).to_structured(),
        )
        .unwrap();
        let value = record.comparable.and_then(|c| c.value).unwrap();
        assert_eq!(&value[..], b"abc");
    }

    #[test]
    fn regex_legacy_layout() {
        let comparator = RegexStringComparator::new("ab.*");
        let bytes = comparator
            .encode_legacy_to_bytes(ServerVersion::V090_AND_BEFORE)
            .unwrap();

        let mut expected = vec![0x34, 0x00, REGEX_NAME_LEN];
        expected.extend_from_slice(RegexStringComparator::NAME.as_bytes());
        expected.extend_from_slice(b"\x00\x04ab.*");
        expected.extend_from_slice(b"\x00\x0aISO-8859-1");
        assert_eq!(&bytes[..], &expected[..]);
    }

    #[test]
    fn regex_legacy_text_is_utf8_whatever_the_declared_charset() {
        let comparator = RegexStringComparator::with_charset("caf\u{e9}", "UTF-16");
        let bytes = comparator
            .encode_legacy_to_bytes(ServerVersion::V092_OR_ABOVE)
            .unwrap();

        let payload = &bytes[comparable_header_size(RegexStringComparator::NAME)..];
        assert_eq!(payload, b"\x00\x05caf\xc3\xa9\x00\x06UTF-16");
    }

    #[test]
    fn regex_structured_fields() {
        let comparator = RegexStringComparator::with_charset("^row-[0-9]+$", "UTF-8");
        let record =
            structured::RegexStringComparator::decode(comparator.to_structured()).unwrap();
        assert_eq!(record.pattern, "^row-[0-9]+$");
        assert_eq!(record.pattern_flags, 0);
        assert_eq!(record.charset, "UTF-8");
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let comparator = RegexStringComparator::new("a".repeat(legacy::MAX_SHORT_LEN + 1));
        let err = comparator
            .encode_legacy_to_bytes(ServerVersion::V092_OR_ABOVE)
            .unwrap_err();
        assert_eq!(err.oversized_field(), Some("regex pattern"));
    }

    #[test]
    fn enum_dispatch_matches_variants() {
        let binary = BinaryComparator::new(&b"v"[..]);
        let wrapped = Comparator::from(binary.clone());
        let version = ServerVersion::V092_OR_ABOVE;

        assert_eq!(wrapped.type_name(), BinaryComparator::NAME);
        assert_eq!(wrapped.legacy_size(version), binary.legacy_size(version));
        assert_eq!(
            wrapped.encode_legacy_to_bytes(version).unwrap(),
            binary.encode_legacy_to_bytes(version).unwrap()
        );
        assert_eq!(wrapped.to_structured(), binary.to_structured());
    }

    #[test]
    fn envelope_names_comparator() {
        let envelope = Comparator::from(RegexStringComparator::new("x")).to_envelope();
        assert_eq!(envelope.name, RegexStringComparator::NAME);
        assert!(envelope.serialized_comparator.is_some());
    }

    #[test]
    fn display_renders_payload() {
        assert_eq!(
            BinaryComparator::new(&b"a\x01"[..]).to_string(),
            "BinaryComparator(a\\x01)"
        );
        assert_eq!(
            RegexStringComparator::new("a+").to_string(),
            "RegexStringComparator(pattern=\"a+\", charset=ISO-8859-1)"
        );
    }

    #[cfg(feature = "charset")]
    #[test]
    fn encoding_contributes_canonical_name() {
        let comparator = RegexStringComparator::with_encoding("x", encoding_rs::UTF_16BE);
        assert_eq!(comparator.charset(), "UTF-16BE");
    }
}
