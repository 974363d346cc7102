use std::io;

use thiserror::Error;

/// Errors reported while encoding a filter or comparator.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EncodeError {
    /// A length-prefixed field does not fit its prefix.
    #[error("{field} is {len} bytes long, the legacy encoding allows at most {max}")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Actual length in bytes.
        len: usize,
        /// Largest length the prefix can express.
        max: usize,
    },
    /// The predicted legacy size disagrees with the bytes actually written.
    ///
    /// Transports preallocate exactly the predicted size, so a mismatch would
    /// otherwise surface as a truncated or overflowing frame.
    #[error("{name} predicted {predicted} legacy bytes but wrote {written}")]
    SizeMismatch {
        /// Type name of the filter or comparator.
        name: &'static str,
        /// Size returned by `legacy_size`.
        predicted: usize,
        /// Bytes produced by `encode_legacy`.
        written: usize,
    },
}

impl EncodeError {
    /// Returns the name of the field that exceeded its length prefix, if any.
    #[must_use]
    pub const fn oversized_field(&self) -> Option<&'static str> {
        match self {
            Self::FieldTooLong { field, .. } => Some(*field),
            Self::SizeMismatch { .. } => None,
        }
    }

    /// Returns the `(predicted, written)` pair of a size mismatch, if any.
    #[must_use]
    pub const fn size_mismatch(&self) -> Option<(usize, usize)> {
        match self {
            Self::SizeMismatch {
                predicted, written, ..
            } => Some((*predicted, *written)),
            Self::FieldTooLong { .. } => None,
        }
    }
}

impl From<EncodeError> for io::Error {
    fn from(err: EncodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Error returned when parsing a compare operator from its symbolic name fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown compare operator name: \"{invalid_name}\"")]
pub struct ParseCompareOpError {
    invalid_name: String,
}

impl ParseCompareOpError {
    /// Creates a parse error that records the invalid name.
    #[must_use]
    pub fn new(invalid_name: &str) -> Self {
        Self {
            invalid_name: invalid_name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_field_too_long() {
        let err = EncodeError::FieldTooLong {
            field: "regex pattern",
            len: 70_000,
            max: 65_535,
        };
        assert_eq!(
            err.to_string(),
            "regex pattern is 70000 bytes long, the legacy encoding allows at most 65535"
        );
    }

    #[test]
    fn display_size_mismatch() {
        let err = EncodeError::SizeMismatch {
            name: "org.apache.hadoop.hbase.filter.KeyOnlyFilter",
            predicted: 46,
            written: 45,
        };
        assert_eq!(
            err.to_string(),
            "org.apache.hadoop.hbase.filter.KeyOnlyFilter predicted 46 legacy bytes but wrote 45"
        );
    }

    #[test]
    fn accessors_expose_variant_context() {
        let too_long = EncodeError::FieldTooLong {
            field: "byte array",
            len: 70_000,
            max: 65_535,
        };
        assert_eq!(too_long.oversized_field(), Some("byte array"));
        assert_eq!(too_long.size_mismatch(), None);

        let mismatch = EncodeError::SizeMismatch {
            name: "x",
            predicted: 3,
            written: 4,
        };
        assert_eq!(mismatch.oversized_field(), None);
        assert_eq!(mismatch.size_mismatch(), Some((3, 4)));
    }

    #[test]
    fn converts_to_io_error_preserving_kind_and_source() {
        let err = EncodeError::SizeMismatch {
            name: "x",
            predicted: 3,
            written: 4,
        };
        let io_err: io::Error = err.clone().into();

        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);

        let source = io_err
            .get_ref()
            .and_then(|src| src.downcast_ref::<EncodeError>())
            .expect("io::Error must carry EncodeError source");
        assert_eq!(source, &err);
    }

    #[test]
    fn parse_error_keeps_invalid_name() {
        let err = ParseCompareOpError::new("ALMOST_EQUAL");
        assert_eq!(err.invalid_name(), "ALMOST_EQUAL");
        assert_eq!(
            err.to_string(),
            "unknown compare operator name: \"ALMOST_EQUAL\""
        );
    }
}
