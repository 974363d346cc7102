//! Comparison operators and the compare record shared by compare-based filters.

use core::fmt;
use core::str::FromStr;

use bytes::BufMut;

use crate::comparator::Comparator;
use crate::encode::WireEncode;
use crate::error::{EncodeError, ParseCompareOpError};
use crate::legacy;
use crate::structured::{self, CompareType};
use crate::version::ServerVersion;

/// Comparison operator applied between a cell component and a comparator.
///
/// The legacy encoding sends the symbolic name, never the ordinal, so the
/// wire value does not depend on declaration order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CompareOp {
    /// less than
    Less,
    /// less than or equal to
    LessOrEqual,
    /// equals
    Equal,
    /// not equal
    NotEqual,
    /// greater than or equal to
    GreaterOrEqual,
    /// greater than
    Greater,
    /// no operation
    NoOp,
}

impl CompareOp {
    /// All operators in declaration order.
    pub const ALL: [CompareOp; 7] = [
        CompareOp::Less,
        CompareOp::LessOrEqual,
        CompareOp::Equal,
        CompareOp::NotEqual,
        CompareOp::GreaterOrEqual,
        CompareOp::Greater,
        CompareOp::NoOp,
    ];

    /// Returns the symbolic name sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "LESS",
            Self::LessOrEqual => "LESS_OR_EQUAL",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::GreaterOrEqual => "GREATER_OR_EQUAL",
            Self::Greater => "GREATER",
            Self::NoOp => "NO_OP",
        }
    }

    /// Returns the matching structured enumeration value.
    #[must_use]
    pub const fn compare_type(self) -> CompareType {
        match self {
            Self::Less => CompareType::Less,
            Self::LessOrEqual => CompareType::LessOrEqual,
            Self::Equal => CompareType::Equal,
            Self::NotEqual => CompareType::NotEqual,
            Self::GreaterOrEqual => CompareType::GreaterOrEqual,
            Self::Greater => CompareType::Greater,
            Self::NoOp => CompareType::NoOp,
        }
    }
}

impl FromStr for CompareOp {
    type Err = ParseCompareOpError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| ParseCompareOpError::new(name))
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operator applied against an owned comparator.
///
/// Compare-based filters hold one by value and delegate to it after writing
/// their own class-name header.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareFilter {
    op: CompareOp,
    comparator: Comparator,
}

impl CompareFilter {
    /// Couples `op` with `comparator`.
    #[must_use]
    pub fn new(op: CompareOp, comparator: impl Into<Comparator>) -> Self {
        Self {
            op,
            comparator: comparator.into(),
        }
    }

    /// Returns the operator.
    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    /// Returns the comparator.
    #[must_use]
    pub const fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Builds the structured compare record.
    #[must_use]
    pub fn to_structured(&self) -> structured::CompareFilter {
        structured::CompareFilter {
            compare_op: self.op.compare_type().into(),
            comparator: Some(self.comparator.to_envelope()),
        }
    }

    /// Size of the legacy encoding: the `u16`-prefixed operator name plus the
    /// comparator.
    #[must_use]
    pub fn legacy_size(&self, version: ServerVersion) -> usize {
        legacy::short_bytes_size(self.op.as_str().as_bytes()) + self.comparator.legacy_size(version)
    }

    /// Writes the operator name then the comparator's legacy encoding.
    pub fn encode_legacy<B: BufMut + ?Sized>(
        &self,
        version: ServerVersion,
        buf: &mut B,
    ) -> Result<(), EncodeError> {
        legacy::put_short_bytes(buf, "compare operator", self.op.as_str().as_bytes())?;
        self.comparator.encode_legacy(version, buf)
    }
}

impl fmt::Display for CompareFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compareOp={} comparator={}", self.op, self.comparator)
    }
}
