//! Error types for rating calculations.
//!
//! All failures that can occur while building `BalanceData` or querying a
//! calculator are represented by the `RatingError` enum.

use crate::attribute::Attribute;
use crate::correction::CorrectionId;
use crate::curve::CurveId;
use thiserror::Error;

/// Errors that can occur during table construction or rating queries.
///
/// # Examples
///
/// ```rust
/// use arcalc::{CurveId, RatingError};
///
/// let err = RatingError::UnknownCurve(CurveId(7));
/// println!("{}", err); // "unknown correction curve: 7"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    /// No armament is registered under the given key.
    #[error("unknown armament: {0}")]
    UnknownWeapon(String),

    /// The armament has no affinity variant with the given name.
    #[error("unknown affinity `{name}` for armament `{weapon}`")]
    UnknownAffinity { weapon: String, name: String },

    /// The requested upgrade level is negative or exceeds the armament's
    /// maximum level.
    #[error("upgrade level {level} out of range (max {max})")]
    LevelOutOfRange { level: i32, max: u32 },

    /// No correction table is registered under the given group id.
    #[error("unknown correction group: {0}")]
    UnknownCorrectionGroup(CorrectionId),

    /// The correction group has no entry for the given attribute.
    #[error("correction group {group} has no mapping for {attribute}")]
    UnknownAttributeMapping {
        group: CorrectionId,
        attribute: Attribute,
    },

    /// No breakpoint sequence is registered under the given curve id.
    #[error("unknown correction curve: {0}")]
    UnknownCurve(CurveId),

    /// A referential invariant was violated while constructing `BalanceData`,
    /// or a curve's breakpoint sequence is empty or not strictly increasing.
    ///
    /// This is the only construction-time error; once `BalanceData` exists,
    /// downstream components trust the tables.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// Generic table lookup miss on the `BalanceData` accessor surface.
    #[error("not found: {0}")]
    NotFound(String),

    /// A textual attribute line could not be parsed.
    #[error("malformed attributes: {0}")]
    MalformedAttributes(String),
}
