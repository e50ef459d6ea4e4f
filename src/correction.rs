//! Correction tables.
//!
//! A correction table resolves, per attribute, which correction curve applies
//! and at what flat multiplier. Tables are keyed by a correction-group id
//! referenced from an affinity variant.

use crate::attribute::{Attribute, AttributeMap};
use crate::curve::{CorrectionCurve, CurveId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a correction group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CorrectionId(pub u16);

impl fmt::Display for CorrectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One attribute's correction rate: which curve applies, and a flat
/// multiplier applied after curve evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub curve: CurveId,
    pub multiplier: f64,
}

impl CorrectionEntry {
    /// Effective scaling contribution of an attribute value through this
    /// entry's curve: `evaluate(curve, value) * multiplier / 100`.
    pub fn contribution(&self, curve: &CorrectionCurve, value: u32) -> f64 {
        curve.evaluate(value) * self.multiplier / 100.0
    }
}

/// Per-attribute correction rates for one correction group.
///
/// Attributes without an entry have no mapping in this group; querying them
/// through `BalanceData` reports `UnknownAttributeMapping`.
///
/// # Examples
///
/// ```rust
/// use arcalc::{Attribute, CorrectionEntry, CorrectionTable, CurveId};
///
/// let table = CorrectionTable::default().with(
///     Attribute::Strength,
///     CorrectionEntry { curve: CurveId(0), multiplier: 100.0 },
/// );
///
/// assert!(table.entry(Attribute::Strength).is_some());
/// assert!(table.entry(Attribute::Faith).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrectionTable {
    entries: AttributeMap<Option<CorrectionEntry>>,
}

impl CorrectionTable {
    /// Get the correction entry for an attribute, if the group maps it.
    pub fn entry(&self, attribute: Attribute) -> Option<&CorrectionEntry> {
        self.entries.get(attribute).as_ref()
    }

    /// Set the correction entry for an attribute.
    pub fn set(&mut self, attribute: Attribute, entry: CorrectionEntry) {
        self.entries.set(attribute, Some(entry));
    }

    /// Builder-style `set`, useful when assembling tables.
    pub fn with(mut self, attribute: Attribute, entry: CorrectionEntry) -> Self {
        self.set(attribute, entry);
        self
    }

    /// Iterate over the attributes this group maps, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &CorrectionEntry)> {
        self.entries
            .iter()
            .filter_map(|(attribute, entry)| entry.as_ref().map(|e| (attribute, e)))
    }
}
