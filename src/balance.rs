//! The immutable balance ruleset.
//!
//! `BalanceData` bundles the four externally supplied lookup tables:
//! armament definitions, reinforcement sequences, correction tables, and
//! correction curves. Construction performs all referential validation up
//! front and fails fast; downstream components trust the data once it exists.
//! After construction the bundle is read-only and can be shared across any
//! number of calculators without synchronization.

use crate::armament::{ArmamentDefinition, ReinforcementId, ReinforcementRow};
use crate::attribute::Attribute;
use crate::correction::{CorrectionEntry, CorrectionId, CorrectionTable};
use crate::curve::{CorrectionCurve, CurveId};
use crate::error::RatingError;
use std::collections::HashMap;

/// Immutable aggregate of the four balance tables.
///
/// # Examples
///
/// ```rust
/// use arcalc::*;
/// use std::collections::HashMap;
///
/// let mut curves = HashMap::new();
/// curves.insert(CurveId(0), CorrectionCurve::from_pairs([(0, 0.0), (99, 100.0)]).unwrap());
///
/// let mut corrections = HashMap::new();
/// corrections.insert(
///     CorrectionId(0),
///     CorrectionTable::default().with(
///         Attribute::Strength,
///         CorrectionEntry { curve: CurveId(0), multiplier: 100.0 },
///     ),
/// );
///
/// let mut reinforcements = HashMap::new();
/// reinforcements.insert(ReinforcementId(0), vec![ReinforcementRow::neutral()]);
///
/// // A weapon with no upgrade levels and a single Standard affinity.
/// let mut affinities = HashMap::new();
/// affinities.insert(String::from("Standard"), AffinityVariant {
///     attack: DamageMap::default().with(DamageType::Physical, 120.0),
///     scaling: AttributeMap::default().with(Attribute::Strength, 0.8),
///     ..AffinityVariant::default()
/// });
/// let mut armaments = HashMap::new();
/// armaments.insert(String::from("Club"), ArmamentDefinition {
///     name: String::from("Club"),
///     affinities,
///     ..ArmamentDefinition::default()
/// });
///
/// let data = BalanceData::new(armaments, reinforcements, corrections, curves).unwrap();
/// assert!(data.armament("Club").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceData {
    pub(crate) armaments: HashMap<String, ArmamentDefinition>,
    pub(crate) reinforcements: HashMap<ReinforcementId, Vec<ReinforcementRow>>,
    pub(crate) corrections: HashMap<CorrectionId, CorrectionTable>,
    pub(crate) curves: HashMap<CurveId, CorrectionCurve>,
}

impl BalanceData {
    /// Build the bundle, checking every referential invariant.
    ///
    /// Fails with `MalformedTable` if:
    /// - a variant references a reinforcement group that is missing or
    ///   shorter than `max_level + 1` rows,
    /// - a variant references a missing correction group, or one that does
    ///   not map every attribute the variant scales on,
    /// - any correction entry references a missing curve.
    ///
    /// No partially valid `BalanceData` is ever returned.
    pub fn new(
        armaments: HashMap<String, ArmamentDefinition>,
        reinforcements: HashMap<ReinforcementId, Vec<ReinforcementRow>>,
        corrections: HashMap<CorrectionId, CorrectionTable>,
        curves: HashMap<CurveId, CorrectionCurve>,
    ) -> Result<Self, RatingError> {
        for (entry_id, table) in &corrections {
            for (attribute, entry) in table.iter() {
                if !curves.contains_key(&entry.curve) {
                    return Err(RatingError::MalformedTable(format!(
                        "correction group {entry_id} maps {attribute} to unknown curve {}",
                        entry.curve
                    )));
                }
            }
        }

        for (key, armament) in &armaments {
            let rows_needed = armament.max_level() + 1;

            for (name, variant) in &armament.affinities {
                let rows = reinforcements.get(&variant.reinforcement_id).ok_or_else(|| {
                    RatingError::MalformedTable(format!(
                        "`{key}` ({name}) references unknown reinforcement group {}",
                        variant.reinforcement_id
                    ))
                })?;

                if rows.len() < rows_needed {
                    return Err(RatingError::MalformedTable(format!(
                        "reinforcement group {} has {} rows, `{key}` ({name}) needs {rows_needed}",
                        variant.reinforcement_id,
                        rows.len()
                    )));
                }

                let table = corrections.get(&variant.correction_id).ok_or_else(|| {
                    RatingError::MalformedTable(format!(
                        "`{key}` ({name}) references unknown correction group {}",
                        variant.correction_id
                    ))
                })?;

                for (attribute, rate) in variant.scaling.iter() {
                    if *rate > 0.0 && table.entry(attribute).is_none() {
                        return Err(RatingError::MalformedTable(format!(
                            "correction group {} does not map {attribute}, \
                             scaled by `{key}` ({name})",
                            variant.correction_id
                        )));
                    }
                }
            }
        }

        Ok(Self {
            armaments,
            reinforcements,
            corrections,
            curves,
        })
    }

    /// Look up an armament definition by key.
    pub fn armament(&self, key: &str) -> Result<&ArmamentDefinition, RatingError> {
        self.armaments
            .get(key)
            .ok_or_else(|| RatingError::NotFound(format!("armament `{key}`")))
    }

    /// Iterate over `(key, definition)` pairs, unordered.
    pub fn armaments(&self) -> impl Iterator<Item = (&str, &ArmamentDefinition)> {
        self.armaments
            .iter()
            .map(|(key, armament)| (key.as_str(), armament))
    }

    /// Look up one reinforcement row by group and level.
    pub fn reinforcement_row(
        &self,
        group: ReinforcementId,
        level: usize,
    ) -> Result<&ReinforcementRow, RatingError> {
        self.reinforcement_rows(group)?
            .get(level)
            .ok_or_else(|| RatingError::NotFound(format!("reinforcement {group} level {level}")))
    }

    /// Look up a full reinforcement sequence.
    pub fn reinforcement_rows(
        &self,
        group: ReinforcementId,
    ) -> Result<&[ReinforcementRow], RatingError> {
        self.reinforcements
            .get(&group)
            .map(Vec::as_slice)
            .ok_or_else(|| RatingError::NotFound(format!("reinforcement group {group}")))
    }

    /// Look up a correction table by group id.
    pub fn correction_table(&self, group: CorrectionId) -> Result<&CorrectionTable, RatingError> {
        self.corrections
            .get(&group)
            .ok_or(RatingError::UnknownCorrectionGroup(group))
    }

    /// Resolve which curve applies to an attribute in a group, and at what
    /// multiplier.
    pub fn correction_rate(
        &self,
        group: CorrectionId,
        attribute: Attribute,
    ) -> Result<&CorrectionEntry, RatingError> {
        self.correction_table(group)?
            .entry(attribute)
            .ok_or(RatingError::UnknownAttributeMapping { group, attribute })
    }

    /// An attribute's effective scaling contribution through a group:
    /// `evaluate(curve, value) * multiplier / 100`.
    pub fn correction_contribution(
        &self,
        group: CorrectionId,
        attribute: Attribute,
        value: u32,
    ) -> Result<f64, RatingError> {
        let entry = self.correction_rate(group, attribute)?;
        let curve = self.curve(entry.curve)?;
        Ok(entry.contribution(curve, value))
    }

    /// Look up a correction curve by id.
    pub fn curve(&self, id: CurveId) -> Result<&CorrectionCurve, RatingError> {
        self.curves.get(&id).ok_or(RatingError::UnknownCurve(id))
    }

    /// Evaluate a registered curve at an attribute value.
    pub fn evaluate_curve(&self, id: CurveId, value: u32) -> Result<f64, RatingError> {
        Ok(self.curve(id)?.evaluate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::armament::AffinityVariant;
    use crate::attribute::AttributeMap;

    fn one_weapon(variant: AffinityVariant, upgrade_costs: Vec<u32>) -> HashMap<String, ArmamentDefinition> {
        let mut affinities = HashMap::new();
        affinities.insert(String::from("Standard"), variant);

        let mut armaments = HashMap::new();
        armaments.insert(
            String::from("Club"),
            ArmamentDefinition {
                name: String::from("Club"),
                upgrade_costs,
                affinities,
                ..ArmamentDefinition::default()
            },
        );
        armaments
    }

    fn linear_curves() -> HashMap<CurveId, CorrectionCurve> {
        let mut curves = HashMap::new();
        curves.insert(
            CurveId(0),
            CorrectionCurve::from_pairs([(0, 0.0), (99, 100.0)]).unwrap(),
        );
        curves
    }

    fn strength_corrections() -> HashMap<CorrectionId, CorrectionTable> {
        let mut corrections = HashMap::new();
        corrections.insert(
            CorrectionId(0),
            CorrectionTable::default().with(
                Attribute::Strength,
                CorrectionEntry {
                    curve: CurveId(0),
                    multiplier: 100.0,
                },
            ),
        );
        corrections
    }

    #[test]
    fn test_missing_reinforcement_group_rejected() {
        let armaments = one_weapon(AffinityVariant::default(), Vec::new());
        let err = BalanceData::new(
            armaments,
            HashMap::new(),
            strength_corrections(),
            linear_curves(),
        )
        .unwrap_err();
        assert!(matches!(err, RatingError::MalformedTable(_)));
    }

    #[test]
    fn test_short_reinforcement_sequence_rejected() {
        // Two upgrade costs means levels 0..=2, needing three rows.
        let armaments = one_weapon(AffinityVariant::default(), vec![100, 200]);
        let mut reinforcements = HashMap::new();
        reinforcements.insert(
            ReinforcementId(0),
            vec![ReinforcementRow::neutral(), ReinforcementRow::neutral()],
        );

        let err = BalanceData::new(
            armaments,
            reinforcements,
            strength_corrections(),
            linear_curves(),
        )
        .unwrap_err();
        assert!(matches!(err, RatingError::MalformedTable(_)));
    }

    #[test]
    fn test_uncovered_scaling_attribute_rejected() {
        let variant = AffinityVariant {
            scaling: AttributeMap::default().with(Attribute::Dexterity, 0.5),
            ..AffinityVariant::default()
        };
        let armaments = one_weapon(variant, Vec::new());
        let mut reinforcements = HashMap::new();
        reinforcements.insert(ReinforcementId(0), vec![ReinforcementRow::neutral()]);

        // Correction group 0 only maps strength.
        let err = BalanceData::new(
            armaments,
            reinforcements,
            strength_corrections(),
            linear_curves(),
        )
        .unwrap_err();
        assert!(matches!(err, RatingError::MalformedTable(_)));
    }

    #[test]
    fn test_dangling_curve_rejected() {
        let mut corrections = HashMap::new();
        corrections.insert(
            CorrectionId(0),
            CorrectionTable::default().with(
                Attribute::Strength,
                CorrectionEntry {
                    curve: CurveId(42),
                    multiplier: 100.0,
                },
            ),
        );

        let err = BalanceData::new(
            HashMap::new(),
            HashMap::new(),
            corrections,
            linear_curves(),
        )
        .unwrap_err();
        assert!(matches!(err, RatingError::MalformedTable(_)));
    }

    #[test]
    fn test_accessor_errors() {
        let mut reinforcements = HashMap::new();
        reinforcements.insert(ReinforcementId(0), vec![ReinforcementRow::neutral()]);
        let data = BalanceData::new(
            one_weapon(AffinityVariant::default(), Vec::new()),
            reinforcements,
            strength_corrections(),
            linear_curves(),
        )
        .unwrap();

        assert!(matches!(
            data.armament("Dagger"),
            Err(RatingError::NotFound(_))
        ));
        assert!(matches!(
            data.reinforcement_row(ReinforcementId(9), 0),
            Err(RatingError::NotFound(_))
        ));
        assert!(matches!(
            data.reinforcement_row(ReinforcementId(0), 1),
            Err(RatingError::NotFound(_))
        ));
        assert_eq!(
            data.correction_table(CorrectionId(5)).unwrap_err(),
            RatingError::UnknownCorrectionGroup(CorrectionId(5))
        );
        assert_eq!(
            data.correction_rate(CorrectionId(0), Attribute::Faith)
                .unwrap_err(),
            RatingError::UnknownAttributeMapping {
                group: CorrectionId(0),
                attribute: Attribute::Faith
            }
        );
        assert_eq!(
            data.curve(CurveId(3)).unwrap_err(),
            RatingError::UnknownCurve(CurveId(3))
        );
    }

    #[test]
    fn test_contribution_through_accessors() {
        let mut reinforcements = HashMap::new();
        reinforcements.insert(ReinforcementId(0), vec![ReinforcementRow::neutral()]);
        let data = BalanceData::new(
            one_weapon(AffinityVariant::default(), Vec::new()),
            reinforcements,
            strength_corrections(),
            linear_curves(),
        )
        .unwrap();

        let contribution = data
            .correction_contribution(CorrectionId(0), Attribute::Strength, 50)
            .unwrap();
        // Linear curve: curve(50) = 5000/99, multiplier 100.
        assert!((contribution - 5000.0 / 99.0).abs() < 1e-9);
    }
}
