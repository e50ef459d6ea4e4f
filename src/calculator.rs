//! The attack rating calculator.
//!
//! `ArmamentCalculator` is a cheap, short-lived view over `BalanceData`
//! bound to one weapon at one affinity and upgrade level. Its only mutable
//! state is that (affinity, level) pair, replaceable through validating
//! setters; every query is a pure read of the tables plus caller-supplied
//! attributes. One calculator belongs to one logical session; share the
//! `BalanceData`, not the calculator.

use crate::armament::{AffinityVariant, ArmamentDefinition, ReinforcementRow};
use crate::attribute::{Attribute, Attributes};
use crate::balance::BalanceData;
use crate::correction::CorrectionTable;
use crate::error::RatingError;
use crate::types::{DamageMap, DamageType, ScalingGrade, StatusMap, StatusType};
use serde::{Deserialize, Serialize};

/// Truncate a computed value to a non-negative integer total.
fn floor_total(value: f64) -> u32 {
    value.max(0.0).floor() as u32
}

/// One damage or status entry: flat base, attribute scaling bonus, and the
/// truncated display total.
///
/// # Examples
///
/// ```rust
/// use arcalc::Breakdown;
///
/// let entry = Breakdown::new(100.0, 50.4);
/// assert_eq!(entry.total, 150);
///
/// // Negative sums clamp to zero rather than underflowing.
/// let entry = Breakdown::new(10.0, -25.0);
/// assert_eq!(entry.total, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    /// Reinforced base value.
    pub base: f64,
    /// Attribute scaling bonus.
    pub scaling: f64,
    /// `floor(max(0, base + scaling))`.
    pub total: u32,
}

impl Breakdown {
    /// Create a breakdown, deriving the truncated total.
    pub fn new(base: f64, scaling: f64) -> Self {
        Self {
            base,
            scaling,
            total: floor_total(base + scaling),
        }
    }
}

/// Attack power per damage type plus the synthesized aggregate.
///
/// The aggregate's `base` and `scaling` are element-wise sums of the five
/// per-type entries, and its `total` is the sum of their truncated totals; it
/// is never independently recomputed, so it stays consistent with what a
/// per-type display shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackRating {
    /// Per-damage-type breakdowns.
    pub types: DamageMap<Breakdown>,
    /// Element-wise sum across the five damage types.
    pub total: Breakdown,
}

/// A rating view over one weapon of a `BalanceData` ruleset.
///
/// Binding resolves the armament, affinity variant, reinforcement sequence,
/// and correction table once; queries then run without fallible lookups.
#[derive(Debug)]
pub struct ArmamentCalculator<'a> {
    data: &'a BalanceData,
    key: String,
    affinity: String,
    level: usize,
    armament: &'a ArmamentDefinition,
    variant: &'a AffinityVariant,
    rows: &'a [ReinforcementRow],
    correction: &'a CorrectionTable,
}

impl<'a> ArmamentCalculator<'a> {
    /// Bind a calculator to a weapon key at an initial affinity and level.
    ///
    /// Fails with `UnknownWeapon`, `UnknownAffinity`, or `LevelOutOfRange`
    /// if any part of the selection is invalid for this ruleset.
    pub fn new(
        data: &'a BalanceData,
        key: &str,
        affinity: &str,
        level: i32,
    ) -> Result<Self, RatingError> {
        let armament = data
            .armaments
            .get(key)
            .ok_or_else(|| RatingError::UnknownWeapon(key.to_owned()))?;
        let (variant, rows, correction) = Self::bind(data, key, armament, affinity)?;
        let level = checked_level(armament, level)?;

        Ok(Self {
            data,
            key: key.to_owned(),
            affinity: affinity.to_owned(),
            level,
            armament,
            variant,
            rows,
            correction,
        })
    }

    /// Resolve the references governing one affinity of an armament.
    fn bind(
        data: &'a BalanceData,
        key: &str,
        armament: &'a ArmamentDefinition,
        name: &str,
    ) -> Result<(&'a AffinityVariant, &'a [ReinforcementRow], &'a CorrectionTable), RatingError>
    {
        let variant = armament
            .affinities
            .get(name)
            .ok_or_else(|| RatingError::UnknownAffinity {
                weapon: key.to_owned(),
                name: name.to_owned(),
            })?;
        let rows = data.reinforcement_rows(variant.reinforcement_id)?;
        let correction = data.correction_table(variant.correction_id)?;
        Ok((variant, rows, correction))
    }

    /// Rebind to another of the weapon's affinity variants.
    ///
    /// Fails with `UnknownAffinity` and leaves the current selection
    /// untouched if the name is not defined for this weapon. Idempotent when
    /// the name is unchanged.
    pub fn set_affinity(&mut self, name: &str) -> Result<(), RatingError> {
        let (variant, rows, correction) = Self::bind(self.data, &self.key, self.armament, name)?;
        self.variant = variant;
        self.rows = rows;
        self.correction = correction;
        self.affinity = name.to_owned();
        Ok(())
    }

    /// Rebind to another upgrade level.
    ///
    /// Fails with `LevelOutOfRange` for negative levels and levels beyond
    /// the weapon's maximum, leaving the current selection untouched.
    pub fn set_level(&mut self, level: i32) -> Result<(), RatingError> {
        self.level = checked_level(self.armament, level)?;
        Ok(())
    }

    /// The bound weapon key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The currently selected affinity name.
    pub fn affinity(&self) -> &str {
        &self.affinity
    }

    /// The currently selected upgrade level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The weapon's maximum upgrade level.
    pub fn max_level(&self) -> usize {
        self.armament.max_level()
    }

    /// The bound armament definition.
    pub fn armament(&self) -> &ArmamentDefinition {
        self.armament
    }

    fn row(&self) -> &ReinforcementRow {
        // Level is validated against max_level, and BalanceData guarantees
        // max_level + 1 rows.
        &self.rows[self.level]
    }

    /// Summed attribute contributions at the current level, restricted to
    /// the given attributes. Zero-rate attributes contribute nothing
    /// regardless of their value.
    fn scaling_pool(&self, attributes: &Attributes, over: &[Attribute]) -> f64 {
        let row = self.row();
        let mut pool = 0.0;

        for &attribute in over {
            let rate = *self.variant.scaling.get(attribute);
            if rate <= 0.0 {
                continue;
            }

            // Both lookups are guaranteed by BalanceData validation for any
            // attribute with a nonzero rate.
            if let Some(entry) = self.correction.entry(attribute) {
                if let Ok(curve) = self.data.curve(entry.curve) {
                    let contribution = entry.contribution(curve, attributes.get(attribute));
                    pool += rate * row.scaling.get(attribute) * contribution / 100.0;
                }
            }
        }

        pool
    }

    /// Attack power per damage type for the given attributes, plus the
    /// aggregate entry summing the five types.
    pub fn attack_power(&self, attributes: &Attributes) -> AttackRating {
        let row = self.row();
        let pool = self.scaling_pool(attributes, &Attribute::ALL);

        let types = DamageMap::from_fn(|ty| {
            let base = self.variant.attack[ty] * row.attack[ty];
            Breakdown::new(base, base * pool)
        });

        let mut total = Breakdown::default();
        for (_, entry) in types.iter() {
            total.base += entry.base;
            total.scaling += entry.scaling;
            total.total += entry.total;
        }

        AttackRating { types, total }
    }

    /// Status buildup per status effect for the given attributes.
    ///
    /// Status scaling draws on arcane alone; there is no aggregate row.
    pub fn status_effects(&self, attributes: &Attributes) -> StatusMap<Breakdown> {
        let row = self.row();
        let pool = self.scaling_pool(attributes, &[Attribute::Arcane]);

        StatusMap::from_fn(|ty| {
            let base = self.variant.effects[ty] * row.effect[ty];
            Breakdown::new(base, base * pool)
        })
    }

    /// Guard absorption for one damage type at the current level.
    pub fn guard_absorption(&self, ty: DamageType) -> u32 {
        floor_total(self.variant.guard[ty] * self.row().guard[ty])
    }

    /// Guard boost at the current level.
    pub fn guard_boost(&self) -> u32 {
        floor_total(self.variant.guard_boost * self.row().guard_boost)
    }

    /// Resistance against one status effect at the current level.
    pub fn resistance(&self, ty: StatusType) -> u32 {
        floor_total(self.variant.resistance[ty] * self.row().resistance[ty])
    }

    /// Letter grade of an attribute's effective scaling rate at the current
    /// level. Purely a presentation aid.
    pub fn attribute_scaling_grade(&self, attribute: Attribute) -> ScalingGrade {
        ScalingGrade::from_rate(
            self.variant.scaling.get(attribute) * self.row().scaling.get(attribute),
        )
    }

    /// Whether a player value satisfies the weapon's requirement for an
    /// attribute (unlisted requirements are zero).
    pub fn requirement_met(&self, attribute: Attribute, player_value: u32) -> bool {
        player_value >= self.armament.requirement(attribute)
    }
}

fn checked_level(armament: &ArmamentDefinition, level: i32) -> Result<usize, RatingError> {
    let max = armament.max_level();
    if level < 0 || level as usize > max {
        return Err(RatingError::LevelOutOfRange {
            level,
            max: max as u32,
        });
    }
    Ok(level as usize)
}
