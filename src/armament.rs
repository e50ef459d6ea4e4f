//! Static armament records.
//!
//! An `ArmamentDefinition` is one weapon as shipped in the balance tables:
//! display data, attribute requirements, its upgrade-cost sequence, and one
//! `AffinityVariant` per affinity. Reinforcement rows hold the per-level
//! multipliers shared by every weapon in the same upgrade material class.

use crate::attribute::{Attribute, AttributeMap};
use crate::correction::CorrectionId;
use crate::types::{DamageMap, StatusMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a reinforcement group (upgrade material class).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct ReinforcementId(pub u16);

impl fmt::Display for ReinforcementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of a reinforcement sequence, indexed by upgrade level.
///
/// Every field is a multiplier applied to the corresponding base value of an
/// affinity variant: a level's effective value for any quantity is
/// `variant.base * row.multiplier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementRow {
    /// Per-damage-type attack multipliers.
    pub attack: DamageMap<f64>,
    /// Per-status-type effect multipliers.
    pub effect: StatusMap<f64>,
    /// Per-damage-type guard absorption multipliers.
    pub guard: DamageMap<f64>,
    /// Guard boost multiplier.
    pub guard_boost: f64,
    /// Per-status-type resistance multipliers.
    pub resistance: StatusMap<f64>,
    /// Per-attribute scaling multipliers.
    pub scaling: AttributeMap<f64>,
}

impl ReinforcementRow {
    /// A row that leaves every base value unchanged (all multipliers 1.0).
    pub fn neutral() -> Self {
        Self {
            attack: DamageMap::uniform(1.0),
            effect: StatusMap::uniform(1.0),
            guard: DamageMap::uniform(1.0),
            guard_boost: 1.0,
            resistance: StatusMap::uniform(1.0),
            scaling: AttributeMap::uniform(1.0),
        }
    }
}

impl Default for ReinforcementRow {
    fn default() -> Self {
        Self::neutral()
    }
}

/// One affinity of one armament: base values plus scaling rates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AffinityVariant {
    /// Ordering id; affinities display sorted by this value.
    pub id: u8,
    /// Reinforcement group governing level scaling for this variant.
    pub reinforcement_id: ReinforcementId,
    /// Correction group resolving curves and multipliers per attribute.
    pub correction_id: CorrectionId,
    /// Base attack per damage type.
    pub attack: DamageMap<f64>,
    /// Base buildup per status effect.
    pub effects: StatusMap<f64>,
    /// Base guard absorption per damage type.
    pub guard: DamageMap<f64>,
    /// Base guard boost.
    pub guard_boost: f64,
    /// Base resistance per status effect.
    pub resistance: StatusMap<f64>,
    /// Scaling rate per attribute; zero means the variant does not scale on
    /// that attribute at all.
    pub scaling: AttributeMap<f64>,
}

/// Static record for one weapon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArmamentDefinition {
    /// Display name.
    pub name: String,
    /// Icon identifier for presentation adapters.
    pub icon: u32,
    /// Category label for selection filters.
    pub category: String,
    /// Minimum attribute values to wield; absent entries are zero.
    pub requirements: AttributeMap<u32>,
    /// Upgrade cost per level step; the maximum level equals its length.
    pub upgrade_costs: Vec<u32>,
    /// Affinity variants keyed by affinity name.
    pub affinities: HashMap<String, AffinityVariant>,
}

impl ArmamentDefinition {
    /// Maximum upgrade level, derived from the upgrade-cost sequence.
    ///
    /// Levels run `0..=max_level()`, so a reinforcement sequence needs
    /// `max_level() + 1` rows.
    pub fn max_level(&self) -> usize {
        self.upgrade_costs.len()
    }

    /// Minimum value required for an attribute (zero when unlisted).
    pub fn requirement(&self, attribute: Attribute) -> u32 {
        *self.requirements.get(attribute)
    }

    /// Affinity names sorted by variant ordering id.
    pub fn affinity_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self
            .affinities
            .iter()
            .map(|(name, variant)| (variant.id, name.as_str()))
            .collect();
        names.sort();
        names.into_iter().map(|(_, name)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level_from_costs() {
        let armament = ArmamentDefinition {
            upgrade_costs: vec![400, 800, 1200],
            ..ArmamentDefinition::default()
        };
        assert_eq!(armament.max_level(), 3);
    }

    #[test]
    fn test_requirement_defaults_to_zero() {
        let armament = ArmamentDefinition {
            requirements: AttributeMap::default().with(Attribute::Strength, 16),
            ..ArmamentDefinition::default()
        };
        assert_eq!(armament.requirement(Attribute::Strength), 16);
        assert_eq!(armament.requirement(Attribute::Arcane), 0);
    }

    #[test]
    fn test_affinity_names_sorted_by_id() {
        let mut affinities = HashMap::new();
        affinities.insert(
            String::from("Heavy"),
            AffinityVariant {
                id: 1,
                ..AffinityVariant::default()
            },
        );
        affinities.insert(
            String::from("Standard"),
            AffinityVariant {
                id: 0,
                ..AffinityVariant::default()
            },
        );
        affinities.insert(
            String::from("Keen"),
            AffinityVariant {
                id: 2,
                ..AffinityVariant::default()
            },
        );

        let armament = ArmamentDefinition {
            affinities,
            ..ArmamentDefinition::default()
        };
        assert_eq!(armament.affinity_names(), ["Standard", "Heavy", "Keen"]);
    }

    #[test]
    fn test_neutral_row_is_identity() {
        let row = ReinforcementRow::neutral();
        for (_, multiplier) in row.attack.iter() {
            assert_eq!(*multiplier, 1.0);
        }
        assert_eq!(row.guard_boost, 1.0);
    }
}
