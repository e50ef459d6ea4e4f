//! Fixed damage and status vocabularies.
//!
//! The rating math runs over closed sets of damage types and status effects,
//! so lookups are enum-indexed arrays rather than string-keyed maps. A key
//! miss is unrepresentable by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// The five damage types an armament can deal.
///
/// # Examples
///
/// ```rust
/// use arcalc::DamageType;
///
/// assert_eq!(DamageType::ALL.len(), 5);
/// assert_eq!(DamageType::Lightning.to_string(), "lightning");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magic,
    Fire,
    Lightning,
    Holy,
}

impl DamageType {
    /// Number of damage types.
    pub const COUNT: usize = 5;

    /// All damage types in display order.
    pub const ALL: [DamageType; Self::COUNT] = [
        DamageType::Physical,
        DamageType::Magic,
        DamageType::Fire,
        DamageType::Lightning,
        DamageType::Holy,
    ];

    /// Lowercase display name.
    pub fn as_str(self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magic => "magic",
            DamageType::Fire => "fire",
            DamageType::Lightning => "lightning",
            DamageType::Holy => "holy",
        }
    }

    fn index(self) -> usize {
        match self {
            DamageType::Physical => 0,
            DamageType::Magic => 1,
            DamageType::Fire => 2,
            DamageType::Lightning => 3,
            DamageType::Holy => 4,
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six status effects an armament can inflict.
///
/// # Examples
///
/// ```rust
/// use arcalc::StatusType;
///
/// assert_eq!(StatusType::ALL.len(), 6);
/// assert_eq!(StatusType::ScarletRot.to_string(), "scarlet_rot");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    Bleed,
    Frostbite,
    Poison,
    ScarletRot,
    Sleep,
    Madness,
}

impl StatusType {
    /// Number of status effects.
    pub const COUNT: usize = 6;

    /// All status effects in display order.
    pub const ALL: [StatusType; Self::COUNT] = [
        StatusType::Bleed,
        StatusType::Frostbite,
        StatusType::Poison,
        StatusType::ScarletRot,
        StatusType::Sleep,
        StatusType::Madness,
    ];

    /// Lowercase display name.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusType::Bleed => "bleed",
            StatusType::Frostbite => "frostbite",
            StatusType::Poison => "poison",
            StatusType::ScarletRot => "scarlet_rot",
            StatusType::Sleep => "sleep",
            StatusType::Madness => "madness",
        }
    }

    fn index(self) -> usize {
        match self {
            StatusType::Bleed => 0,
            StatusType::Frostbite => 1,
            StatusType::Poison => 2,
            StatusType::ScarletRot => 3,
            StatusType::Sleep => 4,
            StatusType::Madness => 5,
        }
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse letter classification of an effective scaling rate.
///
/// A presentation aid, independent of the attack power formula. `None`
/// displays as `-`.
///
/// # Examples
///
/// ```rust
/// use arcalc::ScalingGrade;
///
/// assert_eq!(ScalingGrade::from_rate(1.8), ScalingGrade::S);
/// assert_eq!(ScalingGrade::from_rate(0.3), ScalingGrade::D);
/// assert_eq!(ScalingGrade::from_rate(0.0), ScalingGrade::None);
/// assert_eq!(ScalingGrade::None.to_string(), "-");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalingGrade {
    S,
    A,
    B,
    C,
    D,
    E,
    None,
}

impl ScalingGrade {
    /// Classify an effective scaling rate against the fixed thresholds.
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 1.75 {
            ScalingGrade::S
        } else if rate >= 1.4 {
            ScalingGrade::A
        } else if rate >= 0.9 {
            ScalingGrade::B
        } else if rate >= 0.6 {
            ScalingGrade::C
        } else if rate >= 0.25 {
            ScalingGrade::D
        } else if rate > 0.0 {
            ScalingGrade::E
        } else {
            ScalingGrade::None
        }
    }

    /// Display string, `-` for no scaling.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalingGrade::S => "S",
            ScalingGrade::A => "A",
            ScalingGrade::B => "B",
            ScalingGrade::C => "C",
            ScalingGrade::D => "D",
            ScalingGrade::E => "E",
            ScalingGrade::None => "-",
        }
    }
}

impl fmt::Display for ScalingGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value per damage type, indexed by `DamageType`.
///
/// # Examples
///
/// ```rust
/// use arcalc::{DamageMap, DamageType};
///
/// let attack = DamageMap::default().with(DamageType::Physical, 100.0);
/// assert_eq!(attack[DamageType::Physical], 100.0);
/// assert_eq!(attack[DamageType::Magic], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageMap<T> {
    values: [T; DamageType::COUNT],
}

impl<T> DamageMap<T> {
    /// Build a map by evaluating `f` for every damage type.
    pub fn from_fn(f: impl FnMut(DamageType) -> T) -> Self {
        Self {
            values: DamageType::ALL.map(f),
        }
    }

    /// Get the value for a damage type.
    pub fn get(&self, ty: DamageType) -> &T {
        &self.values[ty.index()]
    }

    /// Set the value for a damage type.
    pub fn set(&mut self, ty: DamageType, value: T) {
        self.values[ty.index()] = value;
    }

    /// Builder-style `set`, useful when assembling tables.
    pub fn with(mut self, ty: DamageType, value: T) -> Self {
        self.set(ty, value);
        self
    }

    /// Iterate over `(damage type, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (DamageType, &T)> {
        DamageType::ALL.iter().copied().zip(self.values.iter())
    }
}

impl<T: Copy> DamageMap<T> {
    /// Build a map holding the same value for every damage type.
    pub fn uniform(value: T) -> Self {
        Self {
            values: [value; DamageType::COUNT],
        }
    }
}

impl<T> Index<DamageType> for DamageMap<T> {
    type Output = T;

    fn index(&self, ty: DamageType) -> &T {
        self.get(ty)
    }
}

impl<T> IndexMut<DamageType> for DamageMap<T> {
    fn index_mut(&mut self, ty: DamageType) -> &mut T {
        &mut self.values[ty.index()]
    }
}

/// A value per status effect, indexed by `StatusType`.
///
/// # Examples
///
/// ```rust
/// use arcalc::{StatusMap, StatusType};
///
/// let effects = StatusMap::default().with(StatusType::Bleed, 45.0);
/// assert_eq!(effects[StatusType::Bleed], 45.0);
/// assert_eq!(effects[StatusType::Sleep], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusMap<T> {
    values: [T; StatusType::COUNT],
}

impl<T> StatusMap<T> {
    /// Build a map by evaluating `f` for every status effect.
    pub fn from_fn(f: impl FnMut(StatusType) -> T) -> Self {
        Self {
            values: StatusType::ALL.map(f),
        }
    }

    /// Get the value for a status effect.
    pub fn get(&self, ty: StatusType) -> &T {
        &self.values[ty.index()]
    }

    /// Set the value for a status effect.
    pub fn set(&mut self, ty: StatusType, value: T) {
        self.values[ty.index()] = value;
    }

    /// Builder-style `set`, useful when assembling tables.
    pub fn with(mut self, ty: StatusType, value: T) -> Self {
        self.set(ty, value);
        self
    }

    /// Iterate over `(status type, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusType, &T)> {
        StatusType::ALL.iter().copied().zip(self.values.iter())
    }
}

impl<T: Copy> StatusMap<T> {
    /// Build a map holding the same value for every status effect.
    pub fn uniform(value: T) -> Self {
        Self {
            values: [value; StatusType::COUNT],
        }
    }
}

impl<T> Index<StatusType> for StatusMap<T> {
    type Output = T;

    fn index(&self, ty: StatusType) -> &T {
        self.get(ty)
    }
}

impl<T> IndexMut<StatusType> for StatusMap<T> {
    fn index_mut(&mut self, ty: StatusType) -> &mut T {
        &mut self.values[ty.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_type_order() {
        assert_eq!(DamageType::ALL[0], DamageType::Physical);
        assert_eq!(DamageType::ALL[4], DamageType::Holy);
    }

    #[test]
    fn test_damage_map_indexing() {
        let mut map = DamageMap::uniform(1.0);
        map[DamageType::Fire] = 2.5;

        assert_eq!(map[DamageType::Fire], 2.5);
        assert_eq!(map[DamageType::Physical], 1.0);
    }

    #[test]
    fn test_damage_map_iter_order() {
        let map = DamageMap::from_fn(|ty| ty.as_str());
        let names: Vec<_> = map.iter().map(|(_, v)| *v).collect();
        assert_eq!(names, ["physical", "magic", "fire", "lightning", "holy"]);
    }

    #[test]
    fn test_status_map_builder() {
        let map = StatusMap::default()
            .with(StatusType::Poison, 33.0)
            .with(StatusType::Madness, 80.0);

        assert_eq!(map[StatusType::Poison], 33.0);
        assert_eq!(map[StatusType::Madness], 80.0);
        assert_eq!(map[StatusType::Bleed], 0.0);
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(ScalingGrade::from_rate(1.75), ScalingGrade::S);
        assert_eq!(ScalingGrade::from_rate(1.4), ScalingGrade::A);
        assert_eq!(ScalingGrade::from_rate(0.9), ScalingGrade::B);
        assert_eq!(ScalingGrade::from_rate(0.6), ScalingGrade::C);
        assert_eq!(ScalingGrade::from_rate(0.25), ScalingGrade::D);
        assert_eq!(ScalingGrade::from_rate(0.01), ScalingGrade::E);
        assert_eq!(ScalingGrade::from_rate(0.0), ScalingGrade::None);
        assert_eq!(ScalingGrade::from_rate(-1.0), ScalingGrade::None);
    }

    #[test]
    fn test_grade_boundaries_exclusive() {
        assert_eq!(ScalingGrade::from_rate(1.74), ScalingGrade::A);
        assert_eq!(ScalingGrade::from_rate(0.89), ScalingGrade::C);
        assert_eq!(ScalingGrade::from_rate(0.24), ScalingGrade::E);
    }
}
