//! Player attributes.
//!
//! Provides the `Attribute` enum for the five scaling attributes, the
//! enum-indexed `AttributeMap`, and the `Attributes` record holding one
//! player's values. The engine places no upper bound on attribute values;
//! clamping to a display range such as [1, 99] is presentation policy.

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The five attributes that armament damage can scale on.
///
/// # Examples
///
/// ```rust
/// use arcalc::Attribute;
///
/// assert_eq!(Attribute::ALL.len(), 5);
/// assert_eq!(Attribute::Intelligence.to_string(), "intelligence");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Faith,
    Arcane,
}

impl Attribute {
    /// Number of attributes.
    pub const COUNT: usize = 5;

    /// All attributes in display order.
    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Faith,
        Attribute::Arcane,
    ];

    /// Lowercase display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Intelligence => "intelligence",
            Attribute::Faith => "faith",
            Attribute::Arcane => "arcane",
        }
    }

    fn index(self) -> usize {
        match self {
            Attribute::Strength => 0,
            Attribute::Dexterity => 1,
            Attribute::Intelligence => 2,
            Attribute::Faith => 3,
            Attribute::Arcane => 4,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value per attribute, indexed by `Attribute`.
///
/// # Examples
///
/// ```rust
/// use arcalc::{Attribute, AttributeMap};
///
/// let scaling = AttributeMap::default()
///     .with(Attribute::Strength, 0.6)
///     .with(Attribute::Dexterity, 0.35);
///
/// assert_eq!(scaling[Attribute::Strength], 0.6);
/// assert_eq!(scaling[Attribute::Faith], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeMap<T> {
    values: [T; Attribute::COUNT],
}

impl<T> AttributeMap<T> {
    /// Build a map by evaluating `f` for every attribute.
    pub fn from_fn(f: impl FnMut(Attribute) -> T) -> Self {
        Self {
            values: Attribute::ALL.map(f),
        }
    }

    /// Get the value for an attribute.
    pub fn get(&self, attribute: Attribute) -> &T {
        &self.values[attribute.index()]
    }

    /// Set the value for an attribute.
    pub fn set(&mut self, attribute: Attribute, value: T) {
        self.values[attribute.index()] = value;
    }

    /// Builder-style `set`, useful when assembling tables.
    pub fn with(mut self, attribute: Attribute, value: T) -> Self {
        self.set(attribute, value);
        self
    }

    /// Iterate over `(attribute, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &T)> {
        Attribute::ALL.iter().copied().zip(self.values.iter())
    }
}

impl<T: Copy> AttributeMap<T> {
    /// Build a map holding the same value for every attribute.
    pub fn uniform(value: T) -> Self {
        Self {
            values: [value; Attribute::COUNT],
        }
    }
}

impl<T> Index<Attribute> for AttributeMap<T> {
    type Output = T;

    fn index(&self, attribute: Attribute) -> &T {
        self.get(attribute)
    }
}

impl<T> IndexMut<Attribute> for AttributeMap<T> {
    fn index_mut(&mut self, attribute: Attribute) -> &mut T {
        &mut self.values[attribute.index()]
    }
}

/// One player's attribute values.
///
/// Plain non-negative integers; the engine itself enforces no upper bound.
///
/// # Examples
///
/// ```rust
/// use arcalc::{Attribute, Attributes};
///
/// let attrs = Attributes::new(40, 18, 10, 8, 12);
/// assert_eq!(attrs.get(Attribute::Strength), 40);
/// assert_eq!(attrs.get(Attribute::Arcane), 12);
///
/// // Parsed from the delimited textual form.
/// let parsed: Attributes = "40,18,10,8,12".parse().unwrap();
/// assert_eq!(parsed, attrs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub faith: u32,
    pub arcane: u32,
}

impl Attributes {
    /// Create from explicit values, in display order.
    pub fn new(strength: u32, dexterity: u32, intelligence: u32, faith: u32, arcane: u32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            faith,
            arcane,
        }
    }

    /// Get the value for an attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Faith => self.faith,
            Attribute::Arcane => self.arcane,
        }
    }

    /// Set the value for an attribute.
    pub fn set(&mut self, attribute: Attribute, value: u32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Faith => self.faith = value,
            Attribute::Arcane => self.arcane = value,
        }
    }
}

impl FromStr for Attributes {
    type Err = RatingError;

    /// Parse the comma-delimited textual form, e.g. `"40,18,10,8,12"`.
    ///
    /// Values appear in display order: strength, dexterity, intelligence,
    /// faith, arcane. Surrounding whitespace per field is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0u32; Attribute::COUNT];
        let mut fields = s.split(',');

        for slot in values.iter_mut() {
            let field = fields
                .next()
                .ok_or_else(|| RatingError::MalformedAttributes(format!("expected 5 values: {s}")))?;
            *slot = field
                .trim()
                .parse()
                .map_err(|_| RatingError::MalformedAttributes(format!("not an integer: {field}")))?;
        }

        if fields.next().is_some() {
            return Err(RatingError::MalformedAttributes(format!(
                "expected 5 values: {s}"
            )));
        }

        Ok(Self::new(values[0], values[1], values[2], values[3], values[4]))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.strength, self.dexterity, self.intelligence, self.faith, self.arcane
        )
    }
}
