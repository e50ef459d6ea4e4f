//! # arcalc - Deterministic Attack Rating Calculator
//!
//! A pure calculation engine that reproduces a game's internal damage
//! scaling math over static balance tables:
//! - **Deterministic** output (same tables + attributes → same ratings)
//! - **Fail-fast** table validation (no partially valid ruleset ever exists)
//! - **Shareable** data (the ruleset is immutable after construction)
//!
//! ## Core Concepts
//!
//! ### Rating Pipeline
//!
//! Ratings flow through a simple pipeline:
//!
//! ```text
//! [BalanceData] + (weapon, affinity, level) → [ArmamentCalculator] + [Attributes] → [Breakdown]s
//! ```
//!
//! 1. **BalanceData** bundles the four lookup tables (armaments,
//!    reinforcements, correction tables, correction curves) and validates
//!    every cross-table reference up front
//! 2. **ArmamentCalculator** is a cheap view binding one weapon to an
//!    affinity and upgrade level, both replaceable via validating setters
//! 3. Each query combines base values, reinforcement multipliers, and
//!    correction-curve contributions into per-type **Breakdown**s
//!
//! ### Soft Caps
//!
//! Correction curves map raw attribute values to scaling percentages by
//! piecewise-linear interpolation, clamped at both endpoints. Flat segments
//! past a breakpoint are exactly the diminishing returns attributed to high
//! stats.
//!
//! ## Example
//!
//! ```rust
//! use arcalc::*;
//! use std::collections::HashMap;
//!
//! // Curves and correction rates, normally decoded from balance tables.
//! let mut curves = HashMap::new();
//! curves.insert(
//!     CurveId(0),
//!     CorrectionCurve::from_pairs([(1, 0.0), (20, 50.0), (99, 100.0)]).unwrap(),
//! );
//!
//! let mut corrections = HashMap::new();
//! corrections.insert(
//!     CorrectionId(0),
//!     CorrectionTable::default().with(
//!         Attribute::Strength,
//!         CorrectionEntry { curve: CurveId(0), multiplier: 100.0 },
//!     ),
//! );
//!
//! let mut reinforcements = HashMap::new();
//! reinforcements.insert(ReinforcementId(0), vec![ReinforcementRow::neutral()]);
//!
//! let mut affinities = HashMap::new();
//! affinities.insert(String::from("Standard"), AffinityVariant {
//!     attack: DamageMap::default().with(DamageType::Physical, 100.0),
//!     scaling: AttributeMap::default().with(Attribute::Strength, 1.0),
//!     ..AffinityVariant::default()
//! });
//! let mut armaments = HashMap::new();
//! armaments.insert(String::from("Club"), ArmamentDefinition {
//!     name: String::from("Club"),
//!     affinities,
//!     ..ArmamentDefinition::default()
//! });
//!
//! let data = BalanceData::new(armaments, reinforcements, corrections, curves).unwrap();
//!
//! let calc = ArmamentCalculator::new(&data, "Club", "Standard", 0).unwrap();
//! let rating = calc.attack_power(&Attributes::new(20, 10, 10, 10, 10));
//!
//! assert_eq!(rating.types[DamageType::Physical].total, 150); // 100 base + 50 scaling
//! assert_eq!(rating.total.total, 150);
//! ```
//!
//! ## Modules
//!
//! - [`attribute`] - Player attributes and attribute-indexed maps
//! - [`types`] - Damage/status vocabularies and scaling grades
//! - [`curve`] - Piecewise-linear correction curves
//! - [`correction`] - Per-attribute correction rates
//! - [`armament`] - Static armament, affinity, and reinforcement records
//! - [`balance`] - The validated, immutable table bundle
//! - [`calculator`] - The rating engine
//! - [`error`] - Error types

pub mod armament;
pub mod attribute;
pub mod balance;
pub mod calculator;
pub mod correction;
pub mod curve;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use armament::{AffinityVariant, ArmamentDefinition, ReinforcementId, ReinforcementRow};
pub use attribute::{Attribute, AttributeMap, Attributes};
pub use balance::BalanceData;
pub use calculator::{ArmamentCalculator, AttackRating, Breakdown};
pub use correction::{CorrectionEntry, CorrectionId, CorrectionTable};
pub use curve::{CorrectionCurve, CurveId, CurvePoint};
pub use error::RatingError;
pub use types::{DamageMap, DamageType, ScalingGrade, StatusMap, StatusType};
