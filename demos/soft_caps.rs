//! Soft caps: how correction curves shape attribute investment
//!
//! This example demonstrates:
//! - Evaluating a piecewise-linear correction curve directly
//! - The diminishing returns past each breakpoint
//! - The same curve seen through a calculator as attack power per point

use arcalc::*;
use std::collections::HashMap;

/// A typical attack curve: fast growth to 20, a softer stretch to 60, then
/// a near-flat tail out to 99.
fn attack_curve() -> CorrectionCurve {
    CorrectionCurve::from_pairs([(1, 0.0), (20, 40.0), (60, 85.0), (99, 100.0)]).unwrap()
}

fn ruleset() -> Result<BalanceData, RatingError> {
    let mut curves = HashMap::new();
    curves.insert(CurveId(0), attack_curve());

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

    let mut reinforcements = HashMap::new();
    reinforcements.insert(ReinforcementId(0), vec![ReinforcementRow::neutral()]);

    let mut affinities = HashMap::new();
    affinities.insert(
        String::from("Standard"),
        AffinityVariant {
            attack: DamageMap::default().with(DamageType::Physical, 130.0),
            scaling: AttributeMap::default().with(Attribute::Strength, 0.8),
            ..AffinityVariant::default()
        },
    );
    let mut armaments = HashMap::new();
    armaments.insert(
        String::from("Greatsword"),
        ArmamentDefinition {
            name: String::from("Greatsword"),
            affinities,
            ..ArmamentDefinition::default()
        },
    );

    BalanceData::new(armaments, reinforcements, corrections, curves)
}

fn main() -> Result<(), RatingError> {
    let curve = attack_curve();

    println!("Curve breakpoints:");
    for point in curve.points() {
        println!("  {:>3} -> {:>5.1}%", point.breakpoint, point.percentage);
    }

    println!("\nCurve output per attribute value (gain over previous step):");
    let mut previous = curve.evaluate(0);
    for value in (10..=99).step_by(10).chain([99]) {
        let output = curve.evaluate(value as u32);
        println!(
            "  {:>3}: {:>5.1}%  (+{:.1})",
            value,
            output,
            output - previous
        );
        previous = output;
    }

    // The same shape, expressed as physical attack power on a real weapon.
    let data = ruleset()?;
    let calc = ArmamentCalculator::new(&data, "Greatsword", "Standard", 0)?;

    println!("\nGreatsword physical AR by strength:");
    let mut previous_total = 0;
    for strength in [10, 20, 30, 40, 60, 80, 99] {
        let rating = calc.attack_power(&Attributes::new(strength, 0, 0, 0, 0));
        let entry = rating.types[DamageType::Physical];
        println!(
            "  str {:>2}: {:>3}  ({:.1} base +{:.1} scaling, +{} over previous)",
            strength,
            entry.total,
            entry.base,
            entry.scaling,
            entry.total.saturating_sub(previous_total)
        );
        previous_total = entry.total;
    }

    println!("\nPast the final breakpoint the curve clamps; points beyond 99 buy nothing.");

    Ok(())
}
