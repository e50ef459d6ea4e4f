//! Attack rating report: a full calculator session over a small ruleset
//!
//! This example demonstrates:
//! - Assembling a `BalanceData` bundle from the four lookup tables
//! - Binding an `ArmamentCalculator` and switching affinity/level
//! - Printing per-type attack and status breakdowns
//! - Scaling grades and requirement checks

use arcalc::*;
use std::collections::HashMap;

/// Two curves: a strength curve with a hard knee at 40, and a gentler
/// arcane curve used for status buildup.
fn curves() -> HashMap<CurveId, CorrectionCurve> {
    let mut curves = HashMap::new();
    curves.insert(
        CurveId(0),
        CorrectionCurve::from_pairs([(1, 0.0), (20, 40.0), (40, 80.0), (99, 100.0)]).unwrap(),
    );
    curves.insert(
        CurveId(1),
        CorrectionCurve::from_pairs([(1, 0.0), (45, 75.0), (99, 90.0)]).unwrap(),
    );
    curves
}

fn corrections() -> HashMap<CorrectionId, CorrectionTable> {
    let mut corrections = HashMap::new();
    // Physical weapons: strength and dexterity on the knee curve.
    corrections.insert(
        CorrectionId(0),
        CorrectionTable::default()
            .with(
                Attribute::Strength,
                CorrectionEntry {
                    curve: CurveId(0),
                    multiplier: 100.0,
                },
            )
            .with(
                Attribute::Dexterity,
                CorrectionEntry {
                    curve: CurveId(0),
                    multiplier: 75.0,
                },
            ),
    );
    // Occult weapons: arcane drives both damage and buildup.
    corrections.insert(
        CorrectionId(1),
        CorrectionTable::default().with(
            Attribute::Arcane,
            CorrectionEntry {
                curve: CurveId(1),
                multiplier: 100.0,
            },
        ),
    );
    corrections
}

/// One reinforcement class, levels 0..=5: attack grows 8% per level while
/// scaling decays slightly.
fn reinforcements() -> HashMap<ReinforcementId, Vec<ReinforcementRow>> {
    let rows = (0..=5)
        .map(|level| ReinforcementRow {
            attack: DamageMap::uniform(1.0 + 0.08 * level as f64),
            effect: StatusMap::uniform(1.0 + 0.02 * level as f64),
            scaling: AttributeMap::uniform(1.0 - 0.01 * level as f64),
            ..ReinforcementRow::neutral()
        })
        .collect();

    let mut reinforcements = HashMap::new();
    reinforcements.insert(ReinforcementId(0), rows);
    reinforcements
}

fn armaments() -> HashMap<String, ArmamentDefinition> {
    let standard = AffinityVariant {
        id: 0,
        reinforcement_id: ReinforcementId(0),
        correction_id: CorrectionId(0),
        attack: DamageMap::default()
            .with(DamageType::Physical, 120.0)
            .with(DamageType::Fire, 30.0),
        guard: DamageMap::default().with(DamageType::Physical, 55.0),
        guard_boost: 42.0,
        scaling: AttributeMap::default()
            .with(Attribute::Strength, 0.85)
            .with(Attribute::Dexterity, 0.35),
        ..AffinityVariant::default()
    };

    let occult = AffinityVariant {
        id: 1,
        reinforcement_id: ReinforcementId(0),
        correction_id: CorrectionId(1),
        attack: DamageMap::default().with(DamageType::Physical, 105.0),
        effects: StatusMap::default().with(StatusType::Bleed, 60.0),
        guard: DamageMap::default().with(DamageType::Physical, 55.0),
        guard_boost: 42.0,
        scaling: AttributeMap::default().with(Attribute::Arcane, 0.9),
        ..AffinityVariant::default()
    };

    let mut affinities = HashMap::new();
    affinities.insert(String::from("Standard"), standard);
    affinities.insert(String::from("Occult"), occult);

    let mut armaments = HashMap::new();
    armaments.insert(
        String::from("Bandit Curved Sword"),
        ArmamentDefinition {
            name: String::from("Bandit Curved Sword"),
            category: String::from("Curved Sword"),
            requirements: AttributeMap::default()
                .with(Attribute::Strength, 11)
                .with(Attribute::Dexterity, 13),
            upgrade_costs: vec![600, 900, 1400, 2100, 3000],
            affinities,
            ..ArmamentDefinition::default()
        },
    );
    armaments
}

fn print_attack(calc: &ArmamentCalculator, attributes: &Attributes) {
    let rating = calc.attack_power(attributes);
    for (ty, entry) in rating.types.iter() {
        if entry.total == 0 {
            continue;
        }
        println!(
            "{}: {:.0} +{:.0} ({})",
            ty, entry.base, entry.scaling, entry.total
        );
    }
    println!(
        "total: {:.0} +{:.0} ({})",
        rating.total.base, rating.total.scaling, rating.total.total
    );
}

fn print_status(calc: &ArmamentCalculator, attributes: &Attributes) {
    for (ty, entry) in calc.status_effects(attributes).iter() {
        if entry.total == 0 {
            continue;
        }
        println!(
            "{}: {:.0} +{:.0} ({})",
            ty, entry.base, entry.scaling, entry.total
        );
    }
}

fn main() -> Result<(), RatingError> {
    let data = BalanceData::new(armaments(), reinforcements(), corrections(), curves())?;

    let player = Attributes::new(24, 18, 9, 8, 30);
    println!("Player attributes: {}", player);

    let mut calc = ArmamentCalculator::new(&data, "Bandit Curved Sword", "Standard", 0)?;
    println!(
        "\n{} [{}] +{}/{}",
        calc.armament().name,
        calc.affinity(),
        calc.level(),
        calc.max_level()
    );
    print_attack(&calc, &player);

    // Same weapon at maximum reinforcement.
    calc.set_level(calc.max_level() as i32)?;
    println!(
        "\n{} [{}] +{}/{}",
        calc.armament().name,
        calc.affinity(),
        calc.level(),
        calc.max_level()
    );
    print_attack(&calc, &player);

    println!("\nScaling grades at +{}:", calc.level());
    for attribute in Attribute::ALL {
        println!(
            "  {}: {}",
            attribute,
            calc.attribute_scaling_grade(attribute)
        );
    }

    println!("\nRequirements:");
    for attribute in Attribute::ALL {
        let required = calc.armament().requirement(attribute);
        if required > 0 {
            let met = calc.requirement_met(attribute, player.get(attribute));
            println!(
                "  {}: {} required, have {} ({})",
                attribute,
                required,
                player.get(attribute),
                if met { "ok" } else { "NOT MET" }
            );
        }
    }

    // Rebind to the occult variant; bleed buildup now scales with arcane.
    calc.set_affinity("Occult")?;
    println!(
        "\n{} [{}] +{}/{}",
        calc.armament().name,
        calc.affinity(),
        calc.level(),
        calc.max_level()
    );
    print_attack(&calc, &player);
    println!("Status buildup:");
    print_status(&calc, &player);

    println!("\nGuard:");
    println!(
        "  physical absorption: {}",
        calc.guard_absorption(DamageType::Physical)
    );
    println!("  guard boost: {}", calc.guard_boost());

    Ok(())
}
