use arcalc::*;
use std::collections::HashMap;

fn linear_curve() -> CorrectionCurve {
    CorrectionCurve::from_pairs([(0, 0.0), (100, 100.0)]).unwrap()
}

struct Builder {
    armaments: HashMap<String, ArmamentDefinition>,
    reinforcements: HashMap<ReinforcementId, Vec<ReinforcementRow>>,
    corrections: HashMap<CorrectionId, CorrectionTable>,
    curves: HashMap<CurveId, CorrectionCurve>,
}

impl Builder {
    /// A consistent single-weapon ruleset that each test then perturbs.
    fn consistent() -> Self {
        let mut curves = HashMap::new();
        curves.insert(CurveId(0), linear_curve());

        let mut corrections = HashMap::new();
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
                        multiplier: 85.0,
                    },
                ),
        );

        let mut reinforcements = HashMap::new();
        reinforcements.insert(
            ReinforcementId(0),
            vec![ReinforcementRow::neutral(); 4],
        );

        let mut affinities = HashMap::new();
        affinities.insert(
            String::from("Standard"),
            AffinityVariant {
                reinforcement_id: ReinforcementId(0),
                correction_id: CorrectionId(0),
                attack: DamageMap::default().with(DamageType::Physical, 100.0),
                scaling: AttributeMap::default()
                    .with(Attribute::Strength, 0.5)
                    .with(Attribute::Dexterity, 0.5),
                ..AffinityVariant::default()
            },
        );

        let mut armaments = HashMap::new();
        armaments.insert(
            String::from("Dagger"),
            ArmamentDefinition {
                name: String::from("Dagger"),
                upgrade_costs: vec![200, 300, 400],
                affinities,
                ..ArmamentDefinition::default()
            },
        );

        Self {
            armaments,
            reinforcements,
            corrections,
            curves,
        }
    }

    fn build(self) -> Result<BalanceData, RatingError> {
        BalanceData::new(
            self.armaments,
            self.reinforcements,
            self.corrections,
            self.curves,
        )
    }

    fn variant_mut(&mut self) -> &mut AffinityVariant {
        self.armaments
            .get_mut("Dagger")
            .unwrap()
            .affinities
            .get_mut("Standard")
            .unwrap()
    }
}

#[test]
fn test_consistent_tables_construct() {
    let data = Builder::consistent().build().unwrap();
    assert!(data.armament("Dagger").is_ok());
    assert_eq!(data.armament("Dagger").unwrap().max_level(), 3);
}

#[test]
fn test_dangling_reinforcement_reference() {
    let mut builder = Builder::consistent();
    builder.variant_mut().reinforcement_id = ReinforcementId(77);

    let message = match builder.build().unwrap_err() {
        RatingError::MalformedTable(message) => message,
        other => panic!("expected MalformedTable, got {other:?}"),
    };
    assert!(message.contains("77"));
    assert!(message.contains("Dagger"));
}

#[test]
fn test_reinforcement_sequence_too_short() {
    let mut builder = Builder::consistent();
    // Levels 0..=3 need four rows; leave three.
    builder
        .reinforcements
        .insert(ReinforcementId(0), vec![ReinforcementRow::neutral(); 3]);

    let err = builder.build().unwrap_err();
    assert!(matches!(err, RatingError::MalformedTable(_)));
}

#[test]
fn test_dangling_correction_reference() {
    let mut builder = Builder::consistent();
    builder.variant_mut().correction_id = CorrectionId(9);

    let message = match builder.build().unwrap_err() {
        RatingError::MalformedTable(message) => message,
        other => panic!("expected MalformedTable, got {other:?}"),
    };
    assert!(message.contains("correction group 9"));
}

#[test]
fn test_scaled_attribute_without_mapping() {
    let mut builder = Builder::consistent();
    builder
        .variant_mut()
        .scaling
        .set(Attribute::Faith, 0.25);

    let message = match builder.build().unwrap_err() {
        RatingError::MalformedTable(message) => message,
        other => panic!("expected MalformedTable, got {other:?}"),
    };
    assert!(message.contains("faith"));
}

#[test]
fn test_correction_entry_with_dangling_curve() {
    let mut builder = Builder::consistent();
    builder.corrections.insert(
        CorrectionId(1),
        CorrectionTable::default().with(
            Attribute::Arcane,
            CorrectionEntry {
                curve: CurveId(13),
                multiplier: 100.0,
            },
        ),
    );

    // Group 1 is not referenced by any weapon, but its dangling curve still
    // fails construction; validation covers the whole bundle.
    let message = match builder.build().unwrap_err() {
        RatingError::MalformedTable(message) => message,
        other => panic!("expected MalformedTable, got {other:?}"),
    };
    assert!(message.contains("13"));
}

#[test]
fn test_zero_rate_attribute_needs_no_mapping() {
    let mut builder = Builder::consistent();
    // Arcane rate stays zero; the correction group not mapping it is fine.
    builder.variant_mut().scaling.set(Attribute::Arcane, 0.0);
    assert!(builder.build().is_ok());
}

#[test]
fn test_correction_contribution_surface() {
    let data = Builder::consistent().build().unwrap();

    // Dexterity: curve(60) = 60, multiplier 85 -> 51.
    let contribution = data
        .correction_contribution(CorrectionId(0), Attribute::Dexterity, 60)
        .unwrap();
    assert!((contribution - 51.0).abs() < 1e-9);

    assert_eq!(
        data.correction_contribution(CorrectionId(0), Attribute::Faith, 60)
            .unwrap_err(),
        RatingError::UnknownAttributeMapping {
            group: CorrectionId(0),
            attribute: Attribute::Faith,
        }
    );
    assert_eq!(
        data.correction_contribution(CorrectionId(4), Attribute::Strength, 60)
            .unwrap_err(),
        RatingError::UnknownCorrectionGroup(CorrectionId(4))
    );
}

#[test]
fn test_reinforcement_row_lookup() {
    let data = Builder::consistent().build().unwrap();

    assert!(data.reinforcement_row(ReinforcementId(0), 3).is_ok());
    assert!(matches!(
        data.reinforcement_row(ReinforcementId(0), 4),
        Err(RatingError::NotFound(_))
    ));
    assert!(matches!(
        data.reinforcement_rows(ReinforcementId(2)),
        Err(RatingError::NotFound(_))
    ));
}
