//! Integration tests for level selection, aggregation and normalisation

use isochart_decay::{
    aggregate, assess, normalise, select_level, Branching, Category, Criteria, Error, Usability,
    BETA_ALIASES,
};
use isochart_ensdf::{DecayRatio, Level, Quantity, Unit};
use rstest::{fixture, rstest};

fn ratio(branches: &[(&str, f64)]) -> DecayRatio {
    branches
        .iter()
        .map(|(label, p)| (label.to_string(), Quantity::new(*p, None)))
        .collect()
}

fn level(half_life: Quantity, branches: &[(&str, f64)]) -> Level {
    Level {
        half_life,
        decay_ratio: ratio(branches),
        ..Default::default()
    }
}

fn seconds(value: f64) -> Quantity {
    Quantity::new(value, Some(Unit::Second))
}

#[fixture]
fn criteria() -> Criteria {
    Criteria::default()
}

#[rstest]
fn pure_alpha_scenario(criteria: Criteria) {
    let levels = [level(seconds(10.0), &[("A", 0.98)])];
    let candidate = select_level(&levels, &criteria).unwrap().candidate.unwrap();

    assert_eq!(candidate.branching.alpha, 1.0);
    assert_eq!(candidate.branching.beta, 0.0);
    assert_eq!(candidate.half_life, 10.0);
}

#[rstest]
fn partial_beta_is_rejected_and_selector_advances(criteria: Criteria) {
    let levels = [
        level(seconds(1.0), &[("B-", 0.45), ("EC+%B+", 0.02)]),
        level(seconds(2.0), &[("B-", 0.95)]),
    ];
    let selection = select_level(&levels, &criteria).unwrap();

    assert_eq!(selection.rejections.len(), 1);
    assert_eq!(selection.rejections[0].level, 0);
    assert!((selection.rejections[0].branching.beta - 0.47).abs() < 1e-12);

    let candidate = selection.candidate.unwrap();
    assert_eq!(candidate.level, 1);
    assert_eq!(candidate.branching, Branching::new(0.0, 1.0));
}

#[rstest]
#[case(Quantity::new(f64::NAN, Some(Unit::Second)))]
#[case(Quantity::new(5.0, None))]
#[case(Quantity::unknown())]
fn undefined_half_life_is_never_selected(criteria: Criteria, #[case] half_life: Quantity) {
    let levels = [level(half_life, &[("A", 1.0)])];

    assert_eq!(
        assess(&levels[0], &criteria).unwrap(),
        Usability::UnknownHalfLife
    );
    assert!(select_level(&levels, &criteria).unwrap().candidate.is_none());
}

#[rstest]
fn level_width_is_not_a_half_life(criteria: Criteria) {
    let width = Quantity::new(5.57, Some(Unit::ElectronVolt));
    let levels = [level(width, &[("A", 1.0)]), level(seconds(3.0), &[("A", 1.0)])];

    assert_eq!(
        assess(&levels[0], &criteria).unwrap(),
        Usability::NotTime(Unit::ElectronVolt)
    );
    assert_eq!(
        select_level(&levels, &criteria)
            .unwrap()
            .candidate
            .unwrap()
            .level,
        1
    );
}

#[rstest]
#[case(&[("IT", 1.0)])]
#[case(&[("A", 0.005), ("B-", 0.009)])]
#[case(&[])]
fn negligible_branches_are_skipped(criteria: Criteria, #[case] branches: &[(&str, f64)]) {
    let levels = [level(seconds(1.0), branches)];
    assert!(matches!(
        assess(&levels[0], &criteria).unwrap(),
        Usability::NoBranches(_)
    ));
}

#[rstest]
fn branch_on_threshold_is_not_negligible(criteria: Criteria) {
    // beta exactly at the minimum is kept, and then fails on tolerance
    let levels = [level(seconds(1.0), &[("A", 0.0), ("B-", 0.01)])];
    assert!(matches!(
        assess(&levels[0], &criteria).unwrap(),
        Usability::OutOfTolerance(_)
    ));
}

#[rstest]
#[case(0.9, 0.0, true)]
#[case(0.5, 0.5, true)]
#[case(0.3, 0.75, true)]
#[case(0.0, 1.1, true)]
#[case(0.5, 0.39, false)]
#[case(0.6, 0.55, false)]
#[case(0.0, 0.47, false)]
fn tolerance_band(#[case] alpha: f64, #[case] beta: f64, #[case] accepted: bool) {
    let result = normalise(Branching::new(alpha, beta), 0.1);
    assert_eq!(result.is_ok(), accepted);

    if let Ok(n) = result {
        assert!((n.alpha + n.beta - 1.0).abs() < 1e-9);
    }
}

#[rstest]
#[case(60.0, 30.0, true)]
#[case(80.0, 30.0, true)]
#[case(45.0, 45.0, true)]
#[case(50.0, 39.0, false)]
#[case(60.0, 51.0, false)]
fn tolerance_band_in_percent(
    criteria: Criteria,
    #[case] alpha: f64,
    #[case] beta: f64,
    #[case] accepted: bool,
) {
    let percent = |p: f64| Quantity::new(p, Some(Unit::Percent));
    let level = Level {
        half_life: seconds(1.0),
        decay_ratio: [("A".to_string(), percent(alpha)), ("B-".to_string(), percent(beta))]
            .into_iter()
            .collect(),
        ..Default::default()
    };

    let usability = assess(&level, &criteria).unwrap();
    assert_eq!(matches!(usability, Usability::Usable { .. }), accepted);
}

#[rstest]
fn aggregation_ignores_unknown_labels() {
    let aliases_only = ratio(&[("A", 0.2), ("B-", 0.5), ("B-N", 0.1), ("EC+%B+", 0.15)]);
    let with_extras = ratio(&[
        ("A", 0.2),
        ("B-", 0.5),
        ("B-N", 0.1),
        ("EC+%B+", 0.15),
        ("IT", 0.3),
        ("SF", 0.01),
        ("B+", 0.4),
    ]);

    for category in [Category::Alpha, Category::Beta] {
        assert_eq!(
            category.aggregate(&aliases_only).unwrap(),
            category.aggregate(&with_extras).unwrap()
        );
    }
}

#[rstest]
fn unmeasured_branches_count_as_zero() {
    let ratio = ratio(&[("B-", f64::NAN), ("B-N", 0.25)]);
    assert_eq!(aggregate(&ratio, BETA_ALIASES).unwrap(), 0.25);
}

#[rstest]
fn percent_and_fraction_mix() {
    let mut ratio = DecayRatio::new();
    ratio.insert("A".into(), Quantity::new(60.0, Some(Unit::Percent)));
    ratio.insert("B-".into(), Quantity::new(0.4, Some(Unit::Fraction)));

    let branching = Branching::from_ratio(&ratio).unwrap();
    assert!((branching.alpha - 0.6).abs() < 1e-12);
    assert!((branching.beta - 0.4).abs() < 1e-12);
}

#[rstest]
fn branch_in_energy_units_is_an_error(criteria: Criteria) {
    let mut bad = level(seconds(1.0), &[]);
    bad.decay_ratio
        .insert("A".into(), Quantity::new(1.0, Some(Unit::KiloElectronVolt)));

    assert!(matches!(
        Category::Alpha.aggregate(&bad.decay_ratio),
        Err(Error::BranchNotProbability { ref label, .. }) if label == "A"
    ));
    assert!(matches!(
        select_level(&[bad], &criteria),
        Err(Error::BranchNotProbability { .. })
    ));
}

#[rstest]
fn first_usable_level_wins(criteria: Criteria) {
    let levels = [
        level(seconds(100.0), &[("A", 0.5), ("B-", 0.5)]),
        level(seconds(200.0), &[("A", 1.0)]),
    ];
    let candidate = select_level(&levels, &criteria).unwrap().candidate.unwrap();
    assert_eq!(candidate.level, 0);
    assert_eq!(candidate.half_life, 100.0);
}
