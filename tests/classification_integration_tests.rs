//! Classification Integration Tests
//!
//! Exercises the public API end to end: the documented example readings,
//! cross-function properties over grids of inputs, and threshold overrides.

use reading_checks_rust::{
    classify_triangle, equilateral, evaluate_batch, fail_safe, is_criticality_balanced,
    isosceles, reactor_efficiency, reactor_efficiency_with, scalene, ClassifyError,
    EfficiencyBand, FailSafeStatus, ReadingBatch, Thresholds, TriangleKind,
};

#[test]
fn test_documented_examples() {
    assert!(is_criticality_balanced(750.0, 600.0));
    assert!(!is_criticality_balanced(800.0, 600.0));

    assert_eq!(reactor_efficiency(10.0, 10.0, 200.0).unwrap().as_str(), "red");
    assert_eq!(fail_safe(10.0, 10.0, 100.0).unwrap().as_str(), "NORMAL");

    assert!(equilateral([2.0, 2.0, 2.0]));
    assert!(isosceles([2.0, 2.0, 3.0]));
    assert!(scalene([2.0, 3.0, 4.0]));
}

#[test]
fn test_criticality_matches_all_three_bounds() {
    for t in (0..=1000).step_by(25) {
        for n in (0..=1200).step_by(25) {
            let (t, n) = (t as f64, n as f64);
            let expected = t < 800.0 && n > 500.0 && t * n < 500_000.0;
            let balanced = is_criticality_balanced(t, n);
            assert_eq!(balanced, expected, "temperature={t} neutrons={n}");
        }
    }
}

#[test]
fn test_efficiency_band_is_monotonic_in_generated_power() {
    let max_power = 250.0;
    let mut previous = EfficiencyBand::Black;
    for step in 0..=400 {
        let current = step as f64 * 0.25;
        let band = reactor_efficiency(2.5, current, max_power).unwrap();
        assert!(
            band >= previous,
            "band dropped from {previous} to {band} at current={current}"
        );
        previous = band;
    }
    assert_eq!(previous, EfficiencyBand::Green);
}

#[test]
fn test_equilateral_implies_isosceles_and_scalene_excludes_both() {
    let values = [0.0, 1.0, 2.0, 2.5, 3.0];
    for &a in &values {
        for &b in &values {
            for &c in &values {
                let sides = [a, b, c];
                if equilateral(sides) {
                    assert!(isosceles(sides), "{sides:?}");
                }
                assert_eq!(
                    scalene(sides),
                    !equilateral(sides) && !isosceles(sides),
                    "{sides:?}"
                );
                let kind = classify_triangle(sides);
                assert_eq!(kind == TriangleKind::Scalene, scalene(sides));
            }
        }
    }
}

#[test]
fn test_fail_safe_status_regions() {
    // threshold 1000: LOW below 900, NORMAL from 900 up to (but excluding) 1100
    let cases = [
        (500.0, FailSafeStatus::Low),
        (899.0, FailSafeStatus::Low),
        (900.0, FailSafeStatus::Normal),
        (1000.0, FailSafeStatus::Normal),
        (1099.0, FailSafeStatus::Normal),
        (1100.0, FailSafeStatus::Danger),
        (5000.0, FailSafeStatus::Danger),
    ];
    for (product, expected) in cases {
        let status = fail_safe(product, 1.0, 1000.0).unwrap();
        assert_eq!(status, expected, "product={product}");
    }
}

#[test]
fn test_zero_divisors_are_reported() {
    assert!(matches!(
        reactor_efficiency(1.0, 1.0, 0.0),
        Err(ClassifyError::ZeroTheoreticalMaxPower { .. })
    ));
    assert!(matches!(
        fail_safe(1.0, 1.0, 0.0),
        Err(ClassifyError::ZeroThreshold { .. })
    ));
}

#[test]
fn test_thresholds_override_through_batch() {
    let thresholds = Thresholds::from_json(
        r#"{ "criticality": { "max_temperature": 900.0, "max_product": 600000.0 },
             "efficiency": { "green": 95.0 } }"#,
    )
    .unwrap();

    let cutoffs = &thresholds.efficiency;
    let band = reactor_efficiency_with(cutoffs, 9.0, 10.0, 100.0).unwrap();
    assert_eq!(band, EfficiencyBand::Orange);

    let batch: ReadingBatch = serde_json::from_str(
        r#"{
            "criticality": [{ "temperature": 850, "neutrons_emitted": 600 }],
            "efficiency": [{ "voltage": 9, "current": 10, "theoretical_max_power": 100 }]
        }"#,
    )
    .unwrap();

    let custom = evaluate_batch(&batch, &thresholds);
    assert!(custom.criticality[0].balanced);
    assert_eq!(custom.efficiency[0].band, Some(EfficiencyBand::Orange));

    let default = evaluate_batch(&batch, &Thresholds::default());
    assert!(!default.criticality[0].balanced);
    assert_eq!(default.efficiency[0].band, Some(EfficiencyBand::Green));
}
