use std::collections::HashSet;

use urania::aspects::{detect_aspects, detect_cross_aspects, AspectCalculator, AspectKind, PairKey};
use urania::chart::{CelestialBody, Sign};
use urania::config::{AspectConfig, AspectTypeConfig, ChartMode, ChartModeConfig};

fn natal_aspects() -> AspectConfig {
    ChartModeConfig::for_mode(ChartMode::Natal).aspects
}

#[test]
fn test_sun_moon_square() {
    let sun = CelestialBody::new("Sun", Sign::Aries, 0.0, None).unwrap();
    let moon = CelestialBody::new("Moon", Sign::Cancer, 0.0, Some(0.0)).unwrap();
    let config = AspectConfig::none().with(AspectKind::Square, AspectTypeConfig::on(6.0));

    let aspects = detect_aspects(&[sun, moon], &config);

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].body_a, "Sun");
    assert_eq!(aspects[0].body_b, "Moon");
    assert_eq!(aspects[0].kind, AspectKind::Square);
    assert_eq!(aspects[0].orb, 0.0);
    assert_eq!(aspects[0].applying, None);
}

#[test]
fn test_calculate_aspect_opposition_across_zero() {
    let calculator = AspectCalculator::new();
    // 350 and 172 are 178 degrees apart the short way
    let aspect = calculator.calculate_aspect(350.0, 172.0, &natal_aspects());
    assert_eq!(aspect, Some((AspectKind::Opposition, 2.0)));
}

#[test]
fn test_first_match_wins_over_tighter_orb() {
    let calculator = AspectCalculator::new();
    let config = AspectConfig::none()
        .with(AspectKind::Conjunction, AspectTypeConfig::on(45.0))
        .with(AspectKind::Sextile, AspectTypeConfig::on(45.0));

    // 40 degrees: conjunction is 40 off, sextile only 20 off
    let aspect = calculator.calculate_aspect(10.0, 50.0, &config);
    assert_eq!(aspect, Some((AspectKind::Conjunction, 40.0)));

    let sextile_only = config.with(AspectKind::Conjunction, AspectTypeConfig::off());
    let aspect = calculator.calculate_aspect(10.0, 50.0, &sextile_only);
    assert_eq!(aspect, Some((AspectKind::Sextile, 20.0)));
}

#[test]
fn test_orb_is_rounded_to_two_decimals() {
    let a = CelestialBody::new("Venus", Sign::Taurus, 10.0, Some(0.0)).unwrap();
    let b = CelestialBody::new("Mars", Sign::Virgo, 12.0, Some(20.0)).unwrap();

    let aspects = detect_aspects(&[a, b], &natal_aspects());

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Trine);
    // 162.333.. - 40 = 122.333.. -> 2.33 from exact
    assert_eq!(aspects[0].orb, 2.33);
}

#[test]
fn test_detection_is_symmetric() {
    let longitudes = [0.0, 3.5, 61.25, 92.0, 118.4, 179.0, 200.0, 239.9, 301.0, 358.5];
    let config = natal_aspects();
    let calculator = AspectCalculator::new();

    for &a in &longitudes {
        for &b in &longitudes {
            assert_eq!(
                calculator.calculate_aspect(a, b, &config),
                calculator.calculate_aspect(b, a, &config),
                "a={} b={}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_one_kind_per_pair() {
    let bodies: Vec<CelestialBody> = (0..24)
        .map(|i| CelestialBody::at_longitude(format!("body_{}", i), i as f64 * 15.0))
        .collect();
    let wide = AspectConfig {
        conjunction: AspectTypeConfig::on(30.0),
        opposition: AspectTypeConfig::on(30.0),
        square: AspectTypeConfig::on(30.0),
        trine: AspectTypeConfig::on(30.0),
        sextile: AspectTypeConfig::on(30.0),
    };

    let aspects = detect_aspects(&bodies, &wide);

    let mut pairs = HashSet::new();
    for aspect in &aspects {
        assert!(pairs.insert(aspect.pair()), "duplicate pair {:?}", aspect.pair());
        assert!(aspect.orb >= 0.0);
    }
}

#[test]
fn test_detection_order_is_outer_then_inner() {
    let bodies = vec![
        CelestialBody::at_longitude("Sun", 0.0),
        CelestialBody::at_longitude("Moon", 1.0),
        CelestialBody::at_longitude("Mars", 2.0),
    ];

    let aspects = detect_aspects(&bodies, &natal_aspects());
    let order: Vec<(&str, &str)> = aspects
        .iter()
        .map(|a| (a.body_a.as_str(), a.body_b.as_str()))
        .collect();

    assert_eq!(order, vec![("Sun", "Moon"), ("Sun", "Mars"), ("Moon", "Mars")]);
}

#[test]
fn test_disabled_kinds_are_skipped() {
    let bodies = vec![
        CelestialBody::at_longitude("Sun", 10.0),
        CelestialBody::at_longitude("Saturn", 100.0),
    ];
    let config = natal_aspects().with(AspectKind::Square, AspectTypeConfig::off());

    assert!(detect_aspects(&bodies, &config).is_empty());
}

#[test]
fn test_fewer_than_two_bodies() {
    let config = natal_aspects();
    assert!(detect_aspects(&[], &config).is_empty());
    assert!(detect_aspects(&[CelestialBody::at_longitude("Sun", 0.0)], &config).is_empty());
}

#[test]
fn test_cross_aspects_with_empty_side() {
    let config = natal_aspects();
    let set = vec![
        CelestialBody::at_longitude("Sun", 0.0),
        CelestialBody::at_longitude("Moon", 2.0),
    ];

    assert!(detect_cross_aspects(&set, &[], &config).is_empty());
    assert!(detect_cross_aspects(&[], &set, &config).is_empty());
    assert!(detect_cross_aspects(&[], &[], &config).is_empty());
}

#[test]
fn test_cross_aspects_skip_within_set_pairs() {
    let config = natal_aspects();
    // Sun and Moon conjunct each other, but both sit on the inner wheel
    let natal = vec![
        CelestialBody::at_longitude("Sun", 0.0),
        CelestialBody::at_longitude("Moon", 1.0),
    ];
    let transit = vec![
        CelestialBody::at_longitude("t_Mars", 180.0),
        CelestialBody::at_longitude("t_Venus", 182.0),
    ];

    let aspects = detect_cross_aspects(&natal, &transit, &config);

    assert_eq!(aspects.len(), 4);
    for aspect in &aspects {
        assert_eq!(aspect.kind, AspectKind::Opposition);
        assert!(!aspect.body_a.starts_with("t_"));
        assert!(aspect.body_b.starts_with("t_"));
    }
    assert!(!aspects
        .iter()
        .any(|a| a.pair() == PairKey::new("Sun", "Moon")));
}
