use crate::assessment::domain::{FitnessLevel, FitnessTier};
use crate::assessment::evaluation::classify;

#[test]
fn boundaries_are_exact() {
    let cases = [
        (-2, FitnessLevel::VeryHigh),
        (0, FitnessLevel::VeryHigh),
        (1, FitnessLevel::High),
        (4, FitnessLevel::High),
        (5, FitnessLevel::Moderate),
        (8, FitnessLevel::Moderate),
        (9, FitnessLevel::Low),
        (12, FitnessLevel::Low),
    ];

    for (score, level) in cases {
        assert_eq!(classify(score).level, level, "score {score}");
    }
}

#[test]
fn classification_is_total_over_integers() {
    assert_eq!(classify(i32::MIN).level, FitnessLevel::VeryHigh);
    assert_eq!(classify(i32::MAX).level, FitnessLevel::Low);
}

#[test]
fn every_score_lands_inside_its_level_range() {
    for score in -10..=20 {
        let level = classify(score).level;
        let (low, high) = level.score_range();
        assert!(low.map_or(true, |bound| score >= bound), "score {score}");
        assert!(high.map_or(true, |bound| score <= bound), "score {score}");
    }
}

#[test]
fn tiers_carry_labels_and_descriptions() {
    assert_eq!(classify(0).label, "Very High / Excellent CRF");
    assert_eq!(classify(2).label, "Good CRF");
    assert_eq!(classify(6).label, "Moderate CRF");
    assert_eq!(classify(10).label, "Lower CRF Indication");

    for level in FitnessLevel::ALL {
        let tier = FitnessTier::for_level(level);
        assert_eq!(tier.level, level);
        assert!(!tier.label.is_empty());
        assert!(tier.description.ends_with('.'));
    }
}

#[test]
fn levels_are_ordered_best_to_worst() {
    assert!(FitnessLevel::VeryHigh < FitnessLevel::High);
    assert!(FitnessLevel::High < FitnessLevel::Moderate);
    assert!(FitnessLevel::Moderate < FitnessLevel::Low);
}

#[test]
fn level_names_round_trip_through_from_str() {
    for level in FitnessLevel::ALL {
        assert_eq!(level.as_str().parse::<FitnessLevel>(), Ok(level));
    }
    assert!("VeryHigh".parse::<FitnessLevel>().is_err());
    assert!("excellent".parse::<FitnessLevel>().is_err());
}
