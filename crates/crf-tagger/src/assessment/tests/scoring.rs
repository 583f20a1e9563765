use super::common::*;
use crate::assessment::domain::{ActivityLevel, Breathlessness, Sex, StairTolerance};
use crate::assessment::evaluation::{score, score_breakdown, ScoreFactor, SCORE_FLOOR};

fn factor_points(
    breakdown: &crate::assessment::evaluation::ScoreBreakdown,
    factor: ScoreFactor,
) -> i32 {
    breakdown
        .components
        .iter()
        .find(|component| component.factor == factor)
        .map(|component| component.points)
        .expect("factor present")
}

#[test]
fn age_brackets_take_the_first_matching_threshold() {
    let cases = [
        (16, 0),
        (39, 0),
        (40, 1),
        (49, 1),
        (50, 2),
        (59, 2),
        (60, 3),
        (65, 3),
        (69, 3),
        (70, 4),
        (95, 4),
    ];

    for (age, expected) in cases {
        let breakdown = score_breakdown(&answers(
            age,
            ActivityLevel::Some,
            Breathlessness::SomewhatHard,
            StairTolerance::Ok,
        ));
        assert_eq!(
            factor_points(&breakdown, ScoreFactor::Age),
            expected,
            "age {age}"
        );
    }
}

#[test]
fn answer_contributions_follow_the_rubric() {
    let activity = [
        (ActivityLevel::Guidelines, -1),
        (ActivityLevel::High, -2),
        (ActivityLevel::Low, 2),
        (ActivityLevel::Some, 0),
    ];
    for (answer, expected) in activity {
        let breakdown = score_breakdown(&answers(
            30,
            answer,
            Breathlessness::SomewhatHard,
            StairTolerance::Ok,
        ));
        assert_eq!(factor_points(&breakdown, ScoreFactor::Activity), expected);
    }

    let breath = [
        (Breathlessness::VeryHard, 3),
        (Breathlessness::SomewhatHard, 1),
        (Breathlessness::Comfortable, -1),
    ];
    for (answer, expected) in breath {
        let breakdown =
            score_breakdown(&answers(30, ActivityLevel::Some, answer, StairTolerance::Ok));
        assert_eq!(
            factor_points(&breakdown, ScoreFactor::Breathlessness),
            expected
        );
    }

    let stairs = [
        (StairTolerance::Struggle, 3),
        (StairTolerance::Ok, 1),
        (StairTolerance::Easy, -1),
    ];
    for (answer, expected) in stairs {
        let breakdown = score_breakdown(&answers(
            30,
            ActivityLevel::Some,
            Breathlessness::SomewhatHard,
            answer,
        ));
        assert_eq!(factor_points(&breakdown, ScoreFactor::Stairs), expected);
    }
}

#[test]
fn unrecognized_answers_are_neutral() {
    let breakdown = score_breakdown(&answers(
        30,
        ActivityLevel::Unrecognized,
        Breathlessness::Unrecognized,
        StairTolerance::Unrecognized,
    ));

    assert_eq!(breakdown.raw_total, 0);
    assert_eq!(breakdown.score, 0);
    assert!(breakdown
        .components
        .iter()
        .all(|component| component.points == 0));
}

#[test]
fn score_is_floored_at_minus_two() {
    let breakdown = score_breakdown(&answers(
        45,
        ActivityLevel::High,
        Breathlessness::Comfortable,
        StairTolerance::Easy,
    ));

    assert_eq!(breakdown.raw_total, -3);
    assert_eq!(breakdown.score, SCORE_FLOOR);
}

#[test]
fn floor_holds_for_every_answer_combination() {
    for age in [16, 39, 40, 50, 60, 70, 100] {
        for activity in ALL_ACTIVITY {
            for breath in ALL_BREATH {
                for stairs in ALL_STAIRS {
                    let value = score(&answers(age, activity, breath, stairs));
                    assert!(value >= SCORE_FLOOR, "score {value} below floor");
                }
            }
        }
    }
}

#[test]
fn there_is_no_upper_clamp() {
    let value = score(&answers(
        80,
        ActivityLevel::Low,
        Breathlessness::VeryHard,
        StairTolerance::Struggle,
    ));
    assert_eq!(value, 12);
}

#[test]
fn each_factor_is_monotonic_in_isolation() {
    let base = |breath, stairs| answers(55, ActivityLevel::Some, breath, stairs);

    let comfortable = score(&base(Breathlessness::Comfortable, StairTolerance::Ok));
    let somewhat = score(&base(Breathlessness::SomewhatHard, StairTolerance::Ok));
    let very = score(&base(Breathlessness::VeryHard, StairTolerance::Ok));
    assert!(very > somewhat && somewhat > comfortable);

    let easy = score(&base(Breathlessness::SomewhatHard, StairTolerance::Easy));
    let ok = score(&base(Breathlessness::SomewhatHard, StairTolerance::Ok));
    let struggle = score(&base(Breathlessness::SomewhatHard, StairTolerance::Struggle));
    assert!(struggle > ok && ok > easy);

    let activity = |level| {
        score(&answers(
            55,
            level,
            Breathlessness::SomewhatHard,
            StairTolerance::Ok,
        ))
    };
    assert!(activity(ActivityLevel::Low) > activity(ActivityLevel::Some));
    assert!(activity(ActivityLevel::Some) > activity(ActivityLevel::Guidelines));
    assert!(activity(ActivityLevel::Guidelines) > activity(ActivityLevel::High));
}

#[test]
fn sex_never_changes_the_score() {
    let mut set = answers(
        62,
        ActivityLevel::Low,
        Breathlessness::VeryHard,
        StairTolerance::Ok,
    );
    let baseline = score(&set);

    for sex in [Sex::Female, Sex::Male, Sex::Other] {
        set.sex = sex;
        assert_eq!(score(&set), baseline);
    }
}
