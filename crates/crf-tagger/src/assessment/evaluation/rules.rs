use super::super::domain::{ActivityLevel, AnswerSet, Breathlessness, StairTolerance};
use super::{ScoreBreakdown, ScoreComponent, ScoreFactor};

/// Lowest score the screening can produce. There is no ceiling.
pub const SCORE_FLOOR: i32 = -2;

/// Screening score for a validated answer set. Higher means more signs of lower fitness.
pub fn score(answers: &AnswerSet) -> i32 {
    score_breakdown(answers).score
}

pub fn score_breakdown(answers: &AnswerSet) -> ScoreBreakdown {
    let components = vec![
        age_component(answers.age),
        activity_component(answers.activity),
        breath_component(answers.breath),
        stairs_component(answers.stairs),
    ];

    let raw_total: i32 = components.iter().map(|component| component.points).sum();

    ScoreBreakdown {
        components,
        raw_total,
        score: raw_total.max(SCORE_FLOOR),
    }
}

fn age_component(age: u32) -> ScoreComponent {
    // first matching bracket wins; brackets never stack
    let (points, notes) = if age >= 70 {
        (4, "age 70 or over".to_string())
    } else if age >= 60 {
        (3, "age 60 to 69".to_string())
    } else if age >= 50 {
        (2, "age 50 to 59".to_string())
    } else if age >= 40 {
        (1, "age 40 to 49".to_string())
    } else {
        (0, "age under 40".to_string())
    };

    ScoreComponent {
        factor: ScoreFactor::Age,
        points,
        notes,
    }
}

fn activity_component(activity: ActivityLevel) -> ScoreComponent {
    let (points, notes) = match activity {
        ActivityLevel::Guidelines => (-1, "meets general activity guidelines"),
        ActivityLevel::High => (-2, "very active"),
        ActivityLevel::Low => (2, "mostly inactive"),
        ActivityLevel::Some => (0, "active one or two days a week"),
        ActivityLevel::Unrecognized => (0, "unrecognized activity answer"),
    };

    ScoreComponent {
        factor: ScoreFactor::Activity,
        points,
        notes: notes.to_string(),
    }
}

fn breath_component(breath: Breathlessness) -> ScoreComponent {
    let (points, notes) = match breath {
        Breathlessness::VeryHard => (3, "brisk walk feels very hard"),
        Breathlessness::SomewhatHard => (1, "brisk walk feels somewhat hard"),
        Breathlessness::Comfortable => (-1, "brisk walk feels comfortable"),
        Breathlessness::Unrecognized => (0, "unrecognized breathlessness answer"),
    };

    ScoreComponent {
        factor: ScoreFactor::Breathlessness,
        points,
        notes: notes.to_string(),
    }
}

fn stairs_component(stairs: StairTolerance) -> ScoreComponent {
    let (points, notes) = match stairs {
        StairTolerance::Struggle => (3, "struggles with a flight of stairs"),
        StairTolerance::Ok => (1, "somewhat winded on a flight of stairs"),
        StairTolerance::Easy => (-1, "climbs a flight of stairs comfortably"),
        StairTolerance::Unrecognized => (0, "unrecognized stairs answer"),
    };

    ScoreComponent {
        factor: ScoreFactor::Stairs,
        points,
        notes: notes.to_string(),
    }
}
