use crate::assessment::domain::{
    ActivityLevel, AgeInput, AnswerSet, AnswerSubmission, Breathlessness, Sex, StairTolerance,
};

pub(super) const ALL_ACTIVITY: [ActivityLevel; 4] = [
    ActivityLevel::Low,
    ActivityLevel::Some,
    ActivityLevel::Guidelines,
    ActivityLevel::High,
];

pub(super) const ALL_BREATH: [Breathlessness; 3] = [
    Breathlessness::Comfortable,
    Breathlessness::SomewhatHard,
    Breathlessness::VeryHard,
];

pub(super) const ALL_STAIRS: [StairTolerance; 3] = [
    StairTolerance::Easy,
    StairTolerance::Ok,
    StairTolerance::Struggle,
];

pub(super) fn answers(
    age: u32,
    activity: ActivityLevel,
    breath: Breathlessness,
    stairs: StairTolerance,
) -> AnswerSet {
    AnswerSet {
        age,
        sex: Sex::Female,
        activity,
        breath,
        stairs,
    }
}

/// The questionnaire's initial selections with the given age.
pub(super) fn default_submission(age: u32) -> AnswerSubmission {
    AnswerSubmission {
        age: AgeInput::from(age),
        sex: Sex::Female,
        activity: ActivityLevel::Some,
        breath: Breathlessness::SomewhatHard,
        stairs: StairTolerance::Ok,
    }
}
