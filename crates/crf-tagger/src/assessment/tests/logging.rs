use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use super::common::*;
use crate::assessment::batch::AnswerSheetImporter;
use crate::assessment::domain::AgeInput;
use crate::assessment::evaluate;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("utf8 logs")
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(action: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, action);
    logs.contents()
}

#[test]
fn rejected_age_is_not_logged() {
    let logs = capture(|| {
        let mut submission = default_submission(40);
        submission.age = AgeInput::from("15 years old, secret");
        assert!(evaluate(submission).is_err());
    });

    assert!(logs.contains("invalid_age"), "logs: {logs}");
    assert!(!logs.contains("secret"), "logs: {logs}");
    assert!(!logs.contains("15 years old"), "logs: {logs}");
}

#[test]
fn rejected_sheet_rows_log_only_the_reason() {
    let sheet = "age,sex,activity,breath,stairs
41,private-answer,some,comfortable,easy
9,female,some,comfortable,easy
";
    let logs = capture(|| {
        let report = AnswerSheetImporter::from_reader(Cursor::new(sheet)).expect("sheet parses");
        assert_eq!(report.summary().rejected, 2);
    });

    assert!(logs.contains("unknown_sex"), "logs: {logs}");
    assert!(logs.contains("invalid_age"), "logs: {logs}");
    assert!(!logs.contains("private-answer"), "logs: {logs}");
    assert!(!logs.contains("age=9"), "logs: {logs}");
}

#[test]
fn evaluated_answers_are_not_logged() {
    let logs = capture(|| {
        let result = evaluate(default_submission(73)).expect("valid submission");
        assert_eq!(result.answers.age, 73);
    });

    assert!(logs.contains("questionnaire evaluated"), "logs: {logs}");
    assert!(!logs.contains("73"), "logs: {logs}");
    assert!(!logs.contains("somewhatHard"), "logs: {logs}");
}
