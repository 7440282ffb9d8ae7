//! CLI integration tests using assert_cmd.

use std::collections::HashMap;

use assert_cmd::Command;
use formgen_core::model::{Answer, CorrectAnswer, Form, Question, QuestionType};
use predicates::prelude::*;
use tempfile::TempDir;

fn formgen() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("formgen").unwrap()
}

fn quiz_fixture(dir: &TempDir) -> std::path::PathBuf {
    let mut form = Form::new("Capitals quiz");
    form.settings.is_quiz = true;

    let mut q = Question::new(QuestionType::MultipleChoice, "Capital of France?");
    q.options = vec!["Paris".into(), "Rome".into()];
    q.correct_answer = Some(CorrectAnswer::One("Paris".into()));
    q.points = 1;
    let qid = q.id.clone();
    form.questions.push(q);

    for answer in ["Paris", "Paris", "Rome"] {
        let mut answers = HashMap::new();
        answers.insert(qid.clone(), Answer::Text(answer.into()));
        let response = form.build_response(answers, Some("r@example.test".into()));
        form.responses.push(response);
    }

    let path = dir.path().join("quiz.json");
    form.save_json(&path).unwrap();
    path
}

#[test]
fn parse_prints_inferred_questions() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("questions.txt");
    std::fs::write(&input, "Name? John, Mike, Queen\nTell us about yourself\n").unwrap();

    formgen()
        .arg("parse")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("multiple_choice"))
        .stdout(predicate::str::contains("short_answer"))
        .stdout(predicate::str::contains("John, Mike, Queen"));
}

#[test]
fn parse_reports_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.txt");
    std::fs::write(&input, "   \n  \n").unwrap();

    formgen()
        .arg("parse")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions detected."));
}

#[test]
fn parse_writes_a_loadable_form() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("questions.txt");
    let output = dir.path().join("form.json");
    std::fs::write(&input, "Favorite color? Red, Blue\n").unwrap();

    formgen()
        .arg("parse")
        .arg("--input")
        .arg(&input)
        .arg("--title")
        .arg("Color survey")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 question(s)"));

    formgen()
        .arg("validate")
        .arg("--form")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Color survey"))
        .stdout(predicate::str::contains("Form is valid."));
}

#[test]
fn parse_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("questions.txt");
    std::fs::write(&input, "Name?\n").unwrap();

    formgen()
        .arg("parse")
        .arg("--input")
        .arg(&input)
        .arg("--mode")
        .arg("fancy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown parse mode"));
}

#[test]
fn validate_flags_ungradable_points() {
    let dir = TempDir::new().unwrap();

    let mut form = Form::new("Broken quiz");
    form.settings.is_quiz = true;
    let mut q = Question::new(QuestionType::ShortAnswer, "Essay?");
    q.points = 5;
    form.questions.push(q);

    let path = dir.path().join("form.json");
    form.save_json(&path).unwrap();

    formgen()
        .arg("validate")
        .arg("--form")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("without ever being gradable"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn summarize_prints_counts_and_quiz_average() {
    let dir = TempDir::new().unwrap();
    let path = quiz_fixture(&dir);

    formgen()
        .arg("summarize")
        .arg("--form")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total responses: 3"))
        .stdout(predicate::str::contains("Average score: 1 / 1 (100%)"))
        .stdout(predicate::str::contains("Paris"));
}

#[test]
fn summarize_emits_json() {
    let dir = TempDir::new().unwrap();
    let path = quiz_fixture(&dir);

    formgen()
        .arg("summarize")
        .arg("--form")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_responses\": 3"))
        .stdout(predicate::str::contains("\"percentage\": 67"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let path = quiz_fixture(&dir);
    let csv_path = dir.path().join("responses.csv");

    formgen()
        .arg("export")
        .arg("--form")
        .arg(&path)
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 response(s)"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "\"Timestamp\",\"Email\",\"Capital of France?\""
    );
    assert_eq!(lines.count(), 3);
}

#[test]
fn export_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = quiz_fixture(&dir);

    formgen()
        .arg("export")
        .arg("--form")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Timestamp\",\"Email\""))
        .stdout(predicate::str::contains("\"r@example.test\""));
}

#[test]
fn missing_form_file_fails() {
    formgen()
        .arg("validate")
        .arg("--form")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
