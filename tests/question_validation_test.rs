use quiz_backend::dto::question_dto::OptionPayload;
use quiz_backend::models::question::QuestionType;
use quiz_backend::services::validation_service::{ValidationService, Violation};

fn options(specs: &[(&str, bool)]) -> Vec<OptionPayload> {
    specs
        .iter()
        .map(|(content, correct)| OptionPayload {
            content: content.to_string(),
            correct: *correct,
        })
        .collect()
}

#[test]
fn true_false_requires_exactly_two_options() {
    for set in [
        options(&[("True", true)]),
        options(&[("True", true), ("False", false), ("Maybe", false)]),
        options(&[]),
    ] {
        let report = ValidationService::validate_question("true_false", "Sky is blue?", &set)
            .unwrap_err();
        assert!(report.contains(Violation::WrongOptionCount));
    }
}

#[test]
fn true_false_does_not_require_a_correct_option() {
    // A pair where neither option is flagged correct is accepted; only the
    // count is checked for this type.
    let set = options(&[("True", false), ("False", false)]);
    let parsed = ValidationService::validate_question("true_false", "Sky is blue?", &set);

    assert_eq!(parsed.unwrap(), QuestionType::TrueFalse);
}

#[test]
fn mcq_single_incorrect_option_reports_both_violations() {
    let set = options(&[("A", false)]);
    let report = ValidationService::validate_question("mcq", "Pick one", &set).unwrap_err();

    assert!(report.contains(Violation::TooFewOptions));
    assert!(report.contains(Violation::NoCorrectOption));
    assert_eq!(report.violations().len(), 2);
}

#[test]
fn mcq_needs_at_least_one_correct_option() {
    let set = options(&[("A", false), ("B", false), ("C", false)]);
    let report = ValidationService::validate_question("mcq", "Pick one", &set).unwrap_err();

    assert_eq!(report.violations(), &[Violation::NoCorrectOption]);
}

#[test]
fn mcq_with_two_options_and_a_correct_one_is_valid() {
    let set = options(&[("Paris", true), ("Rome", false)]);
    let parsed = ValidationService::validate_question("mcq", "Capital of France?", &set);

    assert_eq!(parsed.unwrap(), QuestionType::Mcq);
}

#[test]
fn text_allows_at_most_one_option() {
    let valid_empty = ValidationService::validate_question("text", "Favourite colour?", &[]);
    assert_eq!(valid_empty.unwrap(), QuestionType::Text);

    let valid_one = ValidationService::validate_question(
        "text",
        "Favourite colour?",
        &options(&[("Blue", true)]),
    );
    assert_eq!(valid_one.unwrap(), QuestionType::Text);

    let report = ValidationService::validate_question(
        "text",
        "Favourite colour?",
        &options(&[("Blue", true), ("Red", false)]),
    )
    .unwrap_err();
    assert_eq!(report.violations(), &[Violation::TooManyOptions]);
}

#[test]
fn text_option_correct_flag_is_irrelevant() {
    let set = options(&[("Blue", false)]);
    let parsed = ValidationService::validate_question("text", "Favourite colour?", &set);

    assert_eq!(parsed.unwrap(), QuestionType::Text);
}

#[test]
fn unknown_qtype_is_rejected() {
    for raw in ["essay", "TRUE_FALSE", "Mcq", ""] {
        let report = ValidationService::validate_question(raw, "Prompt", &[]).unwrap_err();
        assert!(
            report.contains(Violation::InvalidQuestionType),
            "qtype {:?} must be rejected",
            raw
        );
    }
}

#[test]
fn blank_context_is_rejected() {
    let set = options(&[("True", true), ("False", false)]);

    for context in ["", "   ", "\t\n"] {
        let report =
            ValidationService::validate_question("true_false", context, &set).unwrap_err();
        assert_eq!(report.violations(), &[Violation::MissingContext]);
    }
}

#[test]
fn independent_violations_are_reported_together() {
    let report = ValidationService::validate_question("riddle", "  ", &[]).unwrap_err();

    assert!(report.contains(Violation::InvalidQuestionType));
    assert!(report.contains(Violation::MissingContext));
}

#[test]
fn report_carries_a_message_per_violation() {
    let report =
        ValidationService::validate_question("mcq", "Pick one", &options(&[("A", false)]))
            .unwrap_err();

    assert!(!report.is_valid());
    assert_eq!(report.messages().len(), report.violations().len());
}
