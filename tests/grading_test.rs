use quiz_backend::models::answer::Answer;
use quiz_backend::models::option::AnswerOption;
use quiz_backend::models::question::{Question, QuestionType, QuestionWithOptions};
use quiz_backend::services::grading_service::GradingService;

fn option(id: i64, question_id: i64, content: &str, correct: bool) -> AnswerOption {
    AnswerOption {
        id,
        question_id,
        content: content.to_string(),
        correct,
        created_at: None,
        updated_at: None,
    }
}

fn question(id: i64, qtype: QuestionType, options: Vec<AnswerOption>) -> QuestionWithOptions {
    QuestionWithOptions {
        question: Question {
            id,
            quiz_id: 1,
            context: format!("question {}", id),
            qtype,
            created_at: None,
            updated_at: None,
        },
        options,
    }
}

fn answer(id: i64, question_id: i64, response: &str) -> Answer {
    Answer {
        id,
        attempt_id: 1,
        question_id,
        response: Some(response.to_string()),
        created_at: None,
        updated_at: None,
    }
}

fn capital_question(question_id: i64) -> QuestionWithOptions {
    question(
        question_id,
        QuestionType::Mcq,
        vec![
            option(1, question_id, "Paris", true),
            option(2, question_id, "Rome", false),
        ],
    )
}

#[test]
fn mcq_correct_option_earns_the_point() {
    let questions = vec![capital_question(10)];
    let answers = vec![answer(1, 10, "1")];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 1);
}

#[test]
fn mcq_wrong_option_earns_nothing() {
    let questions = vec![capital_question(10)];
    let answers = vec![answer(1, 10, "2")];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 0);
}

#[test]
fn unresolvable_option_id_is_just_a_wrong_answer() {
    let questions = vec![capital_question(10)];

    for response in ["999", "paris", "", "  ", "1.5"] {
        let answers = vec![answer(1, 10, response)];
        assert_eq!(
            GradingService::score_attempt(&questions, &answers),
            0,
            "response {:?} must not score",
            response
        );
    }
}

#[test]
fn option_belonging_to_another_question_does_not_count() {
    let first = capital_question(10);
    // Second question's correct option has id 3; answering question 10 with
    // it must not score even though some option with that id is correct.
    let second = question(
        11,
        QuestionType::Mcq,
        vec![
            option(3, 11, "Madrid", true),
            option(4, 11, "Lisbon", false),
        ],
    );
    let questions = vec![first, second];
    let answers = vec![answer(1, 10, "3")];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 0);
}

#[test]
fn true_false_grades_by_selected_option() {
    let questions = vec![question(
        20,
        QuestionType::TrueFalse,
        vec![
            option(5, 20, "True", true),
            option(6, 20, "False", false),
        ],
    )];

    assert_eq!(
        GradingService::score_attempt(&questions, &[answer(1, 20, "5")]),
        1
    );
    assert_eq!(
        GradingService::score_attempt(&questions, &[answer(1, 20, "6")]),
        0
    );
}

#[test]
fn text_match_is_trimmed_and_case_insensitive() {
    let questions = vec![question(
        30,
        QuestionType::Text,
        vec![option(7, 30, "Blue", true)],
    )];

    assert_eq!(
        GradingService::score_attempt(&questions, &[answer(1, 30, " blue ")]),
        1
    );
    assert_eq!(
        GradingService::score_attempt(&questions, &[answer(1, 30, "BLUE")]),
        1
    );
    assert_eq!(
        GradingService::score_attempt(&questions, &[answer(1, 30, "Red")]),
        0
    );
}

#[test]
fn text_question_without_answer_key_never_scores() {
    // Zero options means grading was intentionally left manual.
    let questions = vec![question(30, QuestionType::Text, vec![])];
    let answers = vec![answer(1, 30, "anything")];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 0);
}

#[test]
fn unanswered_questions_contribute_zero_without_error() {
    let second = question(
        11,
        QuestionType::Mcq,
        vec![
            option(3, 11, "Madrid", true),
            option(4, 11, "Lisbon", false),
        ],
    );
    let questions = vec![capital_question(10), second];
    let answers = vec![answer(1, 10, "1")];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 1);
}

#[test]
fn null_response_is_not_correct() {
    let questions = vec![capital_question(10)];
    let answers = vec![Answer {
        id: 1,
        attempt_id: 1,
        question_id: 10,
        response: None,
        created_at: None,
        updated_at: None,
    }];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 0);
}

#[test]
fn duplicate_answers_resolve_to_the_lowest_id() {
    let questions = vec![capital_question(10)];
    // The later (higher-id) answer is the correct one, but the earliest
    // submission is the one that counts — regardless of list order.
    let answers = vec![answer(2, 10, "1"), answer(1, 10, "2")];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 0);
}

#[test]
fn grading_is_order_independent() {
    let q1 = capital_question(10);
    let q2 = question(
        11,
        QuestionType::Text,
        vec![option(9, 11, "Blue", true)],
    );
    let a1 = answer(1, 10, "1");
    let a2 = answer(2, 11, "blue");

    let forward =
        GradingService::score_attempt(&[q1.clone(), q2.clone()], &[a1.clone(), a2.clone()]);
    let reversed = GradingService::score_attempt(&[q2, q1], &[a2, a1]);

    assert_eq!(forward, 2);
    assert_eq!(forward, reversed);
}

#[test]
fn grading_is_idempotent() {
    let questions = vec![capital_question(10)];
    let answers = vec![answer(1, 10, "1")];

    let first = GradingService::score_attempt(&questions, &answers);
    let second = GradingService::score_attempt(&questions, &answers);

    assert_eq!(first, second);
}

#[test]
fn score_never_exceeds_the_question_count() {
    let questions = vec![capital_question(10)];
    // Several answers to the same question still contribute at most 1.
    let answers = vec![answer(1, 10, "1"), answer(2, 10, "1"), answer(3, 10, "1")];

    assert_eq!(GradingService::score_attempt(&questions, &answers), 1);
}

#[test]
fn empty_quiz_scores_zero() {
    assert_eq!(GradingService::score_attempt(&[], &[answer(1, 10, "1")]), 0);
}
