use serde::Serialize;

use crate::dto::question_dto::OptionPayload;
use crate::models::question::QuestionType;

pub const TRUE_FALSE_OPTION_COUNT: usize = 2;
pub const MCQ_MIN_OPTION_COUNT: usize = 2;
pub const TEXT_MAX_OPTION_COUNT: usize = 1;

/// A structural rule a question write can break. Every broken rule is
/// reported, not just the first one found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    InvalidQuestionType,
    MissingContext,
    WrongOptionCount,
    TooFewOptions,
    NoCorrectOption,
    TooManyOptions,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidQuestionType => "qtype must be one of true_false, mcq or text",
            Self::MissingContext => "context can't be blank",
            Self::WrongOptionCount => "options must have exactly 2 options for true/false questions",
            Self::TooFewOptions => "options must have at least 2 options for MCQ questions",
            Self::NoCorrectOption => "options must have at least one correct option for MCQ questions",
            Self::TooManyOptions => "text questions can have at most 1 option (the correct answer)",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(Violation::message).collect()
    }
}

pub struct ValidationService;

impl ValidationService {
    /// Structural validation of a question write. `options` is the full
    /// candidate set that will be persisted alongside the question, including
    /// options that do not exist yet. Returns the parsed type on success so
    /// callers never re-parse the raw string.
    ///
    /// The unknown-type check stands in for the shape rules when it fires:
    /// there is no shape to check against an unknown type.
    pub fn validate_question(
        raw_qtype: &str,
        context: &str,
        options: &[OptionPayload],
    ) -> Result<QuestionType, ValidationReport> {
        let mut report = ValidationReport::default();

        if context.trim().is_empty() {
            report.push(Violation::MissingContext);
        }

        let qtype = QuestionType::parse(raw_qtype);
        match qtype {
            None => report.push(Violation::InvalidQuestionType),
            Some(QuestionType::TrueFalse) => {
                // Count is the only rule for true/false; a pair where zero or
                // both options are flagged correct still passes.
                if options.len() != TRUE_FALSE_OPTION_COUNT {
                    report.push(Violation::WrongOptionCount);
                }
            }
            Some(QuestionType::Mcq) => {
                if options.len() < MCQ_MIN_OPTION_COUNT {
                    report.push(Violation::TooFewOptions);
                }
                if !options.iter().any(|o| o.correct) {
                    report.push(Violation::NoCorrectOption);
                }
            }
            Some(QuestionType::Text) => {
                if options.len() > TEXT_MAX_OPTION_COUNT {
                    report.push(Violation::TooManyOptions);
                }
            }
        }

        match qtype {
            Some(parsed) if report.is_valid() => Ok(parsed),
            _ => Err(report),
        }
    }
}
