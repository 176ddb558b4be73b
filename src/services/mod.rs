pub mod attempt_service;
pub mod grading_service;
pub mod question_service;
pub mod quiz_service;
pub mod validation_service;
