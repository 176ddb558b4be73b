pub mod answer;
pub mod attempt;
pub mod option;
pub mod question;
pub mod quiz;
