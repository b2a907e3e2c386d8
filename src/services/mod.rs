pub mod prompt_builder;
pub mod question_bank;
pub mod shuffler;
pub mod topic_catalog;
pub mod validator;

pub use question_bank::QuestionBank;
