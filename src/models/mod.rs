pub mod question;

pub use question::{QuizQuestion, RawCandidate};
