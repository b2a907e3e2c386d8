pub mod explain;
pub mod synthesis;

pub use explain::{ExplainFlow, EXPLAIN_ERROR_SENTINEL};
pub use synthesis::{fallback_question, SynthesisFlow};
