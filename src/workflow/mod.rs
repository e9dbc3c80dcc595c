pub mod extract_flow;

pub use extract_flow::QuestionExtractor;
