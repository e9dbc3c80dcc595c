pub mod question;

pub use question::{ErrorBody, ExtractResponse, QuestionOption, QuestionRecord};
