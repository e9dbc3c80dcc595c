pub mod html_text;
pub mod page_fetcher;
pub mod question_writer;

pub use page_fetcher::PageFetcher;
pub use question_writer::QuestionWriter;
