mod discover;
mod error;
mod reader;


pub use discover::{LogFile, find_latest_log};
pub use error::SourceError;
pub use reader::open_log;
