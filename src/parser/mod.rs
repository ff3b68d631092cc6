pub mod duration;
pub mod errors;
pub mod models;
pub mod url_parser;

pub use duration::{format_duration, parse_duration, to_iso};
pub use errors::ParseError;
pub use models::VideoId;
pub use url_parser::extract_identifier;
