pub mod cli;
pub mod common;
pub mod parser;
pub mod scout;

pub use common::api::client::YoutubeClient;
pub use common::api::provider::SearchProvider;
pub use parser::{
    extract_identifier, format_duration, parse_duration, to_iso, ParseError, VideoId,
};
