use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::errors::ParseError;

lazy_static! {
    static ref VIDEO_ID_PATTERN: Regex = Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap();
}

/// 平台的11位视频ID，字符集为 `[0-9A-Za-z_-]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// 校验并构造视频ID
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ParseError::NotFound(raw.to_string()))
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        VIDEO_ID_PATTERN.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
