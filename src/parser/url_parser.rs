use super::errors::ParseError;
use super::models::VideoId;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 按顺序尝试，先匹配到的为准
    static ref ANCHOR_PATTERNS: Vec<Regex> = vec![
        // watch?v=ID, /embed/ID, /v/ID, /shorts/ID
        Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap(),

        // youtu.be 短链
        Regex::new(r"youtu\.be/([0-9A-Za-z_-]{11})").unwrap(),
    ];
}

/// 从裸ID或链接中提取视频ID
///
/// 输入首尾空白会被忽略。恰好11位合法字符时直接当作ID返回，
/// 否则依次尝试锚点规则，都失败时返回 [`ParseError::NotFound`]。
pub fn extract_identifier(input: &str) -> Result<VideoId, ParseError> {
    let input = input.trim();

    if VideoId::is_valid(input) {
        return VideoId::parse(input);
    }

    for pattern in ANCHOR_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(input) {
            return VideoId::parse(&caps[1]);
        }
    }

    Err(ParseError::NotFound(input.to_string()))
}
