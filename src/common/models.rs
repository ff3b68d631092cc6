use std::fmt;

use crate::parser::{format_duration, parse_duration};

// -----------------------------------------------------------------------------------------------

/// 搜索结果中的一条视频
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub video_id: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
}

/// 视频详情（统计 + 时长）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_id: String,
    pub view_count: u64,
    pub duration: String, // ISO-8601, 例如 PT15M33S
}

impl VideoDetails {
    pub fn duration_seconds(&self) -> u64 {
        parse_duration(&self.duration)
    }
}

/// 频道统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStats {
    pub id: String,
    pub subscriber_count: u64,
}

// -----------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    Relevance,
    ViewCount,
}

impl SearchOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::ViewCount => "viewCount",
        }
    }
}

// -----------------------------------------------------------------------------------------------

const DESCRIPTION_LIMIT: usize = 200;

/// 最终展示给用户的一条视频
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReport {
    pub title: String,
    pub description: String,
    pub url: String,
    pub views: Option<u64>,
    pub subscribers: Option<u64>,
    pub duration_seconds: Option<u64>,
    pub duration: Option<String>,
}

impl VideoReport {
    /// 只有搜索结果时（没有统计数据）
    pub fn from_hit(hit: &SearchHit) -> Self {
        Self {
            title: hit.title.clone(),
            description: truncate_chars(&hit.description, DESCRIPTION_LIMIT),
            url: watch_url(&hit.video_id),
            views: None,
            subscribers: None,
            duration_seconds: None,
            duration: None,
        }
    }

    pub fn from_details(details: &VideoDetails, subscribers: Option<u64>) -> Self {
        let seconds = details.duration_seconds();
        Self {
            title: details.title.clone(),
            description: truncate_chars(&details.description, DESCRIPTION_LIMIT),
            url: watch_url(&details.id),
            views: Some(details.view_count),
            subscribers,
            duration_seconds: Some(seconds),
            duration: Some(format_duration(seconds)),
        }
    }
}

impl fmt::Display for VideoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.url)
    }
}

fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

// 按字符截断，避免切断多字节字符
pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
