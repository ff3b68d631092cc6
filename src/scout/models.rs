use crate::common::models::VideoReport;

/// 热门题材检索的条件
#[derive(Debug, Clone)]
pub struct ViralQuery {
    pub keywords: Vec<String>,
    pub days: u32,            // 只看最近几天发布的视频
    pub min_minutes: u32,     // 最短时长（分钟）
    pub max_subscribers: u64, // 频道订阅数上限（不含）
    pub per_keyword: u32,     // 每个关键词取几条搜索结果
}

impl Default for ViralQuery {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            days: 5,
            min_minutes: 20,
            max_subscribers: 3000,
            per_keyword: 5,
        }
    }
}

impl ViralQuery {
    pub fn min_seconds(&self) -> u64 {
        u64::from(self.min_minutes) * 60
    }

    // 订阅数与时长两个阈值
    pub fn accepts(&self, subscribers: u64, duration_seconds: u64) -> bool {
        subscribers < self.max_subscribers && duration_seconds >= self.min_seconds()
    }
}

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "Life Million Years Ago",
    "King Kong",
    "Beauty",
    "Prehistoric Girl",
    "Survival",
    "Primitive Girl",
    "Albino Gorilla",
    "Spider-Man",
    "Hulk",
    "Joker",
    "Supergirl",
    "Thor",
    "She-Hulk",
    "Dinosaur",
    "Megalodon",
    "Jungle Survival",
    "Wild Survival",
    "Ancient Humans",
    "Early Humans",
    "Human Evolution",
    "Marvel AI",
    "Venom",
    "Wonder Woman",
    "Catwoman",
    "Black Widow",
    "Superhero Battle",
    "Monster Battle",
    "Prehistoric Love Story",
    "Gorilla and Girl",
    "Jurassic World",
    "KPOP Demon Hunters",
];

/// 被跳过的关键词及原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedKeyword {
    pub keyword: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ViralOutcome {
    pub reports: Vec<VideoReport>,
    pub skipped: Vec<SkippedKeyword>,
}

#[derive(Debug, Clone)]
pub struct SimilarOutcome {
    pub original: VideoReport,
    pub similar: Vec<VideoReport>,
}
