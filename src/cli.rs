use clap::{Parser, Subcommand};

use crate::common::api::client::DEFAULT_API_BASE;
use crate::scout::models::{ViralQuery, DEFAULT_KEYWORDS};
use crate::scout::ScoutError;

#[derive(Parser, Debug)]
#[command(name = "ytscout")]
#[command(about = "检索YouTube热门题材与同类视频", long_about = None)]
pub struct Cli {
    /// YouTube Data API 密钥
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API 地址 (可选)
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// 输出调试日志
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 按关键词检索小频道的近期长视频
    Viral(ViralArgs),

    /// 根据一个视频链接查找同类视频
    Similar(SimilarArgs),
}

#[derive(clap::Args, Debug)]
pub struct ViralArgs {
    #[arg(long, default_value_t = 5)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=30))]
    #[arg(help = "检索最近几天发布的视频 (1-30)")]
    pub days: u32,

    #[arg(long, default_value_t = 20)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=300))]
    #[arg(help = "最短视频时长，单位分钟 (1-300)")]
    pub min_minutes: u32,

    #[arg(long, default_value_t = 3000)]
    #[arg(help = "频道订阅数上限，不含")]
    pub max_subscribers: u64,

    #[arg(long, default_value_t = 5)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=50))]
    #[arg(help = "每个关键词取几条搜索结果 (1-50)")]
    pub per_keyword: u32,

    /// 关键词，可重复指定；不指定时使用内置列表
    #[arg(long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,
}

impl ViralArgs {
    pub fn to_query(&self) -> ViralQuery {
        let keywords = if self.keywords.is_empty() {
            DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
        } else {
            self.keywords.clone()
        };

        ViralQuery {
            keywords,
            days: self.days,
            min_minutes: self.min_minutes,
            max_subscribers: self.max_subscribers,
            per_keyword: self.per_keyword,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct SimilarArgs {
    /// 视频链接或11位视频ID
    #[arg(value_name = "URL_OR_ID")]
    pub input: String,

    #[arg(long, default_value_t = 5)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=20))]
    #[arg(help = "同类视频数量 (1-20)")]
    pub max_results: u32,
}

/// 输入校验错误在提示用户时已经输出过，退出时不再重复打印
pub fn is_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ScoutError>()
        .is_some_and(ScoutError::is_user_error)
}
