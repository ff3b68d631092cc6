use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use yt_scout::cli::{self, Command, SimilarArgs, ViralArgs};
use yt_scout::common::logger::PrettyLogger;
use yt_scout::scout::Scout;
use yt_scout::{log_error, log_info, log_step, log_success, log_warning};
use yt_scout::{SearchProvider, YoutubeClient};

/// 热门题材检索
async fn run_viral<P: SearchProvider>(scout: &Scout<P>, args: &ViralArgs) -> Result<()> {
    let query = args.to_query();
    debug!("检索条件: {:?}", query);

    PrettyLogger::title("YouTube 热门题材");
    log_info!(
        "{} 个关键词, 最近 {} 天, 时长 ≥ {} 分钟, 订阅 < {}",
        query.keywords.len(),
        query.days,
        query.min_minutes,
        query.max_subscribers
    );

    let outcome = scout.viral(&query).await;

    for skipped in &outcome.skipped {
        log_warning!("跳过关键词 {}: {}", skipped.keyword, skipped.reason);
    }

    if outcome.reports.is_empty() {
        log_warning!(
            "没有找到订阅数少于 {} 且时长超过 {} 分钟的视频",
            query.max_subscribers,
            query.min_minutes
        );
        return Ok(());
    }

    log_step!("检索结果");
    for report in &outcome.reports {
        PrettyLogger::video_card(report);
    }
    log_success!(
        "共找到 {} 条结果 (>{} 分钟, <{} 订阅)",
        outcome.reports.len(),
        query.min_minutes,
        query.max_subscribers
    );
    Ok(())
}

/// 同类视频检索
async fn run_similar<P: SearchProvider>(scout: &Scout<P>, args: &SimilarArgs) -> Result<()> {
    let outcome = match scout.similar(&args.input, args.max_results).await {
        Ok(outcome) => outcome,
        Err(e) if e.is_user_error() => {
            log_error!("无法提取视频ID，请输入有效的YouTube链接");
            return Err(e.into());
        }
        Err(e) => return Err(e).context("检索同类视频失败"),
    };

    log_step!("原视频");
    PrettyLogger::video_card(&outcome.original);

    log_step!("同类视频");
    if outcome.similar.is_empty() {
        log_warning!("没有找到同类视频");
    }
    for report in &outcome.similar {
        PrettyLogger::video_card(report);
    }
    Ok(())
}

async fn run(args: &cli::Cli) -> Result<()> {
    let client =
        YoutubeClient::new(args.api_key.clone(), &args.api_base).context("创建API客户端失败")?;
    let scout = Scout::new(client);

    match &args.command {
        Command::Viral(viral) => run_viral(&scout, viral).await,
        Command::Similar(similar) => run_similar(&scout, similar).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 解析命令行参数
    let args = cli::Cli::parse();

    // 初始化日志
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(&args).await {
        Ok(()) => {
            info!("{}", "完成".green());
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !cli::is_reported(&e) {
                log_error!("执行失败: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
