use std::collections::{HashMap, HashSet};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use super::models::{SkippedKeyword, ViralOutcome, ViralQuery};
use super::Scout;
use crate::common::api::provider::SearchProvider;
use crate::common::models::{ChannelStats, SearchOrder, VideoDetails, VideoReport};

impl<P: SearchProvider> Scout<P> {
    /// 按关键词检索近期高播放的视频，只保留小频道的长视频
    ///
    /// 单个关键词失败不会中断整体流程，会记录在 `skipped` 里。
    pub async fn viral(&self, query: &ViralQuery) -> ViralOutcome {
        let published_after =
            Utc::now().checked_sub_signed(TimeDelta::days(i64::from(query.days)));
        let mut outcome = ViralOutcome::default();
        let mut seen = HashSet::new();

        for keyword in &query.keywords {
            info!("搜索关键词: {}", keyword);

            match self.scan_keyword(keyword, published_after, query).await {
                Ok(reports) => {
                    for report in reports {
                        // 不同关键词可能搜到同一个视频
                        if seen.insert(report.url.clone()) {
                            outcome.reports.push(report);
                        }
                    }
                }
                Err(reason) => {
                    warn!("跳过关键词 {}: {}", keyword, reason);
                    outcome.skipped.push(SkippedKeyword {
                        keyword: keyword.clone(),
                        reason,
                    });
                }
            }
        }

        info!(
            "检索完成: {} 条结果, {} 个关键词被跳过",
            outcome.reports.len(),
            outcome.skipped.len()
        );
        outcome
    }

    async fn scan_keyword(
        &self,
        keyword: &str,
        published_after: Option<DateTime<Utc>>,
        query: &ViralQuery,
    ) -> Result<Vec<VideoReport>, String> {
        let hits = self
            .provider
            .search_videos(
                keyword,
                published_after,
                Some(SearchOrder::ViewCount),
                query.per_keyword,
            )
            .await
            .map_err(|e| e.to_string())?;

        if hits.is_empty() {
            return Err("没有找到视频".to_string());
        }

        let video_ids: Vec<String> = hits.iter().map(|h| h.video_id.clone()).collect();
        let mut channel_ids: Vec<String> = Vec::new();
        for hit in &hits {
            if !hit.channel_id.is_empty() && !channel_ids.contains(&hit.channel_id) {
                channel_ids.push(hit.channel_id.clone());
            }
        }

        if channel_ids.is_empty() {
            return Err("缺少频道数据".to_string());
        }

        let details = self
            .provider
            .video_details(&video_ids)
            .await
            .map_err(|e| e.to_string())?;
        if details.is_empty() {
            return Err("获取视频统计失败".to_string());
        }

        let channels = self
            .provider
            .channel_stats(&channel_ids)
            .await
            .map_err(|e| e.to_string())?;
        if channels.is_empty() {
            return Err("获取频道统计失败".to_string());
        }

        // 按ID关联，接口不保证返回顺序与请求一致
        let details: HashMap<&str, &VideoDetails> =
            details.iter().map(|d| (d.id.as_str(), d)).collect();
        let channels: HashMap<&str, &ChannelStats> =
            channels.iter().map(|c| (c.id.as_str(), c)).collect();

        let mut reports = Vec::new();
        for hit in &hits {
            let Some(detail) = details.get(hit.video_id.as_str()) else {
                debug!("视频 {} 没有返回详情", hit.video_id);
                continue;
            };
            let Some(channel) = channels.get(hit.channel_id.as_str()) else {
                debug!("频道 {} 没有返回统计", hit.channel_id);
                continue;
            };

            let seconds = detail.duration_seconds();
            if query.accepts(channel.subscriber_count, seconds) {
                reports.push(VideoReport::from_details(
                    detail,
                    Some(channel.subscriber_count),
                ));
            } else {
                debug!(
                    "过滤视频 {}: 订阅 {}, 时长 {}s",
                    hit.video_id, channel.subscriber_count, seconds
                );
            }
        }

        Ok(reports)
    }
}
