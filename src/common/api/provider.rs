use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::error::ApiError;
use crate::common::models::{ChannelStats, SearchHit, SearchOrder, VideoDetails};

/// 视频平台检索接口
///
/// 检索流程只依赖这个 trait，测试里可以换成 mock 服务。
#[async_trait]
pub trait SearchProvider: Send + Sync {
    // 按关键词搜索视频
    async fn search_videos(
        &self,
        query: &str,
        published_after: Option<DateTime<Utc>>,
        order: Option<SearchOrder>,
        max_results: u32,
    ) -> Result<Vec<SearchHit>, ApiError>;

    // 批量获取视频详情
    async fn video_details(&self, ids: &[String]) -> Result<Vec<VideoDetails>, ApiError>;

    // 批量获取频道统计
    async fn channel_stats(&self, ids: &[String]) -> Result<Vec<ChannelStats>, ApiError>;
}
