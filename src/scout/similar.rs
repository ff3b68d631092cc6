use tracing::info;

use super::error::ScoutError;
use super::models::SimilarOutcome;
use super::Scout;
use crate::common::api::error::ApiError;
use crate::common::api::provider::SearchProvider;
use crate::common::models::{SearchOrder, VideoReport};
use crate::parser::extract_identifier;

impl<P: SearchProvider> Scout<P> {
    /// 根据一个视频的标题搜索同类视频
    pub async fn similar(
        &self,
        input: &str,
        max_results: u32,
    ) -> Result<SimilarOutcome, ScoutError> {
        let video_id = extract_identifier(input)?;
        info!("视频ID: {}", video_id);

        let original = self
            .provider
            .video_details(&[video_id.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(video_id.to_string()))?;

        info!("按标题搜索: {}", original.title);
        let hits = self
            .provider
            .search_videos(
                &original.title,
                None,
                Some(SearchOrder::Relevance),
                max_results,
            )
            .await?;

        let similar = hits
            .iter()
            .filter(|hit| hit.video_id != video_id.as_str())
            .map(VideoReport::from_hit)
            .collect();

        Ok(SimilarOutcome {
            original: VideoReport::from_details(&original, None),
            similar,
        })
    }
}
