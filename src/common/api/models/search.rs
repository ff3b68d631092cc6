use serde_derive::Deserialize;

use crate::common::models::SearchHit;

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: SearchItemId,
    #[serde(default)]
    pub snippet: SearchSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl SearchItem {
    // 频道、播放列表等非视频结果没有 videoId
    pub fn into_hit(self) -> Option<SearchHit> {
        let video_id = self.id.video_id?;
        Some(SearchHit {
            video_id,
            channel_id: self.snippet.channel_id,
            title: self.snippet.title,
            description: self.snippet.description,
        })
    }
}
