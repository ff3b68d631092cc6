use serde_derive::Deserialize;

use super::common::lenient_u64;
use crate::common::models::ChannelStats;

#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    pub id: String,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    // 隐藏订阅数的频道不返回该字段
    #[serde(default, deserialize_with = "lenient_u64")]
    pub subscriber_count: u64,
}

impl From<ChannelItem> for ChannelStats {
    fn from(item: ChannelItem) -> Self {
        Self {
            id: item.id,
            subscriber_count: item.statistics.subscriber_count,
        }
    }
}
