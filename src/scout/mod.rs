use crate::common::api::provider::SearchProvider;

pub mod error;
pub mod models;
mod similar;
mod viral;

pub use error::ScoutError;
pub use models::{SimilarOutcome, SkippedKeyword, ViralOutcome, ViralQuery};

/// 检索流程入口，持有一个平台接口实现
pub struct Scout<P: SearchProvider> {
    provider: P,
}

impl<P: SearchProvider> Scout<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}
