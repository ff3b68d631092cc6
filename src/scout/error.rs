use thiserror::Error;

use crate::common::api::error::ApiError;
use crate::parser::errors::ParseError;

#[derive(Debug, Error)]
pub enum ScoutError {
    // 用户输入的链接/ID无效
    #[error("输入无效: {0}")]
    InvalidInput(#[from] ParseError),

    #[error("API错误: {0}")]
    Api(#[from] ApiError),
}

impl ScoutError {
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
