use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    // 输入中找不到视频ID，属于用户输入校验错误
    #[error("无法从输入中提取视频ID: {0}")]
    NotFound(String),
}
