use thiserror::Error;

/// SDK 统一错误类型
#[derive(Debug, Error)]
pub enum SdkError {
    /// 昵称过滤条件为空
    #[error("nickname filter must not be empty")]
    NeedNickname,

    /// 批量创建超过上限
    #[error("at most {max} users can be created at once, got {requested}")]
    MaxCountExceeded { max: usize, requested: usize },

    /// 批量创建中至少有一个失败，单个错误原因不向上传递
    #[error("{failed} of {total} user creations failed")]
    PartialFailure { failed: usize, total: usize },

    /// 时间窗口内请求过多
    #[error("request rate exceeded, try again later")]
    ExceededLimit,

    /// 网络层错误
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 响应解析失败
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Transport(Box::new(e))
    }
}

pub type Result<T, E = SdkError> = std::result::Result<T, E>;
