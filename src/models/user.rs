use serde::{Deserialize, Serialize};

/// 远端用户信息
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub profile_url: Option<String>,
}

impl User {
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            profile_url: None,
        }
    }

    pub fn with_profile_url(mut self, profile_url: impl Into<String>) -> Self {
        self.profile_url = Some(profile_url.into());
        self
    }
}

/// 创建用户参数
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserCreationParams {
    pub user_id: String,
    pub nickname: String,
    pub profile_url: Option<String>,
}

impl UserCreationParams {
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            profile_url: None,
        }
    }

    pub fn with_profile_url(mut self, profile_url: impl Into<String>) -> Self {
        self.profile_url = Some(profile_url.into());
        self
    }
}

/// 更新用户参数，只有非空字段会被发送
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserUpdateParams {
    pub user_id: String,
    pub nickname: Option<String>,
    pub profile_url: Option<String>,
}

impl UserUpdateParams {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: None,
            profile_url: None,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn profile_url(mut self, profile_url: impl Into<String>) -> Self {
        self.profile_url = Some(profile_url.into());
        self
    }
}

/// 用户列表接口响应
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserListResponse {
    pub users: Vec<User>,
    #[serde(default)]
    pub next: Option<String>,
}
