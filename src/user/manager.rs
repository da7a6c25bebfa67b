use std::sync::Arc;

use crate::cache::UserCache;
use crate::config::{Config, Credentials};
use crate::error::{Result, SdkError};
use crate::models::{User, UserCreationParams, UserUpdateParams};
use crate::network::{
    CreateUserRequest, GetUserRequest, GetUsersRequest, NetworkClient, ReqwestTransport,
    Transport, UpdateUserRequest,
};

use super::batch::BatchCoordinator;

/// 用户管理 SDK 入口
///
/// 所有成功的远端响应都会写入本地缓存。
pub struct UserManager {
    config: Config,
    client: NetworkClient,
    storage: UserCache,
    batch: BatchCoordinator,
}

impl UserManager {
    pub fn new(config: Config) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let client = NetworkClient::new(&config, transport);
        let batch = BatchCoordinator::new(config.max_batch_size);
        Self {
            config,
            client,
            storage: UserCache::new(),
            batch,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &UserCache {
        &self.storage
    }

    /// 切换应用凭证，应用 ID 变化时先清空本地缓存
    pub fn init_application(&self, application_id: &str, api_token: &str) {
        let current = self.client.credentials();
        if !current.application_id.is_empty() && current.application_id != application_id {
            tracing::info!(
                previous = %current.application_id,
                next = %application_id,
                "Application changed, clearing local user cache"
            );
            self.storage.reset();
        }
        self.client
            .replace_credentials(Credentials::new(application_id, api_token));
        tracing::info!(application_id = %application_id, "Application initialized");
    }

    pub async fn create_user(&self, params: UserCreationParams) -> Result<User> {
        let user = self.client.request(CreateUserRequest::new(params)).await?;
        self.storage.upsert(user.clone());
        Ok(user)
    }

    /// 批量创建，最多 `max_batch_size` 个，任一失败即整体失败
    pub async fn create_users(&self, params: Vec<UserCreationParams>) -> Result<Vec<User>> {
        self.batch
            .create_many(params, |p| self.create_user(p))
            .await
    }

    pub async fn update_user(&self, params: UserUpdateParams) -> Result<User> {
        let user = self.client.request(UpdateUserRequest::new(params)).await?;
        self.storage.upsert(user.clone());
        Ok(user)
    }

    /// 优先读缓存，未命中再请求远端
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        if let Some(user) = self.storage.get(user_id) {
            tracing::debug!(%user_id, "User cache hit");
            return Ok(user);
        }

        let user = self.client.request(GetUserRequest::new(user_id)).await?;
        self.storage.upsert(user.clone());
        Ok(user)
    }

    pub async fn get_users(&self, nickname_matches: &str) -> Result<Vec<User>> {
        if nickname_matches.is_empty() {
            return Err(SdkError::NeedNickname);
        }

        let cached = self.storage.search_by_nickname(nickname_matches);
        if !cached.is_empty() {
            return Ok(cached);
        }

        let response = self
            .client
            .request(GetUsersRequest::new(
                nickname_matches,
                self.config.search_limit,
            ))
            .await?;
        for user in &response.users {
            self.storage.upsert(user.clone());
        }
        Ok(response.users)
    }
}
