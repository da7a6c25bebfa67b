use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::models::{User, UserCreationParams, UserListResponse, UserUpdateParams};

const USERS_SEGMENT: &str = "users";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 请求描述：方法、相对路径段和参数
///
/// GET 的参数按 query 编码，POST/PUT 按 JSON body 发送。
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub segments: Vec<String>,
    pub parameters: Option<Value>,
}

impl RequestSpec {
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// 带响应类型的接口请求
pub trait ApiRequest: Send + 'static {
    type Response: DeserializeOwned + Send + 'static;

    fn spec(&self) -> RequestSpec;
}

pub struct CreateUserRequest {
    params: UserCreationParams,
}

impl CreateUserRequest {
    pub fn new(params: UserCreationParams) -> Self {
        Self { params }
    }
}

impl ApiRequest for CreateUserRequest {
    type Response = User;

    fn spec(&self) -> RequestSpec {
        RequestSpec {
            method: HttpMethod::Post,
            segments: vec![USERS_SEGMENT.to_string()],
            parameters: Some(json!({
                "user_id": self.params.user_id,
                "nickname": self.params.nickname,
                "profile_url": self.params.profile_url.clone().unwrap_or_default(),
            })),
        }
    }
}

pub struct UpdateUserRequest {
    params: UserUpdateParams,
}

impl UpdateUserRequest {
    pub fn new(params: UserUpdateParams) -> Self {
        Self { params }
    }
}

impl ApiRequest for UpdateUserRequest {
    type Response = User;

    fn spec(&self) -> RequestSpec {
        let mut body = Map::new();
        if let Some(nickname) = &self.params.nickname {
            body.insert("nickname".into(), Value::String(nickname.clone()));
        }
        if let Some(profile_url) = &self.params.profile_url {
            body.insert("profile_url".into(), Value::String(profile_url.clone()));
        }

        RequestSpec {
            method: HttpMethod::Put,
            segments: vec![USERS_SEGMENT.to_string(), self.params.user_id.clone()],
            parameters: Some(Value::Object(body)),
        }
    }
}

pub struct GetUserRequest {
    user_id: String,
}

impl GetUserRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl ApiRequest for GetUserRequest {
    type Response = User;

    fn spec(&self) -> RequestSpec {
        RequestSpec {
            method: HttpMethod::Get,
            segments: vec![USERS_SEGMENT.to_string(), self.user_id.clone()],
            parameters: None,
        }
    }
}

pub struct GetUsersRequest {
    nickname: String,
    limit: u32,
}

impl GetUsersRequest {
    pub fn new(nickname: impl Into<String>, limit: u32) -> Self {
        Self {
            nickname: nickname.into(),
            limit,
        }
    }
}

impl ApiRequest for GetUsersRequest {
    type Response = UserListResponse;

    fn spec(&self) -> RequestSpec {
        RequestSpec {
            method: HttpMethod::Get,
            segments: vec![USERS_SEGMENT.to_string()],
            parameters: Some(json!({
                "limit": self.limit,
                "nickname": self.nickname,
            })),
        }
    }
}
