use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};
use user_sdk::network::{HttpMethod, RequestSpec, Transport};
use user_sdk::{Config, Credentials, Result, SdkError, User, UserManager};

/// 内存版远端用户服务，记录每一次请求
#[derive(Default)]
pub struct MockTransport {
    remote: Mutex<Vec<User>>,
    failing: Mutex<HashSet<String>>,
    corrupt: AtomicBool,
    calls: Mutex<Vec<(RequestSpec, Credentials)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, user: User) {
        let mut remote = self.remote.lock();
        remote.retain(|u| u.user_id != user.user_id);
        remote.push(user);
    }

    pub fn fail_user(&self, user_id: &str) {
        self.failing.lock().insert(user_id.to_string());
    }

    pub fn corrupt_responses(&self) {
        self.corrupt.store(true, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<(RequestSpec, Credentials)> {
        self.calls.lock().clone()
    }

    fn respond(&self, spec: &RequestSpec) -> Result<Value> {
        let params = spec.parameters.clone().unwrap_or(Value::Null);
        let field = |name: &str| params.get(name).and_then(Value::as_str).map(str::to_string);

        match (spec.method, spec.segments.as_slice()) {
            (HttpMethod::Post, [_]) => {
                let user_id = field("user_id").unwrap_or_default();
                if self.failing.lock().contains(&user_id) {
                    return Err(SdkError::Transport("upstream rejected user".into()));
                }
                let mut user = User::new(user_id, field("nickname").unwrap_or_default());
                user.profile_url = field("profile_url").filter(|url| !url.is_empty());
                self.seed(user.clone());
                Ok(json!(user))
            }
            (HttpMethod::Put, [_, user_id]) => {
                let mut remote = self.remote.lock();
                let user = remote
                    .iter_mut()
                    .find(|u| &u.user_id == user_id)
                    .ok_or_else(|| SdkError::Transport("404 Not Found".into()))?;
                if let Some(nickname) = field("nickname") {
                    user.nickname = nickname;
                }
                if let Some(profile_url) = field("profile_url") {
                    user.profile_url = Some(profile_url);
                }
                Ok(json!(user))
            }
            (HttpMethod::Get, [_, user_id]) => self
                .remote
                .lock()
                .iter()
                .find(|u| &u.user_id == user_id)
                .map(|u| json!(u))
                .ok_or_else(|| SdkError::Transport("404 Not Found".into())),
            (HttpMethod::Get, [_]) => {
                let nickname = field("nickname").unwrap_or_default();
                let users: Vec<User> = self
                    .remote
                    .lock()
                    .iter()
                    .filter(|u| u.nickname == nickname)
                    .cloned()
                    .collect();
                Ok(json!({ "users": users, "next": "" }))
            }
            _ => Err(SdkError::Transport("unsupported route".into())),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, spec: &RequestSpec, credentials: &Credentials) -> Result<Vec<u8>> {
        self.calls.lock().push((spec.clone(), credentials.clone()));
        if self.corrupt.load(Ordering::SeqCst) {
            return Ok(b"<html>maintenance</html>".to_vec());
        }
        let body = self.respond(spec)?;
        Ok(serde_json::to_vec(&body)?)
    }
}

pub fn manager_with(transport: &Arc<MockTransport>) -> UserManager {
    manager_with_config(transport, Config::new("app-1", "token-1"))
}

pub fn manager_with_config(transport: &Arc<MockTransport>, config: Config) -> UserManager {
    let transport: Arc<dyn Transport> = transport.clone();
    UserManager::with_transport(config, transport)
}
