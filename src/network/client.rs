use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::config::{Config, Credentials};
use crate::error::{Result, SdkError};

use super::limit_queue::ActionQueue;
use super::rate_limit::BurstGuard;
use super::request::{ApiRequest, RequestSpec};
use super::transport::Transport;

/// 请求调度器
///
/// 先经过突发限流，再进入固定间隔队列，最后交给传输层执行并解析响应。
/// 每个请求只尝试一次，不做重试。
pub struct NetworkClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<RwLock<Credentials>>,
    burst_guard: BurstGuard,
    queue: ActionQueue,
}

impl NetworkClient {
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            credentials: Arc::new(RwLock::new(config.credentials())),
            burst_guard: BurstGuard::new(config.burst_window(), config.burst_limit),
            queue: ActionQueue::new(config.request_interval()),
        }
    }

    pub fn credentials(&self) -> Credentials {
        self.credentials.read().clone()
    }

    /// 替换凭证，返回旧凭证。已入队的请求在执行时读取最新凭证。
    pub fn replace_credentials(&self, credentials: Credentials) -> Credentials {
        std::mem::replace(&mut *self.credentials.write(), credentials)
    }

    pub async fn request<R: ApiRequest>(&self, request: R) -> Result<R::Response> {
        let spec = request.spec();
        let request_id = Uuid::new_v4();

        if !self.burst_guard.admit() {
            tracing::warn!(
                %request_id,
                method = %spec.method,
                path = %spec.path(),
                "Request rejected, burst limit exceeded"
            );
            return Err(SdkError::ExceededLimit);
        }

        let (tx, rx) = oneshot::channel();
        let transport = Arc::clone(&self.transport);
        let credentials = Arc::clone(&self.credentials);

        self.queue.enqueue(move || {
            let credentials = credentials.read().clone();
            tokio::spawn(async move {
                let result =
                    perform::<R::Response>(transport.as_ref(), &spec, &credentials, request_id)
                        .await;
                let _ = tx.send(result);
            });
        });

        rx.await
            .map_err(|_| SdkError::Transport("request task ended without a response".into()))?
    }
}

async fn perform<T: serde::de::DeserializeOwned>(
    transport: &dyn Transport,
    spec: &RequestSpec,
    credentials: &Credentials,
    request_id: Uuid,
) -> Result<T> {
    tracing::debug!(%request_id, method = %spec.method, path = %spec.path(), "Sending request");

    let body = transport.execute(spec, credentials).await.map_err(|e| {
        tracing::error!(%request_id, path = %spec.path(), "Request failed: {}", e);
        e
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(%request_id, path = %spec.path(), "Failed to decode response: {}", e);
        SdkError::Decode(e)
    })
}
