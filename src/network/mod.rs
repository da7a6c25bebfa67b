// 网络模块
// 限流、排队、传输与请求描述

pub mod client;
pub mod limit_queue;
pub mod rate_limit;
pub mod request;
pub mod transport;

pub use client::NetworkClient;
pub use limit_queue::{ActionQueue, QueuedAction};
pub use rate_limit::BurstGuard;
pub use request::{
    ApiRequest, CreateUserRequest, GetUserRequest, GetUsersRequest, HttpMethod, RequestSpec,
    UpdateUserRequest,
};
pub use transport::{ReqwestTransport, Transport};
