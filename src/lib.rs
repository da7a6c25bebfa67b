pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod user;

pub use cache::UserCache;
pub use config::{Config, Credentials};
pub use error::{Result, SdkError};
pub use models::{User, UserCreationParams, UserListResponse, UserUpdateParams};
pub use user::UserManager;
