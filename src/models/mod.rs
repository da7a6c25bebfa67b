pub mod user;

pub use user::{User, UserCreationParams, UserListResponse, UserUpdateParams};
