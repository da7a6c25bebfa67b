// 缓存模块
// 本地用户缓存与昵称查询记录

mod user_storage;

pub use user_storage::UserCache;
