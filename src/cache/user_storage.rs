use std::collections::HashSet;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::models::User;

#[derive(Default)]
struct StorageState {
    users: IndexMap<String, User>,
    searched_nicknames: HashSet<String>,
}

/// 本地用户缓存
///
/// 按 `user_id` 去重并保持插入顺序。写操作（upsert、reset、首次昵称查询）独占，
/// 读操作之间可以并发。调用方拿到的都是 `User` 的副本。
///
/// 昵称查询采用“首次放行、之后走缓存”的策略：某个昵称第一次查询时只做记录并返回空，
/// 由调用方去远端拉取；之后同一昵称的查询直接过滤当前缓存。这不是 LRU。
#[derive(Default)]
pub struct UserCache {
    state: RwLock<StorageState>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖
    pub fn upsert(&self, user: User) {
        tracing::debug!(user_id = %user.user_id, "Caching user");
        let mut state = self.state.write();
        state.users.insert(user.user_id.clone(), user);
    }

    pub fn get(&self, user_id: &str) -> Option<User> {
        self.state.read().users.get(user_id).cloned()
    }

    /// 按插入顺序返回快照
    pub fn get_all(&self) -> Vec<User> {
        self.state.read().users.values().cloned().collect()
    }

    pub fn search_by_nickname(&self, nickname: &str) -> Vec<User> {
        {
            let state = self.state.read();
            if state.searched_nicknames.contains(nickname) {
                return filter_by_nickname(&state.users, nickname);
            }
        }

        let mut state = self.state.write();
        // 读锁释放后可能已有其他调用记录了该昵称
        if state.searched_nicknames.contains(nickname) {
            return filter_by_nickname(&state.users, nickname);
        }
        tracing::debug!(%nickname, "First search for nickname, deferring to remote");
        state.searched_nicknames.insert(nickname.to_string());
        Vec::new()
    }

    /// 清空用户与昵称记录
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.users.clear();
        state.searched_nicknames.clear();
        tracing::info!("User cache cleared");
    }

    pub fn len(&self) -> usize {
        self.state.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().users.is_empty()
    }
}

fn filter_by_nickname(users: &IndexMap<String, User>, nickname: &str) -> Vec<User> {
    users
        .values()
        .filter(|user| user.nickname == nickname)
        .cloned()
        .collect()
}
