use std::future::Future;

use futures_util::future::join_all;

use crate::error::{Result, SdkError};
use crate::models::{User, UserCreationParams};

/// 批量结果汇总
#[derive(Debug)]
pub enum BatchOutcome {
    AllSucceeded(Vec<User>),
    SomeFailed { failed: usize, total: usize },
}

impl BatchOutcome {
    /// 全部成功才算成功，结果顺序与输入一致
    pub fn from_results(results: Vec<Result<User>>) -> Self {
        let total = results.len();
        let users: Vec<User> = results.into_iter().filter_map(|r| r.ok()).collect();
        if users.len() == total {
            BatchOutcome::AllSucceeded(users)
        } else {
            BatchOutcome::SomeFailed {
                failed: total - users.len(),
                total,
            }
        }
    }

    pub fn into_result(self) -> Result<Vec<User>> {
        match self {
            BatchOutcome::AllSucceeded(users) => Ok(users),
            BatchOutcome::SomeFailed { failed, total } => {
                Err(SdkError::PartialFailure { failed, total })
            }
        }
    }
}

/// 批量创建协调器
///
/// 并发发起每一条创建，等待全部完成后再汇总。部分失败时已经成功的用户不会回滚，
/// 仍然留在缓存中。
pub struct BatchCoordinator {
    max_count: usize,
}

impl BatchCoordinator {
    pub fn new(max_count: usize) -> Self {
        Self { max_count }
    }

    pub async fn create_many<F, Fut>(
        &self,
        specs: Vec<UserCreationParams>,
        create: F,
    ) -> Result<Vec<User>>
    where
        F: Fn(UserCreationParams) -> Fut,
        Fut: Future<Output = Result<User>>,
    {
        if specs.len() > self.max_count {
            return Err(SdkError::MaxCountExceeded {
                max: self.max_count,
                requested: specs.len(),
            });
        }

        let user_ids: Vec<String> = specs.iter().map(|s| s.user_id.clone()).collect();
        let results = join_all(specs.into_iter().map(&create)).await;

        for (user_id, result) in user_ids.iter().zip(&results) {
            if let Err(e) = result {
                tracing::warn!(%user_id, "Batch item failed: {}", e);
            }
        }

        let outcome = BatchOutcome::from_results(results);
        if let BatchOutcome::SomeFailed { failed, total } = &outcome {
            tracing::warn!(failed, total, "Batch user creation partially failed");
        }
        outcome.into_result()
    }
}
