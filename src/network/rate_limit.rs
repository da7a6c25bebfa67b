use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// 滑动窗口请求计数器
///
/// 每次调用都会记录当前时间，被拒绝的请求同样计入窗口。
pub struct BurstGuard {
    window: Duration,
    limit: usize,
    timestamps: Mutex<VecDeque<Instant>>,
}

impl BurstGuard {
    pub fn new(window: Duration, limit: usize) -> Self {
        Self {
            window,
            limit,
            timestamps: Mutex::new(VecDeque::new()),
        }
    }

    /// 窗口内记录数不超过上限时放行
    pub fn admit(&self) -> bool {
        let now = Instant::now();
        let mut timestamps = self.timestamps.lock();
        timestamps.push_back(now);
        while let Some(oldest) = timestamps.front() {
            if now.duration_since(*oldest) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        let count = timestamps.len();
        if count > self.limit {
            tracing::debug!(count, limit = self.limit, "Burst window exceeded");
            false
        } else {
            true
        }
    }

    /// 当前窗口内的记录数
    pub fn occupancy(&self) -> usize {
        let now = Instant::now();
        self.timestamps
            .lock()
            .iter()
            .filter(|at| now.duration_since(**at) < self.window)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rejects_eleventh_call_within_window() {
        let guard = BurstGuard::new(Duration::from_secs(1), 10);

        for _ in 0..10 {
            assert!(guard.admit());
        }
        assert!(!guard.admit());
        assert!(!guard.admit());
        assert_eq!(guard.occupancy(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn admission_resumes_after_window_elapses() {
        let guard = BurstGuard::new(Duration::from_secs(1), 10);

        for _ in 0..11 {
            guard.admit();
        }
        tokio::time::advance(Duration::from_secs(1)).await;

        assert!(guard.admit());
        assert_eq!(guard.occupancy(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_calls_still_occupy_the_window() {
        let guard = BurstGuard::new(Duration::from_secs(1), 2);

        assert!(guard.admit());
        tokio::time::advance(Duration::from_millis(600)).await;
        assert!(guard.admit());
        assert!(!guard.admit());

        // 第一条已过期，但被拒绝的那次仍在窗口内
        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(!guard.admit());
    }
}
