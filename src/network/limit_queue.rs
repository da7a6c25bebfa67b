use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// 队列中的待执行动作
pub type QueuedAction = Box<dyn FnOnce() + Send + 'static>;

struct Shared {
    pending: AtomicUsize,
    interval: Duration,
}

/// 固定间隔的 FIFO 执行队列
///
/// 由一个后台 worker 依次取出动作执行，任意时刻最多只有一个动作在执行，
/// 相邻两个动作的开始时间至少相隔 `interval`。`enqueue` 只负责入队，不等待执行。
/// 动作 panic 不影响后续动作。worker 在首次入队时启动，必须在 Tokio 运行时中使用。
#[derive(Clone)]
pub struct ActionQueue {
    sender: mpsc::UnboundedSender<QueuedAction>,
    receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<QueuedAction>>>>,
    shared: Arc<Shared>,
}

impl ActionQueue {
    pub fn new(interval: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: Arc::new(Mutex::new(Some(receiver))),
            shared: Arc::new(Shared {
                pending: AtomicUsize::new(0),
                interval,
            }),
        }
    }

    /// 追加到队尾并立即返回
    pub fn enqueue<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(receiver) = self.receiver.lock().take() {
            tokio::spawn(run_worker(receiver, Arc::clone(&self.shared)));
        }

        let depth = self.shared.pending.fetch_add(1, Ordering::SeqCst) + 1;
        if self.sender.send(Box::new(action)).is_err() {
            self.shared.pending.fetch_sub(1, Ordering::SeqCst);
            tracing::error!("Action queue worker has stopped, action dropped");
            return;
        }
        tracing::debug!(depth, "Action enqueued");
    }

    /// 尚未开始执行的动作数量
    pub fn pending(&self) -> usize {
        self.shared.pending.load(Ordering::SeqCst)
    }
}

async fn run_worker(mut receiver: mpsc::UnboundedReceiver<QueuedAction>, shared: Arc<Shared>) {
    // 所有 ActionQueue 句柄释放后 recv 返回 None，worker 退出
    while let Some(action) = receiver.recv().await {
        shared.pending.fetch_sub(1, Ordering::SeqCst);
        let started = Instant::now();

        if let Err(e) = tokio::task::spawn_blocking(action).await {
            tracing::error!("Queued action failed: {}", e);
        }

        tokio::time::sleep_until(started + shared.interval).await;
    }
    tracing::debug!("Action queue worker stopped");
}
