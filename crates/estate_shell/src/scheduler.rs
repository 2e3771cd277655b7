use std::time::Duration;

use estate::scheduler::{ScheduledTask, Scheduler};
use tokio::sync::mpsc;
use tokio::time;
use tracing::debug;

/// Runs each delay as a tokio timer and sends the task back to the main loop.
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<ScheduledTask>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::UnboundedSender<ScheduledTask>) -> Self {
        Self { tx }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            time::sleep(delay).await;
            if tx.send(task).is_err() {
                debug!("storefront loop gone; timer task dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn delivers_after_delay_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut s = TokioScheduler::new(tx);
        let start = time::Instant::now();

        s.schedule(Duration::from_millis(3000), ScheduledTask::CompletePurchase);
        s.schedule(Duration::from_millis(1000), ScheduledTask::CompleteWalletConnect);

        assert_eq!(rx.recv().await, Some(ScheduledTask::CompleteWalletConnect));
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert!(start.elapsed() < Duration::from_millis(3000));
        assert_eq!(rx.recv().await, Some(ScheduledTask::CompletePurchase));
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }
}
