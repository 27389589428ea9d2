//! Driving a scan while a frontend consumes its progress events.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

/// Upper bound on draining events after the task has returned. Only hit if
/// a sender clone outlives the task.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `task` to completion, calling `on_event` for every event it emits.
///
/// Events that are still queued when the task finishes are delivered
/// before this returns, so the frontend always sees the final `Done`.
pub async fn run_with_events<F, E, R>(
    task: F,
    mut event_rx: mpsc::UnboundedReceiver<E>,
    mut on_event: impl FnMut(E),
) -> R
where
    F: Future<Output = R>,
{
    tokio::pin!(task);
    let mut delivered = 0u64;

    let result = loop {
        tokio::select! {
            r = &mut task => break Some(r),
            event = event_rx.recv() => match event {
                Some(e) => {
                    delivered += 1;
                    on_event(e);
                }
                None => break None,
            },
        }
    };

    let Some(result) = result else {
        log::debug!("Event channel closed after {} event(s); awaiting task", delivered);
        return task.await;
    };

    let deadline = Instant::now() + DRAIN_TIMEOUT;
    loop {
        match tokio::time::timeout_at(deadline, event_rx.recv()).await {
            Ok(Some(e)) => {
                delivered += 1;
                on_event(e);
            }
            Ok(None) => break,
            Err(_) => {
                log::warn!("Gave up draining progress events after {}s", DRAIN_TIMEOUT.as_secs());
                break;
            }
        }
    }
    log::debug!("Delivered {} progress event(s)", delivered);
    result
}
