//! Bounded worker pool for per-candidate processing.
//!
//! N persistent tokio tasks pull items from a bounded `async-channel`, so
//! at most N items (and therefore at most N catalog requests) are in flight
//! at once. Each worker sends its result back over an unbounded channel;
//! the caller merges results on a single task, so no shared collection is
//! ever appended to concurrently.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A pool of worker tasks that process items concurrently.
///
/// ```ignore
/// let mut pool = WorkerPool::start(4, items, |item| async move {
///     process(item).await
/// });
///
/// while let Some(result) = pool.recv().await {
///     handle(result);
/// }
/// ```
pub struct WorkerPool<R: Send + 'static> {
    result_rx: mpsc::UnboundedReceiver<R>,
    handles: Vec<JoinHandle<()>>,
}

impl<R: Send + 'static> WorkerPool<R> {
    /// Spawn `n` workers (at least one), submit all items, and return the pool.
    ///
    /// Submission runs on its own task so the caller can start receiving
    /// right away. Every item produces exactly one result; there is no
    /// per-item timeout here, callers bound their own I/O.
    pub fn start<W, F, Fut>(n: usize, items: Vec<W>, process_fn: F) -> Self
    where
        W: Send + 'static,
        F: Fn(W) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let n = n.max(1);
        let (work_tx, work_rx) = async_channel::bounded::<W>(n);
        let (result_tx, result_rx) = mpsc::unbounded_channel::<R>();
        let process_fn = Arc::new(process_fn);

        let handles: Vec<JoinHandle<()>> = (0..n)
            .map(|worker| {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let process_fn = process_fn.clone();
                tokio::spawn(async move {
                    let mut processed = 0usize;
                    while let Ok(item) = work_rx.recv().await {
                        processed += 1;
                        if result_tx.send(process_fn(item).await).is_err() {
                            break;
                        }
                    }
                    log::debug!("Worker {} finished after {} item(s)", worker, processed);
                })
            })
            .collect();

        // Channel closes once every worker has dropped its clone
        drop(result_tx);

        tokio::spawn(async move {
            for item in items {
                if work_tx.send(item).await.is_err() {
                    break;
                }
            }
        });

        Self { result_rx, handles }
    }

    /// Receive the next result. Returns `None` once every item has been
    /// processed and all workers have exited.
    pub async fn recv(&mut self) -> Option<R> {
        self.result_rx.recv().await
    }

    /// Drain every remaining result and wait for all workers to exit.
    pub async fn collect(mut self) -> Vec<R> {
        let mut results = Vec::new();
        while let Some(r) = self.recv().await {
            results.push(r);
        }
        for handle in self.handles.drain(..) {
            if let Err(e) = handle.await {
                log::warn!("Worker task failed: {}", e);
            }
        }
        results
    }
}
