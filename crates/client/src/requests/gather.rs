//! Cooperative fan-out over many requests.

use std::future::Future;
use std::time::Duration;

use futures::future::try_join_all;
use futures::stream::{FuturesUnordered, StreamExt};

use super::async_result::{AsyncResult, WaitResult};

/// Awaits every request concurrently on the current task.
///
/// Results come back in submission order whatever order the requests
/// complete in. The first error is returned and the remaining requests are
/// dropped.
pub async fn gather<I, F, T, E>(requests: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    try_join_all(requests).await
}

/// Awaits every request concurrently and yields results in completion order.
///
/// Failures do not stop the others.
pub async fn gather_unordered<I, F, T, E>(requests: I) -> Vec<Result<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    requests
        .into_iter()
        .collect::<FuturesUnordered<_>>()
        .collect()
        .await
}

/// Polls a set of worker-pool requests every `poll_interval` until all have
/// finished, then takes their results in submission order.
pub async fn wait_all<T, E>(
    mut pending: Vec<AsyncResult<T, E>>,
    poll_interval: Duration,
) -> Vec<WaitResult<T, E>> {
    while !pending.iter_mut().all(AsyncResult::is_finished) {
        tokio::time::sleep(poll_interval).await;
    }
    pending.into_iter().map(AsyncResult::try_take).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::Pin;
    use tokio::sync::oneshot;

    type Request = Pin<Box<dyn Future<Output = Result<u32, String>> + Send>>;

    async fn delayed(value: u32, delay_ms: u64) -> Result<u32, String> {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(value)
    }

    /// Completes with `outcome` once `gate` opens, then opens `next`.
    ///
    /// Chaining gates fixes the completion order without relying on timing.
    fn gated(
        outcome: Result<u32, String>,
        gate: oneshot::Receiver<()>,
        next: Option<oneshot::Sender<()>>,
    ) -> Request {
        Box::pin(async move {
            let _ = gate.await;
            if let Some(next) = next {
                let _ = next.send(());
            }
            outcome
        })
    }

    #[tokio::test]
    async fn test_gather_preserves_submission_order() {
        let results = gather(vec![delayed(1, 40), delayed(2, 0), delayed(3, 20)])
            .await
            .unwrap();
        assert_eq!(results, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_gather_ten_requests() {
        let results = gather((0..10).map(|i| delayed(i, 5))).await.unwrap();
        assert_eq!(results.len(), 10);
    }

    #[tokio::test]
    async fn test_gather_propagates_first_error() {
        let (start, first_gate) = oneshot::channel();
        let (to_second, second_gate) = oneshot::channel();
        // never opened: gather must return without it
        let (_hold, never) = oneshot::channel();

        let requests = vec![
            gated(Ok(1), never, None),
            gated(Err("first".to_string()), first_gate, Some(to_second)),
            gated(Err("second".to_string()), second_gate, None),
        ];
        start.send(()).unwrap();

        assert_eq!(gather(requests).await, Err("first".to_string()));
    }

    #[tokio::test]
    async fn test_gather_unordered_yields_completion_order() {
        let (start, failing_gate) = oneshot::channel();
        let (to_third, third_gate) = oneshot::channel();
        let (to_first, first_gate) = oneshot::channel();

        let requests = vec![
            gated(Ok(1), first_gate, None),
            gated(Err("failed".to_string()), failing_gate, Some(to_third)),
            gated(Ok(3), third_gate, Some(to_first)),
        ];
        start.send(()).unwrap();

        let results = gather_unordered(requests).await;
        assert_eq!(results, vec![Err("failed".to_string()), Ok(3), Ok(1)]);
    }

    #[tokio::test]
    async fn test_wait_all_collects_every_handle() {
        let pending: Vec<_> = (0..10)
            .map(|i| AsyncResult::spawn(delayed(i, (10 - i as u64) * 2)))
            .collect();

        let results = wait_all(pending, Duration::from_millis(5)).await;
        let values: Vec<u32> = results
            .into_iter()
            .map(|r| r.ready().unwrap().unwrap())
            .collect();
        assert_eq!(values, (0..10).collect::<Vec<_>>());
    }
}
