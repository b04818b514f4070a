//! Request pattern demonstrations.
//!
//! Every demo takes the request to run as a closure over an owned client, so
//! the same demo works for any endpoint.

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use lusid_client::{requests, LusidClient, Result, WaitResult};

use crate::config::DemoConfig;

const FAN_OUT_POLL: Duration = Duration::from_millis(50);

/// Runs a request on the worker pool and takes its result, giving up after
/// the configured get timeout.
pub async fn async_get_example<F, Fut, T>(client: &LusidClient, request: &F, config: &DemoConfig)
where
    F: Fn(LusidClient) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Debug + Send + 'static,
{
    tracing::info!("Getting the result from an asynchronous request");
    let pending = client.spawn_request(request);

    match pending.get(config.get_timeout).await {
        WaitResult::Ready(Ok(response)) => tracing::info!("{:?}", response),
        WaitResult::Ready(Err(e)) => tracing::error!("Request failed: {}", e),
        WaitResult::TimedOut(pending) => {
            tracing::warn!("No response within {:?}", config.get_timeout);
            pending.cancel();
        }
        WaitResult::Cancelled => tracing::warn!("Request was cancelled"),
        WaitResult::Panicked(message) => tracing::error!("Request panicked: {}", message),
    }
}

/// Waits for a request to finish without taking its result.
pub async fn async_wait_example<F, Fut, T>(client: &LusidClient, request: &F, config: &DemoConfig)
where
    F: Fn(LusidClient) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    tracing::info!("Waiting for asynchronous request to complete");
    let mut pending = client.spawn_request(request);

    if pending.wait(config.wait_timeout).await {
        tracing::info!("Result ready");
    } else {
        tracing::warn!("No response within {:?}", config.wait_timeout);
        pending.cancel();
    }
}

/// Polls a request's readiness, then reports whether it succeeded.
pub async fn async_ready_example<F, Fut, T>(
    client: &LusidClient,
    request: &F,
    config: &DemoConfig,
) where
    F: Fn(LusidClient) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    tracing::info!("Polling async request ready status");
    let mut pending = client.spawn_request(request);

    while !pending.is_finished() {
        tracing::info!("Result not ready yet");
        tokio::time::sleep(config.poll_interval).await;
    }

    match pending.successful() {
        Some(true) => tracing::info!("Async request executed successfully"),
        Some(false) => tracing::info!("Async request executed unsuccessfully"),
        None => tracing::warn!("Async request was cancelled"),
    }
}

/// Sends several requests on the worker pool and collects them once all
/// have finished.
pub async fn multiple_async_requests_example<F, Fut, T>(
    client: &LusidClient,
    request: &F,
    config: &DemoConfig,
) where
    F: Fn(LusidClient) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Debug + Send + 'static,
{
    tracing::info!("Sending {} asynchronous requests", config.request_count);
    let pending: Vec<_> = (0..config.request_count)
        .map(|_| client.spawn_request(request))
        .collect();

    let results = requests::wait_all(pending, FAN_OUT_POLL).await;
    tracing::info!("All responses in");
    for result in results {
        match result {
            WaitResult::Ready(Ok(response)) => tracing::info!("{:?}", response),
            WaitResult::Ready(Err(e)) => tracing::error!("Request failed: {}", e),
            WaitResult::Panicked(message) => tracing::error!("Request panicked: {}", message),
            WaitResult::TimedOut(_) | WaitResult::Cancelled => {
                tracing::warn!("Request did not complete")
            }
        }
    }
}

/// Issues several requests on the current task and awaits them together.
///
/// The first failure aborts the batch and is logged; `None` then.
pub async fn gather_example<F, Fut, T>(
    client: &LusidClient,
    request: &F,
    config: &DemoConfig,
) -> Option<Vec<T>>
where
    F: Fn(LusidClient) -> Fut,
    Fut: Future<Output = Result<T>>,
    T: Debug,
{
    tracing::info!("Awaiting {} requests together", config.request_count);
    let batch = (0..config.request_count).map(|_| request(client.clone()));

    match requests::gather(batch).await {
        Ok(responses) => {
            for response in &responses {
                tracing::info!("{:?}", response);
            }
            Some(responses)
        }
        Err(e) => {
            tracing::error!("Batch failed: {}", e);
            None
        }
    }
}
