//! Handle to a request running on the worker pool.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::task::AbortHandle;

/// Outcome of waiting on an [`AsyncResult`] with a deadline.
#[derive(Debug)]
pub enum WaitResult<T, E> {
    /// The request finished, successfully or not.
    Ready(Result<T, E>),
    /// The deadline passed first; the handle is returned so the caller can
    /// keep waiting or cancel.
    TimedOut(AsyncResult<T, E>),
    /// The request was cancelled before it finished.
    Cancelled,
    /// The request panicked; carries the panic message.
    Panicked(String),
}

impl<T, E> WaitResult<T, E> {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }

    /// The finished result, if there is one.
    pub fn ready(self) -> Option<Result<T, E>> {
        match self {
            Self::Ready(result) => Some(result),
            _ => None,
        }
    }
}

/// What the spawned task reports back.
#[derive(Debug)]
enum Outcome<T, E> {
    Finished(Result<T, E>),
    Panicked(String),
}

#[derive(Debug)]
enum State<T, E> {
    Pending(oneshot::Receiver<Outcome<T, E>>),
    Ready(Result<T, E>),
    Panicked(String),
    Cancelled,
}

impl<T, E> From<Outcome<T, E>> for State<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Finished(result) => Self::Ready(result),
            Outcome::Panicked(message) => Self::Panicked(message),
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// A request executing on another worker.
///
/// The request starts as soon as the handle is created. Dropping the handle
/// does not stop the request; use [`cancel`](Self::cancel) for that.
#[derive(Debug)]
pub struct AsyncResult<T, E> {
    state: State<T, E>,
    abort: AbortHandle,
}

/// Cancels the request behind an [`AsyncResult`] from elsewhere.
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }
}

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Spawns `request` on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn spawn<F>(request: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::spawn_on(&Handle::current(), request)
    }

    /// Spawns `request` on the runtime behind `handle`.
    pub fn spawn_on<F>(handle: &Handle, request: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let task = handle.spawn(async move {
            let outcome = match AssertUnwindSafe(request).catch_unwind().await {
                Ok(result) => Outcome::Finished(result),
                Err(panic) => Outcome::Panicked(panic_message(panic)),
            };
            // The receiver may already be gone; nobody is waiting then.
            let _ = tx.send(outcome);
        });

        Self {
            state: State::Pending(rx),
            abort: task.abort_handle(),
        }
    }
}

impl<T, E> AsyncResult<T, E> {
    /// Picks up a finished result without waiting.
    fn poll_state(&mut self) {
        if let State::Pending(rx) = &mut self.state {
            let next = match rx.try_recv() {
                Ok(outcome) => Some(outcome.into()),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Closed) => Some(State::Cancelled),
            };
            if let Some(next) = next {
                self.state = next;
            }
        }
    }

    /// Whether the request has finished, including by panicking. Never
    /// blocks.
    pub fn is_ready(&mut self) -> bool {
        self.poll_state();
        matches!(self.state, State::Ready(_) | State::Panicked(_))
    }

    pub fn is_cancelled(&mut self) -> bool {
        self.poll_state();
        matches!(self.state, State::Cancelled)
    }

    /// Whether the request finished or was cancelled. Never blocks.
    pub fn is_finished(&mut self) -> bool {
        self.poll_state();
        !matches!(self.state, State::Pending(_))
    }

    /// `None` while the request is running (or was cancelled), otherwise
    /// whether it succeeded. A panicked request did not.
    pub fn successful(&mut self) -> Option<bool> {
        self.poll_state();
        match &self.state {
            State::Ready(result) => Some(result.is_ok()),
            State::Panicked(_) => Some(false),
            _ => None,
        }
    }

    /// Waits up to `timeout` for the request to finish without taking its
    /// result. Returns `false` if the deadline passed first.
    pub async fn wait(&mut self, timeout: Duration) -> bool {
        if let State::Pending(rx) = &mut self.state {
            let next = match tokio::time::timeout(timeout, rx).await {
                Ok(Ok(outcome)) => outcome.into(),
                Ok(Err(_)) => State::Cancelled,
                Err(_) => return false,
            };
            self.state = next;
        }
        true
    }

    /// Waits up to `timeout` and takes the result.
    pub async fn get(mut self, timeout: Duration) -> WaitResult<T, E> {
        self.wait(timeout).await;
        self.into_wait_result()
    }

    /// Waits without a deadline. `None` if the request was cancelled or
    /// panicked.
    pub async fn join(mut self) -> Option<Result<T, E>> {
        if let State::Pending(rx) = &mut self.state {
            let next = match rx.await {
                Ok(outcome) => outcome.into(),
                Err(_) => State::Cancelled,
            };
            self.state = next;
        }
        self.into_wait_result().ready()
    }

    /// Takes the result if it is already available. Never blocks.
    pub fn try_take(mut self) -> WaitResult<T, E> {
        self.poll_state();
        self.into_wait_result()
    }

    /// Aborts the request if it has not finished yet.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.abort.clone())
    }

    fn into_wait_result(self) -> WaitResult<T, E> {
        match self.state {
            State::Ready(result) => WaitResult::Ready(result),
            State::Panicked(message) => WaitResult::Panicked(message),
            State::Cancelled => WaitResult::Cancelled,
            State::Pending(rx) => WaitResult::TimedOut(AsyncResult {
                state: State::Pending(rx),
                abort: self.abort,
            }),
        }
    }
}
