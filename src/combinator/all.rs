//! Fail-fast concurrent aggregation of an ordered input sequence
//!
//! Every element is started as its own Tokio task as soon as the combinator is
//! built. Completions arrive in any order and are written into a slot buffer
//! indexed by input position, so the output order is always the input order.

use super::error::AllError;
use super::input::Input;
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, trace};

/// Options controlling how the combinator treats siblings of a failed element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllOptions {
    /// Abort still-pending element tasks once the combinator has failed.
    /// Off by default: siblings run to completion and their results are ignored.
    pub abort_on_failure: bool,
}

impl AllOptions {
    pub fn abort_on_failure(mut self, abort: bool) -> Self {
        self.abort_on_failure = abort;
        self
    }
}

/// Combine `inputs` into one computation resolving with every value in input order.
///
/// Fails with the first element error observed. Siblings are not cancelled.
///
/// # Panics
///
/// Panics if `inputs` is non-empty and this is called outside a Tokio runtime.
pub fn all<T, E, I>(inputs: I) -> All<T, E>
where
    I: IntoIterator<Item = Input<T, E>>,
    T: Send + 'static,
    E: Send + 'static,
{
    all_with(inputs, AllOptions::default())
}

/// [`all`] over plain futures
pub fn all_futures<T, E, I, F>(futures: I) -> All<T, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    all(futures.into_iter().map(Input::future))
}

/// [`all`] with explicit [`AllOptions`]
pub fn all_with<T, E, I>(inputs: I, options: AllOptions) -> All<T, E>
where
    I: IntoIterator<Item = Input<T, E>>,
    T: Send + 'static,
    E: Send + 'static,
{
    let tasks: FuturesUnordered<Indexed<T, E>> = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| Indexed {
            index,
            handle: tokio::spawn(input.into_future()),
        })
        .collect();

    let len = tasks.len();
    if len == 0 {
        debug!("All: empty input, resolving immediately");
        return All {
            state: State::Settled(Ok(Vec::new())),
        };
    }

    debug!(
        len,
        abort_on_failure = options.abort_on_failure,
        "All: started {} inputs",
        len
    );

    All {
        state: State::Running(Running {
            tasks,
            slots: (0..len).map(|_| None).collect(),
            remaining: len,
            abort_on_failure: options.abort_on_failure,
        }),
    }
}

/// Future returned by [`all`].
///
/// Settles exactly once. Polling it again after it returned `Ready` panics.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct All<T, E> {
    state: State<T, E>,
}

enum State<T, E> {
    Settled(Result<Vec<T>, AllError<E>>),
    Running(Running<T, E>),
    Done,
}

// No field is ever pin-projected
impl<T, E> Unpin for All<T, E> {}

impl<T, E> All<T, E> {
    /// A combinator that has already failed with `error`
    pub fn rejected(error: AllError<E>) -> Self {
        All {
            state: State::Settled(Err(error)),
        }
    }

    /// Number of inputs that have not settled yet
    pub fn remaining(&self) -> usize {
        match &self.state {
            State::Running(running) => running.remaining,
            _ => 0,
        }
    }
}

impl<T, E> Future for All<T, E> {
    type Output = Result<Vec<T>, AllError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match mem::replace(&mut this.state, State::Done) {
            State::Settled(result) => Poll::Ready(result),
            State::Running(mut running) => match running.poll_settle(cx) {
                Poll::Ready(result) => Poll::Ready(result),
                Poll::Pending => {
                    this.state = State::Running(running);
                    Poll::Pending
                }
            },
            State::Done => panic!("`All` polled after completion"),
        }
    }
}

struct Running<T, E> {
    tasks: FuturesUnordered<Indexed<T, E>>,
    slots: Vec<Option<T>>,
    remaining: usize,
    abort_on_failure: bool,
}

impl<T, E> Running<T, E> {
    fn poll_settle(&mut self, cx: &mut Context<'_>) -> Poll<Result<Vec<T>, AllError<E>>> {
        while let Some((index, outcome)) = ready!(self.tasks.poll_next_unpin(cx)) {
            match outcome {
                Ok(Ok(value)) => {
                    self.slots[index] = Some(value);
                    self.remaining -= 1;
                    trace!(index, remaining = self.remaining, "All: input fulfilled");
                    if self.remaining == 0 {
                        break;
                    }
                }
                Ok(Err(source)) => {
                    debug!(index, remaining = self.remaining, "All: input failed");
                    self.abort_siblings();
                    return Poll::Ready(Err(AllError::Element { index, source }));
                }
                Err(source) => {
                    debug!(index, error = %source, "All: input task interrupted");
                    self.abort_siblings();
                    return Poll::Ready(Err(AllError::Interrupted { index, source }));
                }
            }
        }

        // Every slot is filled once all tasks have fulfilled
        debug!(len = self.slots.len(), "All: every input fulfilled");
        Poll::Ready(Ok(self.slots.drain(..).flatten().collect()))
    }

    fn abort_siblings(&self) {
        if !self.abort_on_failure {
            return;
        }
        for task in self.tasks.iter() {
            task.handle.abort();
        }
        debug!(aborted = self.tasks.len(), "All: aborted pending siblings");
    }
}

/// Join handle tagged with the input position it belongs to
struct Indexed<T, E> {
    index: usize,
    handle: JoinHandle<Result<T, E>>,
}

impl<T, E> Future for Indexed<T, E> {
    type Output = (usize, Result<Result<T, E>, JoinError>);

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let index = self.index;
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|outcome| (index, outcome))
    }
}
