use crate::cancel::CancelToken;
use futures::StreamExt;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::stream::Stream;
use futures::task::{Context, Poll, noop_waker_ref};
use std::pin::Pin;

/// Events emitted by a single load
#[derive(Clone, Debug, PartialEq)]
pub enum LoadEvent<A> {
    /// Bytes received so far. `total` is only meaningful when
    /// `length_computable` is true.
    Progress {
        loaded: u64,
        total: u64,
        length_computable: bool,
    },
    Loaded(A),
    Failed(String),
}

impl<A> LoadEvent<A> {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }
}

/// Creates the two ends of a load. Bridges keep the sender and hand the task
/// to whoever requested the load.
pub fn load_channel<A>(id: &str) -> (LoadSender<A>, LoadTask<A>) {
    let (tx, rx) = mpsc::unbounded();
    let cancel = CancelToken::default();
    let sender = LoadSender {
        id: id.to_string(),
        tx,
        cancel: cancel.clone(),
    };
    let task = LoadTask {
        id: id.to_string(),
        rx,
        cancel,
        done: false,
    };
    (sender, task)
}

/// Producer side of a load.
///
/// The terminal methods consume the sender, so a load can't finish twice.
pub struct LoadSender<A> {
    id: String,
    tx: UnboundedSender<LoadEvent<A>>,
    cancel: CancelToken,
}

impl<A> LoadSender<A> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Reports `loaded` bytes, `total` is `None` when the size is unknown
    pub fn progress(&self, loaded: u64, total: Option<u64>) {
        let total = total.unwrap_or(0);
        self.send(LoadEvent::Progress {
            loaded,
            total,
            length_computable: total > 0,
        });
    }

    pub fn loaded(self, artifact: A) {
        self.send(LoadEvent::Loaded(artifact));
    }

    pub fn failed(self, err: impl Into<String>) {
        self.send(LoadEvent::Failed(err.into()));
    }

    fn send(&self, evt: LoadEvent<A>) {
        if self.tx.unbounded_send(evt).is_err() {
            log::trace!("Load '{}' has no listener anymore", self.id);
        }
    }
}

/// Consumer side of a load.
///
/// Yields any number of progress events and then one terminal event. If the
/// sender goes away without finishing, the task reports a failure instead of
/// staying pending forever.
pub struct LoadTask<A> {
    id: String,
    rx: UnboundedReceiver<LoadEvent<A>>,
    cancel: CancelToken,
    done: bool,
}

impl<A> LoadTask<A> {
    /// Path or id requested
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True once the terminal event was delivered
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Returns the next queued event without waiting for new ones.
    pub fn try_event(&mut self) -> Option<LoadEvent<A>> {
        let mut ctx = Context::from_waker(noop_waker_ref());
        match self.poll_next_unpin(&mut ctx) {
            Poll::Ready(evt) => evt,
            Poll::Pending => None,
        }
    }
}

impl<A> Stream for LoadTask<A> {
    type Item = LoadEvent<A>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }

        match self.rx.poll_next_unpin(cx) {
            Poll::Ready(Some(evt)) => {
                self.done = evt.is_terminal();
                Poll::Ready(Some(evt))
            }
            Poll::Ready(None) => {
                self.done = true;
                let err = format!("Cannot load '{}': load channel closed", self.id);
                Poll::Ready(Some(LoadEvent::Failed(err)))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
