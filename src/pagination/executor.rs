//! Cursor pagination executor
//!
//! Turns a `PageLoader` + `EdgeExtractor` pair into a lazily produced,
//! cancellable stream of `ListItem`s. Each call to [`execute`] owns one
//! background task and one single-slot channel; nothing is shared between
//! calls.
//!
//! The worker observes the context at two checkpoints: right before every
//! loader call and right before every push. Pushes and loader round trips
//! both race the cancellation signal, so a cancelled listing stops without
//! issuing further requests.

use super::types::{
    EdgeExtractor, ExecutionOutcome, ExecutionSummary, ListItem, Page, PageLoader,
};
use crate::context::Context;
use crate::error::{Error, Result};
use futures::Stream;
use std::ops::ControlFlow;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Start a paginated listing
///
/// The returned stream yields every extracted item in edge order across
/// pages, then closes. The first loader, extractor or protocol error is
/// yielded as a single `ListItem::Error` and closes the stream.
///
/// Callers that stop reading before the stream closes must cancel `ctx`
/// (or drop the stream). A worker waiting on a page request is only
/// interrupted by cancellation.
pub fn execute<L, X>(ctx: &Context, loader: L, extractor: X) -> ListStream<X::Item>
where
    L: PageLoader,
    X: EdgeExtractor<L::Edge>,
{
    let (tx, rx) = mpsc::channel(1);
    let worker = Worker {
        ctx: ctx.clone(),
        loader,
        extractor,
        tx,
        summary: ExecutionSummary::new(),
    };
    let handle = tokio::spawn(worker.run());

    ListStream { rx, worker: handle }
}

/// Receive side of a paginated listing
#[derive(Debug)]
pub struct ListStream<T> {
    rx: mpsc::Receiver<ListItem<T>>,
    worker: JoinHandle<ExecutionSummary>,
}

impl<T> ListStream<T> {
    /// Receive the next element, `None` once the listing is closed
    pub async fn next_item(&mut self) -> Option<ListItem<T>> {
        self.rx.recv().await
    }

    /// Drain the listing into a vector, stopping at the first error
    pub async fn try_collect_items(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.rx.recv().await {
            items.push(item.into_result()?);
        }
        Ok(items)
    }

    /// Stop consuming and wait for the worker to terminate
    ///
    /// Unread elements are discarded. A worker blocked on a push notices
    /// the closed stream immediately; one waiting on the network returns
    /// after the request finishes or the context is cancelled.
    pub async fn finish(self) -> Result<ExecutionSummary> {
        let Self { rx, worker } = self;
        drop(rx);
        worker
            .await
            .map_err(|e| Error::Other(format!("pagination worker failed: {e}")))
    }
}

impl<T> Stream for ListStream<T> {
    type Item = ListItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

// ============================================================================
// Worker
// ============================================================================

/// State owned by the background task of one listing
struct Worker<L, X, T> {
    ctx: Context,
    loader: L,
    extractor: X,
    tx: mpsc::Sender<ListItem<T>>,
    summary: ExecutionSummary,
}

impl<L, X, T> Worker<L, X, T>
where
    L: PageLoader,
    X: EdgeExtractor<L::Edge, Item = T>,
    T: Send + 'static,
{
    async fn run(mut self) -> ExecutionSummary {
        let outcome = self.drive().await;
        self.summary.outcome = outcome;
        // The sender goes down with the worker, closing the stream
        self.summary
    }

    async fn drive(&mut self) -> ExecutionOutcome {
        let mut cursor: Option<String> = None;

        loop {
            let page = match self.fetch(cursor.take()).await {
                ControlFlow::Continue(Ok(page)) => page,
                ControlFlow::Continue(Err(err)) => return self.fail(err).await,
                ControlFlow::Break(outcome) => return outcome,
            };
            self.summary.pages_fetched += 1;

            let Page { page_info, edges } = page;
            if let ControlFlow::Break(outcome) = self.drain(edges).await {
                return outcome;
            }

            match page_info.next_cursor() {
                Ok(None) => return ExecutionOutcome::Done,
                Ok(Some(next)) => cursor = Some(next.to_string()),
                Err(err) => return self.fail(err).await,
            }
        }
    }

    /// Fetching: checkpoint, then one loader call raced against cancellation
    async fn fetch(
        &mut self,
        cursor: Option<String>,
    ) -> ControlFlow<ExecutionOutcome, Result<Page<L::Edge>>> {
        if self.ctx.is_cancelled() {
            return ControlFlow::Break(ExecutionOutcome::Cancelled);
        }

        tokio::select! {
            biased;
            () = self.ctx.cancelled() => ControlFlow::Break(ExecutionOutcome::Cancelled),
            page = self.loader.load_page(&self.ctx, cursor) => ControlFlow::Continue(page),
        }
    }

    /// Draining: extract and push each edge in order
    async fn drain(&mut self, edges: Vec<L::Edge>) -> ControlFlow<ExecutionOutcome> {
        for edge in edges {
            if self.ctx.is_cancelled() {
                return ControlFlow::Break(ExecutionOutcome::Cancelled);
            }

            let extracted = match self.extractor.extract(edge) {
                Ok(extracted) => extracted,
                Err(err) => return ControlFlow::Break(self.fail(err).await),
            };
            if extracted.cursor.is_some() {
                self.summary.last_cursor = extracted.cursor;
            }

            match extracted.item {
                Some(item) => {
                    if let ControlFlow::Break(outcome) = self.push(ListItem::Item(item)).await {
                        return ControlFlow::Break(outcome);
                    }
                    self.summary.items_emitted += 1;
                }
                None => self.summary.edges_skipped += 1,
            }
        }
        ControlFlow::Continue(())
    }

    /// Push the terminal error and report how the listing ended
    async fn fail(&mut self, err: Error) -> ExecutionOutcome {
        match self.push(ListItem::Error(err)).await {
            ControlFlow::Continue(()) => ExecutionOutcome::Errored,
            ControlFlow::Break(outcome) => outcome,
        }
    }

    /// Checkpoint, then wait for the consumer to take the element
    async fn push(&mut self, item: ListItem<T>) -> ControlFlow<ExecutionOutcome> {
        if self.ctx.is_cancelled() {
            return ControlFlow::Break(ExecutionOutcome::Cancelled);
        }

        tokio::select! {
            biased;
            () = self.ctx.cancelled() => ControlFlow::Break(ExecutionOutcome::Cancelled),
            sent = self.tx.send(item) => match sent {
                Ok(()) => ControlFlow::Continue(()),
                Err(_) => ControlFlow::Break(ExecutionOutcome::Abandoned),
            },
        }
    }
}
