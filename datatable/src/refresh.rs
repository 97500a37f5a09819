//! Generation-token coordination for concurrent refreshes.
//!
//! The table itself does not queue or de-duplicate refreshes: two
//! in-flight fetches can resolve in either order. Every fetch therefore
//! takes a [`RefreshTicket`] from a [`RefreshGate`]; only the newest
//! ticket may commit, and responses for superseded tickets are dropped.
//! [`Refresher`] ties fetch lifetimes to a cancellation token so that
//! tearing the component down aborts in-flight work instead of updating
//! a detached view.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::row::Row;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    /// A newer refresh was issued while this one was in flight.
    #[error("stale refresh ticket {0}")]
    Stale(u64),
    /// The owning component was torn down.
    #[error("refresh cancelled")]
    Cancelled,
    /// The caller's fetch failed.
    #[error("refresh failed: {0}")]
    Failed(String),
}

/// Generation token for one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets and admits only the newest.
#[derive(Debug, Default)]
pub struct RefreshGate {
    latest: AtomicU64,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a refresh about to start. Issuing supersedes
    /// every ticket taken earlier.
    pub fn issue(&self) -> RefreshTicket {
        RefreshTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response carrying this ticket may still be applied.
    pub fn admit(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.latest.load(Ordering::SeqCst)
    }

    /// Apply fetched rows to the table, unless the ticket went stale
    /// while the fetch was in flight.
    pub fn commit(
        &self,
        table: &Table,
        ticket: RefreshTicket,
        rows: Vec<Row>,
        reset_selection: bool,
    ) -> Result<(), RefreshError> {
        if !self.admit(ticket) {
            log::debug!(
                "{}: dropping stale refresh {} (latest is {})",
                table.id(),
                ticket.0,
                self.latest.load(Ordering::SeqCst)
            );
            return Err(RefreshError::Stale(ticket.0));
        }
        table.refresh(Some(rows), reset_selection);
        Ok(())
    }
}

/// Scoped driver for async refreshes against one table.
///
/// Dropping the refresher cancels everything it spawned.
#[derive(Debug)]
pub struct Refresher {
    table: Table,
    gate: Arc<RefreshGate>,
    cancel: CancellationToken,
}

impl Refresher {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            gate: Arc::new(RefreshGate::new()),
            cancel: CancellationToken::new(),
        }
    }

    pub fn gate(&self) -> Arc<RefreshGate> {
        Arc::clone(&self.gate)
    }

    /// Run one fetch-and-commit cycle in place. The ticket is taken
    /// before the fetch starts, so a cycle started later always wins.
    pub async fn run<F, Fut>(&self, reset_selection: bool, fetch: F) -> Result<(), RefreshError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Row>, RefreshError>>,
    {
        let ticket = self.gate.issue();
        let rows = tokio::select! {
            _ = self.cancel.cancelled() => return Err(RefreshError::Cancelled),
            rows = fetch() => rows?,
        };
        self.gate.commit(&self.table, ticket, rows, reset_selection)
    }

    /// Spawn a fetch-and-commit cycle as a background task tied to this
    /// refresher's lifetime.
    pub fn spawn<F, Fut>(
        &self,
        reset_selection: bool,
        fetch: F,
    ) -> JoinHandle<Result<(), RefreshError>>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<Row>, RefreshError>> + Send + 'static,
    {
        let table = self.table.clone();
        let gate = Arc::clone(&self.gate);
        let cancel = self.cancel.child_token();
        let ticket = gate.issue();
        tokio::spawn(async move {
            let rows = tokio::select! {
                _ = cancel.cancelled() => return Err(RefreshError::Cancelled),
                rows = fetch() => rows?,
            };
            gate.commit(&table, ticket, rows, reset_selection)
        })
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
