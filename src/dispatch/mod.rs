//! Persistence Dispatcher: forwards move batches to the backend,
//! fire-and-forget.
//!
//! By the time a batch reaches the dispatcher, local state has already been
//! updated synchronously and optimistically. The dispatcher never awaits the
//! sink and never rolls local state back: a failed persist is only corrected
//! when the external item list is next refreshed from the backend. This
//! keeps drag interaction latency-free regardless of network conditions.
//!
//! Successive drags spawn independent, unserialized sink calls; nothing here
//! guarantees their arrival order at the backend. A backend that needs
//! strict ordering should put a single-flight queue inside its [`MoveSink`].

use crate::types::MoveRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Error type the sink reports. The engine never inspects it.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// The externally-owned move-persistence callback, the sole mutation
/// boundary to the outside world.
#[async_trait]
pub trait MoveSink: Send + Sync {
    /// Persist a normalized move batch. Failures are the implementor's
    /// concern; the engine ignores the outcome.
    async fn persist_moves(&self, moves: Vec<MoveRecord>) -> Result<(), SinkError>;
}

/// Hands move batches to the sink without awaiting them.
///
/// Requires a running tokio runtime; `dispatch` spawns the sink call and
/// returns immediately.
#[derive(Clone)]
pub struct Dispatcher {
    sink: Arc<dyn MoveSink>,
}

impl Dispatcher {
    /// Create a dispatcher wrapping the given sink
    pub fn new(sink: Arc<dyn MoveSink>) -> Self {
        Self { sink }
    }

    /// Spawn the sink call for a batch and return immediately. Empty batches
    /// are skipped.
    pub fn dispatch(&self, moves: Vec<MoveRecord>) {
        if moves.is_empty() {
            return;
        }

        tracing::debug!(count = moves.len(), "dispatching move batch");
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            // Outcome is the sink's concern; no rollback either way
            let _ = sink.persist_moves(moves).await;
        });
    }
}
