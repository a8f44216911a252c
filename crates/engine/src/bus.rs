// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-flight task bus.
//!
//! Serializes asynchronous units of work: exactly one executes at a time,
//! in FIFO enqueue order. A concurrency-1 worker drains an unbounded
//! channel, so long queues never grow the call stack. Every task signals
//! completion with an explicit [`StepOutcome`]; failure is a value, not a
//! lost promise.

use std::future::Future;
use std::pin::Pin;
use tokio::sync::{mpsc, oneshot};

/// Result of one unit of work, carried by the completion signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The operation ran and succeeded.
    Completed,
    /// No operation was defined for the requested direction.
    Skipped,
    /// The operation ran and the remote system reported failure.
    Failed(String),
}

type Work = Pin<Box<dyn Future<Output = StepOutcome> + Send>>;

struct Task {
    work: Work,
    done: oneshot::Sender<StepOutcome>,
}

/// FIFO queue of tasks with at most one in flight.
///
/// One bus per run invocation; multiple simultaneous runs need their own
/// buses. Must be created inside a tokio runtime.
pub struct TaskBus {
    tx: mpsc::UnboundedSender<Task>,
}

impl TaskBus {
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Task>();
        tokio::spawn(async move {
            // Each task is awaited to completion before the next is popped.
            while let Some(task) = rx.recv().await {
                let outcome = task.work.await;
                let _ = task.done.send(outcome);
            }
        });
        Self { tx }
    }

    /// Enqueue a unit of work. Returns the completion signal.
    pub fn load(
        &self,
        work: impl Future<Output = StepOutcome> + Send + 'static,
    ) -> oneshot::Receiver<StepOutcome> {
        let (done_tx, done_rx) = oneshot::channel();
        let task = Task {
            work: Box::pin(work),
            done: done_tx,
        };
        // If the worker is gone the dropped sender fails the receiver,
        // which `run` maps to a failed outcome.
        let _ = self.tx.send(task);
        done_rx
    }

    /// Enqueue and wait for completion.
    pub async fn run(
        &self,
        work: impl Future<Output = StepOutcome> + Send + 'static,
    ) -> StepOutcome {
        match self.load(work).await {
            Ok(outcome) => outcome,
            Err(_) => StepOutcome::Failed("task bus unavailable".to_string()),
        }
    }
}

impl Default for TaskBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
