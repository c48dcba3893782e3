//! Keyed async tasks that report back as actions
//!
//! Each task resolves to an `Action` that is sent over the runtime's action
//! channel, so its outcome is applied by the reducer on the runtime loop, not
//! on whatever worker thread the future finished on.
//!
//! Spawning under a key that is already running aborts the older task first.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::action::Action;

/// Identifies a task slot; one running task per key
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TaskKey {
    Weather,
}

impl TaskKey {
    pub fn name(&self) -> &'static str {
        match self {
            TaskKey::Weather => "weather",
        }
    }
}

pub struct TaskManager {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn `future`, cancelling any task already running under `key`.
    ///
    /// A cancelled task never sends its action.
    pub fn spawn<F>(&mut self, key: TaskKey, future: F) -> &mut Self
    where
        F: Future<Output = Action> + Send + 'static,
    {
        if self.cancel(key) {
            tracing::debug!(task = key.name(), "Replaced running task");
        }

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            // receiver dropped means the runtime is shutting down
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Abort the task under `key`. Returns whether one was still running.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        match self.tasks.remove(&key) {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn is_running(&self, key: TaskKey) -> bool {
        self.tasks
            .get(&key)
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
