use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::LexicardsError,
    dictionary::DefinitionResolver,
};

/// Runs async work off the UI thread and hands results back through a channel that the
/// UI drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, LexicardsError> {
        let runtime = Arc::new(Runtime::new().map_err(|e| LexicardsError::Runtime(e.to_string()))?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Resolve `word` in the background. `notify` runs after the result was queued, so the
    /// UI can wake up and poll.
    pub fn resolve_definition<F>(&self, word: String, resolver: Arc<DefinitionResolver>, notify: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let resolution = runtime.block_on(resolver.resolve(&word));

            let _ = sender.send(TaskResult::DefinitionResolved { word, resolution });
            notify();
        });
    }
}
