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
    dictionary,
    ip,
    player,
};

/// Runs network work off the GUI thread. Each job spawns a thread that
/// blocks on the shared runtime and reports back over the channel.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
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

    /// Fetch definitions for `word`, tagging the response with `seq`.
    /// There is no cancellation of in-flight requests; staleness is
    /// resolved on the receiving side by the sequence tag.
    pub fn lookup(&self, word: String, seq: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                dictionary::api::lookup(&word).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::Lookup { seq, word, result });
        });
    }

    pub fn fetch_ip(&self) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { ip::fetch_public_ip().await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::IpAddress(result));
        });
    }

    pub fn play_pronunciation(&self, url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                player::download_and_play(&url).await.map(|_| ()).map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::AudioPlayed(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
