use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::questions::backend::QuestionBackend;
use crate::questions::question_model::QuestionDescriptor;

/// The message a fetch worker sends back when the provider answers.
///
/// `request_id` is the tag the store compares against its latest issued
/// id; a mismatch means a newer request superseded this one and the
/// resolution must be discarded. Provider failures travel as an error
/// string so the store can downgrade them to an advisory.
#[derive(Debug)]
pub struct FetchResolution {
    pub request_id: u64,
    pub topic: String,
    pub outcome: Result<Vec<QuestionDescriptor>, String>,
}

/// Dispatches question fetches onto worker threads.
///
/// Each dispatch gets a monotonically increasing request id. Superseded
/// workers are never cancelled; they run to completion and their sends
/// are ignored at apply time (discard-on-mismatch is the contract, not
/// cancellation).
pub struct QuestionFetcher {
    backend: Arc<dyn QuestionBackend>,
    tx: Sender<FetchResolution>,
    next_request_id: u64,
}

impl QuestionFetcher {
    pub fn new(backend: Arc<dyn QuestionBackend>) -> (Self, Receiver<FetchResolution>) {
        let (tx, rx) = channel();
        (
            Self {
                backend,
                tx,
                next_request_id: 0,
            },
            rx,
        )
    }

    /// Start a fetch for `topic` on a worker thread; returns the id the
    /// resolution will carry.
    pub fn dispatch(&mut self, topic: &str) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        let topic = topic.to_string();

        thread::spawn(move || {
            let outcome = backend.fetch(&topic).map_err(|e| e.to_string());
            // The store may be gone by the time a stale worker finishes;
            // a closed channel is not an error here.
            let _ = tx.send(FetchResolution {
                request_id,
                topic,
                outcome,
            });
        });

        request_id
    }
}
