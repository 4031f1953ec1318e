//! Background solver thread
//!
//! Keeps solving off the caller's thread. Every request gets a monotonically
//! increasing id; only the response to the most recent request is handed back
//! and older responses are discarded. The worker owns its own feedback cache.

use super::config::SolverConfig;
use super::engine::{Solution, Solver};
use crate::core::Constraint;
use crate::wordlists::Corpus;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

/// Identifier of a submitted request
pub type RequestId = u64;

struct SolveRequest {
    id: RequestId,
    constraints: Vec<Constraint>,
    turns_left: u32,
}

/// A finished solve, tagged with the request it answers
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResponse {
    pub id: RequestId,
    pub solution: Solution,
}

/// Handle to a solver thread
pub struct SolverWorker {
    requests: Option<Sender<SolveRequest>>,
    responses: Receiver<SolveResponse>,
    next_id: RequestId,
    latest: Option<RequestId>,
    handle: Option<JoinHandle<()>>,
}

impl SolverWorker {
    /// Start a worker thread over `corpus`
    #[must_use]
    pub fn spawn(corpus: Arc<Corpus>, config: SolverConfig) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<SolveRequest>();
        let (response_tx, response_rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let solver = Solver::new(&corpus, config);
            let mut cache = solver.new_cache();

            while let Ok(mut request) = request_rx.recv() {
                // Only the newest queued request matters
                while let Ok(newer) = request_rx.try_recv() {
                    request = newer;
                }

                let solution = solver.solve(&mut cache, &request.constraints, request.turns_left);
                let response = SolveResponse {
                    id: request.id,
                    solution,
                };
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(request_tx),
            responses: response_rx,
            next_id: 1,
            latest: None,
            handle: Some(handle),
        }
    }

    /// Queue a solve; returns its id
    ///
    /// Submitting again before the response arrives makes the earlier
    /// request stale.
    pub fn submit(&mut self, constraints: Vec<Constraint>, turns_left: u32) -> RequestId {
        let id = self.next_id;
        self.next_id += 1;
        self.latest = Some(id);

        if let Some(requests) = &self.requests {
            // A dead worker simply never answers
            let _ = requests.send(SolveRequest {
                id,
                constraints,
                turns_left,
            });
        }

        id
    }

    /// Id of the most recent submission
    #[must_use]
    pub const fn latest_id(&self) -> Option<RequestId> {
        self.latest
    }

    /// Whether a response to the latest request is still outstanding
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    fn accept(&mut self, response: SolveResponse) -> Option<SolveResponse> {
        if Some(response.id) == self.latest {
            self.latest = None;
            Some(response)
        } else {
            None
        }
    }

    /// Non-blocking: the latest response if it has arrived
    pub fn try_latest(&mut self) -> Option<SolveResponse> {
        loop {
            match self.responses.try_recv() {
                Ok(response) => {
                    if let Some(current) = self.accept(response) {
                        return Some(current);
                    }
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return None,
            }
        }
    }

    /// Block until the latest request is answered
    ///
    /// Returns `None` if nothing is pending or the worker has stopped.
    pub fn wait_latest(&mut self) -> Option<SolveResponse> {
        while self.is_pending() {
            let response = self.responses.recv().ok()?;
            if let Some(current) = self.accept(response) {
                return Some(current);
            }
        }
        None
    }
}

impl Drop for SolverWorker {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn corpus() -> Arc<Corpus> {
        Arc::new(Corpus::new(
            &["crane", "slate", "irate", "crate", "grate"],
            &["salet"],
        ))
    }

    #[test]
    fn responds_to_latest_request() {
        let mut worker = SolverWorker::spawn(corpus(), SolverConfig::default());

        let id = worker.submit(Vec::new(), 6);
        let response = worker.wait_latest().unwrap();

        assert_eq!(response.id, id);
        assert_eq!(response.solution.candidate_count, 5);
        assert!(!worker.is_pending());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut worker = SolverWorker::spawn(corpus(), SolverConfig::default());
        let secret = Word::new("grate").unwrap();
        let guess = Word::new("irate").unwrap();

        let first = worker.submit(Vec::new(), 6);
        let second = worker.submit(vec![Constraint::observed(&secret, guess)], 5);
        assert!(second > first);

        let response = worker.wait_latest().unwrap();
        assert_eq!(response.id, second);
        assert!(response.solution.candidate_count < 5);
        // The first answer, if it was computed, never surfaces
        assert!(worker.try_latest().is_none());
    }

    #[test]
    fn ids_increase_monotonically() {
        let mut worker = SolverWorker::spawn(corpus(), SolverConfig::default());
        let ids: Vec<RequestId> = (0..4).map(|_| worker.submit(Vec::new(), 6)).collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(worker.latest_id(), ids.last().copied());
        assert_eq!(worker.wait_latest().unwrap().id, ids[3]);
    }

    #[test]
    fn nothing_pending_returns_none() {
        let mut worker = SolverWorker::spawn(corpus(), SolverConfig::default());
        assert!(worker.wait_latest().is_none());
        assert!(worker.try_latest().is_none());
    }
}
