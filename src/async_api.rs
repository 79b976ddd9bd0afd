//! Async-friendly session facade over the blocking client.
//!
//! The worker thread owns a synchronous [`GenerateClient`] and
//! executes commands sent from async tasks, so callers get an async
//! interface without the client needing to be `Send` across tasks.
//!
//! A session also owns the single-submission discipline: at most one
//! generation request is in flight at a time, and the busy flag is
//! always cleared when the call settles, success or failure, so the
//! caller's trigger control can be re-enabled unconditionally.

use crate::client::GenerateClient;
use crate::{ClientConfig, DesignRequest, Error, GeneratedPlan, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use tokio::sync::oneshot;

enum Command {
    Generate(DesignRequest, oneshot::Sender<Result<GeneratedPlan>>),
    Close(oneshot::Sender<Result<()>>),
}

// Clears the busy flag when the generate call settles on any path.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// An async session against the generation service.
#[derive(Clone)]
pub struct Session {
    cmd_tx: Sender<Command>,
    in_flight: Arc<AtomicBool>,
}

impl Session {
    /// Create a new session (spawns a background thread that owns the
    /// client).
    pub async fn new(config: Option<ClientConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (init_tx, init_rx): (oneshot::Sender<Result<()>>, oneshot::Receiver<Result<()>>) =
            oneshot::channel();

        thread::spawn(move || {
            // Initialize the client on the worker thread
            let client = match GenerateClient::new(config) {
                Ok(c) => c,
                Err(err) => {
                    let _ = init_tx.send(Err(err));
                    return;
                }
            };

            let _ = init_tx.send(Ok(()));

            // Command loop
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Generate(request, resp) => {
                        let res = client.generate(&request);
                        let _ = resp.send(res);
                    }
                    Command::Close(resp) => {
                        let _ = resp.send(Ok(()));
                        break;
                    }
                }
            }
        });

        let init_res = init_rx
            .await
            .map_err(|e| Error::Other(format!("Worker init canceled: {}", e)))?;
        init_res?;

        Ok(Self {
            cmd_tx,
            in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Whether a new submission may be triggered right now.
    pub fn is_idle(&self) -> bool {
        !self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit a design request and await the generated plan.
    ///
    /// Fails fast with [`Error::Busy`] while another request is in
    /// flight; there is no queueing and no cancellation. The busy flag
    /// is released when the call settles regardless of outcome.
    pub async fn generate(&self, request: DesignRequest) -> Result<GeneratedPlan> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(Error::Busy);
        }
        let _guard = InFlightGuard(self.in_flight.clone());

        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Generate(request, tx));
        rx.await
            .map_err(|e| Error::Other(format!("Generate canceled: {}", e)))?
    }

    /// Shutdown the background worker and close the session.
    pub async fn close(self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        let _ = self.cmd_tx.send(Command::Close(tx));
        rx.await
            .map_err(|e| Error::Other(format!("Close canceled: {}", e)))?
    }
}
