// src/progress.rs
use tracing::info;

/// Stages of one run, in the order they are entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Extracting,
    Comparing,
    Notifying,
    Persisting,
    Skipping,
    Done,
}

/// Lightweight progress reporting for a run.
/// The binary narrates to the log; tests record stages.
pub trait Progress {
    /// Called on every stage transition.
    fn stage(&mut self, _stage: Stage) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Narrates the run through `tracing`.
pub struct LogProgress;

impl Progress for LogProgress {
    fn stage(&mut self, stage: Stage) {
        tracing::debug!("stage: {stage:?}");
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }
}
