//! Orchestrates one file-generation run against an external store.
//!
//! The run walks a fixed state machine; `Failed` is reachable from every
//! state and always means zero output. Entries are marked processed in one
//! batched store call only after the artifact is fully built and persisted,
//! so a failure partway through can never leave a half-marked batch.

use crate::builder::{self, NachaFile};
use crate::error::Result;
use crate::store::BatchStore;
use crate::validate;
use chrono::NaiveDateTime;
use log::{info, warn};
use std::fmt;

/// Phase of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    LoadingContext,
    Validating,
    Encoding,
    Finalizing,
    Completed,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::LoadingContext => "loading-context",
            RunState::Validating => "validating",
            RunState::Encoding => "encoding",
            RunState::Finalizing => "finalizing",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One file-generation run.
pub struct GenerationRun {
    state: RunState,
    creation: NaiveDateTime,
}

impl GenerationRun {
    /// Creates a run stamped with the current local time.
    pub fn new() -> Self {
        Self::with_creation(chrono::Local::now().naive_local())
    }

    /// Creates a run with an explicit creation stamp (deterministic output
    /// for the same inputs).
    pub fn with_creation(creation: NaiveDateTime) -> Self {
        GenerationRun {
            state: RunState::LoadingContext,
            creation,
        }
    }

    /// Current phase of the run.
    pub fn state(&self) -> RunState {
        self.state
    }

    fn advance(&mut self, next: RunState) {
        info!("generation run: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Executes the full run: load, validate, encode, finalize, persist,
    /// then mark every entry processed in a single store call.
    pub fn execute(&mut self, store: &mut dyn BatchStore) -> Result<NachaFile> {
        match self.run_pipeline(store) {
            Ok(file) => {
                self.advance(RunState::Completed);
                Ok(file)
            }
            Err(e) => {
                let remedy = if e.is_data_error() {
                    "requires data correction"
                } else {
                    "retryable"
                };
                warn!("generation run failed while {} ({}): {}", self.state, remedy, e);
                self.state = RunState::Failed;
                Err(e)
            }
        }
    }

    fn run_pipeline(&mut self, store: &mut dyn BatchStore) -> Result<NachaFile> {
        let context = store.load_context()?;
        let entries = store.load_pending_entries()?;

        self.advance(RunState::Validating);
        validate::check_context(&context)?;
        validate::check_entries(&entries)?;

        self.advance(RunState::Encoding);
        let file = builder::build_nacha_file(&context, &entries, self.creation)?;

        self.advance(RunState::Finalizing);
        store.persist_file(&file)?;
        store.mark_processed(&entries)?;

        info!(
            "generated {}: {} entries, credit {}, debit {}",
            file.file_name,
            file.summary.total_entries,
            file.summary.total_credit_amount,
            file.summary.total_debit_amount
        );
        Ok(file)
    }
}

impl Default for GenerationRun {
    fn default() -> Self {
        Self::new()
    }
}
