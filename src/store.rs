//! Storage boundary for one generation run.
//!
//! The core is a pure function of context + entries; everything fallible and
//! retryable (fetching inputs, persisting the artifact, marking entries
//! processed) goes through this trait so the pipeline never touches I/O
//! directly.

use crate::builder::NachaFile;
use crate::context::BatchContext;
use crate::entry::{EntryRecord, PaymentEntry};
use crate::error::{GeneratorError, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::fs;
use std::path::PathBuf;

/// External store the orchestrator runs against.
///
/// Implementations must treat `mark_processed` as a single batched write:
/// the orchestrator calls it exactly once, after the artifact is fully built
/// and persisted, never per entry.
pub trait BatchStore {
    /// Fetches the company ACH settings for this run.
    fn load_context(&mut self) -> Result<BatchContext>;

    /// Fetches the pending entries, in the order they should be encoded.
    fn load_pending_entries(&mut self) -> Result<Vec<PaymentEntry>>;

    /// Persists the finished artifact.
    fn persist_file(&mut self, file: &NachaFile) -> Result<()>;

    /// Marks every encoded entry as processed, in one operation.
    fn mark_processed(&mut self, entries: &[PaymentEntry]) -> Result<()>;
}

/// Filesystem-backed store: company settings as JSON, pending entries as
/// CSV, the artifact and a processed-entries sidecar written to an output
/// directory.
pub struct FsStore {
    settings_path: PathBuf,
    entries_path: PathBuf,
    output_dir: PathBuf,
}

impl FsStore {
    pub fn new(
        settings_path: impl Into<PathBuf>,
        entries_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        FsStore {
            settings_path: settings_path.into(),
            entries_path: entries_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Path the artifact was (or will be) written to.
    pub fn output_path(&self, file: &NachaFile) -> PathBuf {
        self.output_dir.join(&file.file_name)
    }
}

impl BatchStore for FsStore {
    fn load_context(&mut self) -> Result<BatchContext> {
        let raw = fs::read_to_string(&self.settings_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Reads the pending-entries CSV.
    ///
    /// Rows that cannot even be parsed into an entry (e.g. unreadable
    /// amounts) reject the load outright: a NACHA batch is atomic, so there
    /// is no skip-and-continue here. All bad rows are reported together.
    fn load_pending_entries(&mut self) -> Result<Vec<PaymentEntry>> {
        let file = fs::File::open(&self.entries_path)?;
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        let mut entries = Vec::new();
        let mut violations = Vec::new();
        for (row_idx, result) in reader.deserialize::<EntryRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row
            match result {
                Ok(record) => match record.parse() {
                    Some(entry) => entries.push(entry),
                    None => violations.push(format!("row {}: unreadable amount", row_num)),
                },
                Err(e) => violations.push(format!("row {}: {}", row_num, e)),
            }
        }

        if violations.is_empty() {
            debug!("loaded {} pending entries", entries.len());
            Ok(entries)
        } else {
            Err(GeneratorError::Validation { violations })
        }
    }

    fn persist_file(&mut self, file: &NachaFile) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path(file);
        fs::write(&path, format!("{}\n", file.content))?;
        debug!("wrote artifact to {}", path.display());
        Ok(())
    }

    fn mark_processed(&mut self, entries: &[PaymentEntry]) -> Result<()> {
        let path = self.output_dir.join("processed.csv");
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record([
            "routing_number",
            "account_number",
            "transaction_code",
            "amount",
            "payee_id",
            "payee_name",
        ])?;
        for entry in entries {
            writer.write_record([
                entry.routing_number.as_str(),
                entry.account_number.as_str(),
                entry.transaction_code.as_str(),
                &entry.amount.to_string(),
                entry.payee_id.as_str(),
                entry.payee_name.as_str(),
            ])?;
        }
        writer.flush()?;
        debug!("marked {} entries processed", entries.len());
        Ok(())
    }
}
