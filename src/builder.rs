//! Assembles a complete NACHA file from a validated batch.
//!
//! This is a deterministic, single-pass fold over the ordered entry list:
//! the same context, entries, and creation stamp always produce byte-identical
//! output. All I/O lives at the orchestrator boundary; nothing here blocks.

use crate::amount::Amount;
use crate::context::BatchContext;
use crate::entry::PaymentEntry;
use crate::error::Result;
use crate::record::{self, BLOCKING_FACTOR, RECORD_SIZE};
use crate::totals::RunningTotals;
use crate::validate;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;

/// Derived summary of a generated file, reported alongside the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub total_entries: u32,
    pub total_credit_amount: Amount,
    pub total_debit_amount: Amount,
    pub entry_hash: u64,
    pub effective_date: NaiveDate,
}

/// The final artifact: the full file text plus its derived summary.
///
/// Immutable once built; persisting it is the storage collaborator's job.
#[derive(Debug, Clone)]
pub struct NachaFile {
    /// Conventional name: `ACH_<batch-number>_<YYYYMMDD>.txt`
    pub file_name: String,

    /// Newline-joined record lines, each exactly 94 characters
    pub content: String,

    pub summary: FileSummary,
}

impl NachaFile {
    /// The record lines of the file, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }
}

/// Builds a NACHA file from a batch context and its ordered pending entries.
///
/// Validation is atomic: any configuration or entry violation aborts the
/// whole batch with zero output lines. Entries are encoded strictly in input
/// order because each trace number is derived from its position.
pub fn build_nacha_file(
    context: &BatchContext,
    entries: &[PaymentEntry],
    creation: NaiveDateTime,
) -> Result<NachaFile> {
    validate::check_context(context)?;
    validate::check_entries(entries)?;

    let mut lines = Vec::with_capacity(entries.len() + 4 + BLOCKING_FACTOR);
    lines.push(record::file_header(context, creation));
    lines.push(record::batch_header(context)?);

    let mut totals = RunningTotals::default();
    for (idx, entry) in entries.iter().enumerate() {
        let cents = entry.amount.to_cents()?;
        lines.push(record::entry_detail(entry, cents, idx + 1)?);
        totals = totals.observe(entry, cents);
        debug!(
            "encoded entry {} of {}: {} cents to routing {}",
            idx + 1,
            entries.len(),
            cents,
            entry.routing_number
        );
    }

    // block count covers every record before padding, including the two
    // control records about to be appended; filler never counts
    let unpadded = lines.len() + 2;
    let block_count = unpadded.div_ceil(BLOCKING_FACTOR) as u32;

    lines.push(record::batch_control(context, &totals)?);
    lines.push(record::file_control(&totals, 1, block_count)?);

    while lines.len() % BLOCKING_FACTOR != 0 {
        lines.push(record::filler_record());
    }

    debug_assert!(lines.iter().all(|l| l.len() == RECORD_SIZE));

    let summary = FileSummary {
        total_entries: totals.entry_count,
        total_credit_amount: cents_to_amount(totals.credit_cents),
        total_debit_amount: cents_to_amount(totals.debit_cents),
        entry_hash: totals.entry_hash,
        effective_date: context.effective_date,
    };

    Ok(NachaFile {
        file_name: format!(
            "ACH_{}_{}.txt",
            context.batch_number,
            context.effective_date.format("%Y%m%d")
        ),
        content: lines.join("\n"),
        summary,
    })
}

fn cents_to_amount(cents: u64) -> Amount {
    Amount::new(rust_decimal::Decimal::new(cents as i64, 2))
}
