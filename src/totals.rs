//! Running batch totals feeding the control records.
//!
//! Accumulation is an explicit fold: each step consumes the previous
//! snapshot and returns a new one, so there is no shared mutable state to
//! race on or observe half-updated.

use crate::entry::PaymentEntry;

/// Totals accumulated while entries are encoded, in encoding order.
///
/// Lives only for the duration of one batch; discarded after the File
/// Control record is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningTotals {
    /// Number of entries encoded so far
    pub entry_count: u32,

    /// Sum of the first 8 digits of every destination routing number,
    /// accumulated as a full integer. Any truncation to the 10-digit wire
    /// field happens at render time only.
    pub entry_hash: u64,

    /// Sum of credit amounts, in cents
    pub credit_cents: u64,

    /// Sum of debit amounts, in cents
    pub debit_cents: u64,
}

impl RunningTotals {
    /// Folds one encoded entry into the totals, returning the next snapshot.
    ///
    /// Transaction codes beginning with `2` accumulate into credits; all
    /// others into debits.
    pub fn observe(self, entry: &PaymentEntry, cents: u64) -> Self {
        // Safety: routing numbers are validated as 9 ASCII digits before encoding
        let dfi_prefix: u64 = entry.routing_number[..8]
            .parse()
            .expect("routing number validated as 9 digits");

        let (credit_cents, debit_cents) = if entry.is_credit() {
            (self.credit_cents + cents, self.debit_cents)
        } else {
            (self.credit_cents, self.debit_cents + cents)
        };

        RunningTotals {
            entry_count: self.entry_count + 1,
            entry_hash: self.entry_hash + dfi_prefix,
            credit_cents,
            debit_cents,
        }
    }
}
