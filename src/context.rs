//! Company-level ACH identity for one file-generation run.

use chrono::NaiveDate;
use serde::Deserialize;

/// Company ACH settings supplied once per run; read-only during encoding.
///
/// Loaded from the company-settings store (a JSON document at the CLI
/// boundary). Missing identity fields are a configuration error, distinct
/// from per-entry validation failures.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchContext {
    /// Originating (ODFI) routing number, 9 digits
    pub origin_routing_number: String,

    /// Originating account number at the ODFI
    pub origin_account_number: String,

    /// Company identifier, up to 10 chars
    pub company_id: String,

    /// Company name; rendered at width 16 in the batch header and 23 in the
    /// file header
    pub company_name: String,

    /// Batch sequence number for this run
    pub batch_number: u32,

    /// Effective (settlement) date for every entry in the batch
    pub effective_date: NaiveDate,
}

impl BatchContext {
    /// First 8 digits of the origin routing number (the origin DFI field).
    pub fn origin_dfi(&self) -> &str {
        &self.origin_routing_number[..self.origin_routing_number.len().min(8)]
    }
}
