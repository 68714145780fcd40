//! Fixed-width NACHA record encoders.
//!
//! Pure functions mapping typed inputs to 94-character ASCII lines. Field
//! layouts are reproduced bit-for-bit from the NACHA format: alphanumeric
//! fields are left-justified and space-padded, numeric fields are
//! right-justified and zero-padded. A numeric value wider than its field is
//! an internal defect and fails loudly; money is never silently truncated.

use crate::context::BatchContext;
use crate::entry::PaymentEntry;
use crate::error::{GeneratorError, Result};
use crate::totals::RunningTotals;
use chrono::{NaiveDate, NaiveDateTime};

/// Every NACHA record is exactly this many characters.
pub const RECORD_SIZE: usize = 94;

/// Records are delivered in blocks of this many lines, padded with filler.
pub const BLOCKING_FACTOR: usize = 10;

/// Service class code for a batch mixing credits and debits.
pub const SERVICE_CLASS_MIXED: &str = "200";

/// Standard entry class for payroll-style batches.
const SEC_CODE: &str = "PPD";

/// Company entry description carried on the batch header.
const ENTRY_DESCRIPTION: &str = "PAYROLL";

const PRIORITY_CODE: &str = "01";
const FILE_ID_MODIFIER: char = 'A';
const FORMAT_CODE: char = '1';
const ORIGINATOR_STATUS: char = '1';

/// Left-justified alphanumeric field: space-padded, truncated at `width`.
fn alpha(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{:<width$}", truncated)
}

/// Right-justified numeric field: zero-padded, overflow is a defect.
fn numeric(value: u64, width: usize, record: &'static str, field: &'static str) -> Result<String> {
    let digits = value.to_string();
    if digits.len() > width {
        return Err(GeneratorError::FieldOverflow {
            record,
            field,
            value: digits,
            width,
        });
    }
    Ok(format!("{:0>width$}", digits))
}

/// Entry hash field: the one numeric field that truncates instead of failing.
/// The hash accumulates untruncated; the field keeps the rightmost 10 digits,
/// as implied by the fixed field width.
fn entry_hash_field(hash: u64) -> String {
    let digits = hash.to_string();
    if digits.len() > 10 {
        digits[digits.len() - 10..].to_string()
    } else {
        format!("{:0>10}", digits)
    }
}

/// Normalizes an assembled line to exactly [`RECORD_SIZE`] characters.
fn normalize(mut line: String) -> String {
    line.truncate(RECORD_SIZE);
    format!("{:<width$}", line, width = RECORD_SIZE)
}

fn yymmdd(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// File Header record (type `1`).
pub fn file_header(context: &BatchContext, creation: NaiveDateTime) -> String {
    let mut line = String::with_capacity(RECORD_SIZE);
    line.push('1');
    line.push_str(PRIORITY_CODE);
    // immediate destination: one leading space then the 9-digit routing number
    line.push_str(&alpha(&format!(" {}", context.origin_routing_number), 10));
    line.push_str(&alpha(&context.company_id, 10));
    line.push_str(&creation.format("%y%m%d").to_string());
    line.push_str(&creation.format("%H%M").to_string());
    line.push(FILE_ID_MODIFIER);
    line.push_str("094");
    line.push_str("10");
    line.push(FORMAT_CODE);
    line.push_str(&alpha(&context.company_name, 23));
    line.push_str(&alpha(&context.company_name, 23));
    line.push_str(&alpha("", 8));
    normalize(line)
}

/// Batch Header record (type `5`).
pub fn batch_header(context: &BatchContext) -> Result<String> {
    let mut line = String::with_capacity(RECORD_SIZE);
    line.push('5');
    line.push_str(SERVICE_CLASS_MIXED);
    line.push_str(&alpha(&context.company_name, 16));
    line.push_str(&alpha("", 20));
    line.push_str(&alpha(&context.company_id, 10));
    line.push_str(SEC_CODE);
    line.push_str(&alpha(ENTRY_DESCRIPTION, 10));
    line.push_str(&yymmdd(context.effective_date));
    line.push_str(&yymmdd(context.effective_date));
    line.push_str(&alpha("", 3));
    line.push(ORIGINATOR_STATUS);
    line.push_str(&alpha(context.origin_dfi(), 8));
    line.push_str(&numeric(
        context.batch_number as u64,
        7,
        "batch header",
        "batch number",
    )?);
    Ok(normalize(line))
}

/// Entry Detail record (type `6`).
///
/// `cents` is the entry amount already converted to whole cents; `sequence`
/// is the entry's 1-based position in the batch, which becomes its trace
/// number. The check digit is the routing number's own last digit, matching
/// the files partners already accept (not a computed MOD-10 ABA checksum).
pub fn entry_detail(entry: &PaymentEntry, cents: u64, sequence: usize) -> Result<String> {
    let routing = &entry.routing_number;
    let mut line = String::with_capacity(RECORD_SIZE);
    line.push('6');
    line.push_str(&alpha(&entry.transaction_code, 2));
    line.push_str(&routing[..8]);
    line.push_str(&routing[8..9]);
    line.push_str(&alpha(&entry.account_number, 17));
    line.push_str(&numeric(cents, 10, "entry detail", "amount")?);
    line.push_str(&alpha(&entry.payee_id, 15));
    line.push_str(&alpha(&entry.payee_name, 22));
    line.push_str(&alpha("", 2));
    line.push('0');
    line.push_str(&numeric(sequence as u64, 15, "entry detail", "trace number")?);
    Ok(normalize(line))
}

/// Batch Control record (type `8`).
pub fn batch_control(context: &BatchContext, totals: &RunningTotals) -> Result<String> {
    let mut line = String::with_capacity(RECORD_SIZE);
    line.push('8');
    line.push_str(SERVICE_CLASS_MIXED);
    line.push_str(&numeric(
        totals.entry_count as u64,
        6,
        "batch control",
        "entry count",
    )?);
    line.push_str(&entry_hash_field(totals.entry_hash));
    line.push_str(&numeric(totals.debit_cents, 12, "batch control", "total debit")?);
    line.push_str(&numeric(totals.credit_cents, 12, "batch control", "total credit")?);
    line.push_str(&alpha(&context.company_id, 10));
    line.push_str(&alpha("", 19));
    line.push_str(&alpha("", 6));
    line.push_str(&alpha(context.origin_dfi(), 8));
    line.push_str(&numeric(
        context.batch_number as u64,
        7,
        "batch control",
        "batch number",
    )?);
    Ok(normalize(line))
}

/// File Control record (type `9`).
///
/// `block_count` is `ceil(records before padding / 10)` and must be computed
/// before filler lines are appended.
pub fn file_control(totals: &RunningTotals, batch_count: u32, block_count: u32) -> Result<String> {
    let mut line = String::with_capacity(RECORD_SIZE);
    line.push('9');
    line.push_str(&numeric(batch_count as u64, 6, "file control", "batch count")?);
    line.push_str(&numeric(block_count as u64, 6, "file control", "block count")?);
    line.push_str(&numeric(
        totals.entry_count as u64,
        8,
        "file control",
        "entry count",
    )?);
    line.push_str(&entry_hash_field(totals.entry_hash));
    line.push_str(&numeric(totals.debit_cents, 12, "file control", "total debit")?);
    line.push_str(&numeric(totals.credit_cents, 12, "file control", "total credit")?);
    line.push_str(&alpha("", 39));
    Ok(normalize(line))
}

/// Filler record: a full line of `9`s, used to pad the file to a whole block.
pub fn filler_record() -> String {
    "9".repeat(RECORD_SIZE)
}
