//! Payment entry models for CSV parsing and internal representation.

use crate::amount::Amount;
use serde::Deserialize;
use std::str::FromStr;

/// Raw pending-entry record as read from CSV.
///
/// Uses string-based fields for flexibility; `parse` produces the typed
/// [`PaymentEntry`] or `None` when a field is unusable.
#[derive(Debug, Deserialize)]
pub struct EntryRecord {
    /// Destination routing number (9 digits)
    pub routing_number: String,

    /// Destination account number (up to 17 chars)
    pub account_number: String,

    /// 2-digit NACHA transaction code (e.g. 22 checking credit, 27 checking debit)
    pub transaction_code: String,

    /// Dollar amount, must be strictly positive
    pub amount: Option<String>,

    /// Payee identification, free text up to 15 chars
    #[serde(default)]
    pub payee_id: String,

    /// Payee name, free text up to 22 chars
    pub payee_name: String,
}

impl EntryRecord {
    /// Parses the raw CSV record into a typed payment entry.
    ///
    /// Returns `None` if the amount field is absent or unparseable; field
    /// presence and positivity are checked later by the batch validator so
    /// that all violations can be reported together.
    pub fn parse(&self) -> Option<PaymentEntry> {
        let amount = self.parse_amount()?;
        Some(PaymentEntry {
            routing_number: self.routing_number.trim().to_string(),
            account_number: self.account_number.trim().to_string(),
            transaction_code: self.transaction_code.trim().to_string(),
            amount,
            payee_id: self.payee_id.trim().to_string(),
            payee_name: self.payee_name.trim().to_string(),
        })
    }

    /// Parses the amount field into an `Amount`.
    fn parse_amount(&self) -> Option<Amount> {
        let amount_str = self.amount.as_ref()?;
        let trimmed = amount_str.trim();
        if trimmed.is_empty() {
            return None;
        }
        Amount::from_str(trimmed).ok()
    }
}

/// One instruction to move money to or from a bank account.
///
/// Immutable once validated; owned by the batch for the duration of one
/// file-generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEntry {
    /// Destination routing number (9 digits)
    pub routing_number: String,

    /// Destination account number (up to 17 chars)
    pub account_number: String,

    /// 2-digit transaction code distinguishing credit/debit and account type
    pub transaction_code: String,

    /// Dollar amount to transfer
    pub amount: Amount,

    /// Payee identification (free text, ≤15 chars on the wire)
    pub payee_id: String,

    /// Payee name (free text, ≤22 chars on the wire)
    pub payee_name: String,
}

impl PaymentEntry {
    /// `true` when the transaction code classifies as a credit.
    ///
    /// Codes beginning with `2` are credits; everything else is a debit.
    /// This is the sole classification rule for the batch totals.
    pub fn is_credit(&self) -> bool {
        self.transaction_code.starts_with('2')
    }
}
