//! Batch input validation.
//!
//! A NACHA file is atomic from the bank's perspective: either every entry is
//! encodable or no file is produced. Validation therefore collects every
//! violation before rejecting the batch, so the caller can correct all of
//! them in one pass.

use crate::context::BatchContext;
use crate::entry::PaymentEntry;
use crate::error::{GeneratorError, Result};

/// Checks the company ACH identity needed to originate a file.
///
/// Failures here are configuration errors, surfaced before any entry is
/// looked at.
pub fn check_context(context: &BatchContext) -> Result<()> {
    let mut violations = Vec::new();

    check_routing(&context.origin_routing_number, "origin routing number", &mut violations);
    if context.origin_account_number.is_empty() {
        violations.push("origin account number is missing".to_string());
    }
    if context.company_id.is_empty() {
        violations.push("company ID is missing".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(GeneratorError::Configuration { violations })
    }
}

/// Checks every entry in the batch, rejecting the whole batch on any failure.
///
/// An empty batch is its own error kind: it means nothing to do, not bad data.
pub fn check_entries(entries: &[PaymentEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(GeneratorError::EmptyBatch);
    }

    let mut violations = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let n = idx + 1;
        let mut entry_violations = Vec::new();

        check_routing(&entry.routing_number, "routing number", &mut entry_violations);
        if entry.account_number.is_empty() {
            entry_violations.push("account number is missing".to_string());
        }
        if !entry.amount.is_positive() {
            entry_violations.push(format!("amount {} must be greater than zero", entry.amount));
        }
        if entry.payee_name.is_empty() {
            entry_violations.push("payee name is missing".to_string());
        }

        violations.extend(entry_violations.into_iter().map(|v| format!("entry {}: {}", n, v)));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(GeneratorError::Validation { violations })
    }
}

/// A routing number must be exactly 9 ASCII digits: the encoder slices its
/// 8-digit DFI prefix and final check digit, so shape is part of presence.
fn check_routing(routing: &str, label: &str, violations: &mut Vec<String>) {
    if routing.is_empty() {
        violations.push(format!("{} is missing", label));
    } else if routing.len() != 9 || !routing.bytes().all(|b| b.is_ascii_digit()) {
        violations.push(format!("{} `{}` must be 9 digits", label, routing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use std::str::FromStr;

    fn context() -> BatchContext {
        serde_json::from_str(
            r#"{
                "origin_routing_number": "123456789",
                "origin_account_number": "987654",
                "company_id": "CMP0000001",
                "company_name": "Acme Co",
                "batch_number": 1,
                "effective_date": "2024-06-01"
            }"#,
        )
        .unwrap()
    }

    fn entry(amount: &str) -> PaymentEntry {
        PaymentEntry {
            routing_number: "987654321".to_string(),
            account_number: "1111".to_string(),
            transaction_code: "22".to_string(),
            amount: Amount::from_str(amount).unwrap(),
            payee_id: "EMP001".to_string(),
            payee_name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_valid_context_passes() {
        assert!(check_context(&context()).is_ok());
    }

    #[test]
    fn test_context_missing_fields_is_configuration_error() {
        let mut ctx = context();
        ctx.origin_routing_number.clear();
        ctx.company_id.clear();

        match check_context(&ctx) {
            Err(GeneratorError::Configuration { violations }) => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_routing_rejected() {
        let mut ctx = context();
        ctx.origin_routing_number = "12345".to_string();
        assert!(matches!(
            check_context(&ctx),
            Err(GeneratorError::Configuration { .. })
        ));
    }

    #[test]
    fn test_valid_entries_pass() {
        assert!(check_entries(&[entry("100.00"), entry("0.01")]).is_ok());
    }

    #[test]
    fn test_empty_batch_is_distinct_error() {
        assert!(matches!(check_entries(&[]), Err(GeneratorError::EmptyBatch)));
    }

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        for bad in ["0.00", "-5.00"] {
            assert!(matches!(
                check_entries(&[entry(bad)]),
                Err(GeneratorError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut first = entry("0.00");
        first.payee_name.clear();
        let mut second = entry("10.00");
        second.routing_number = "12AB".to_string();

        match check_entries(&[first, second]) {
            Err(GeneratorError::Validation { violations }) => {
                assert_eq!(violations.len(), 3);
                assert!(violations[0].starts_with("entry 1:"));
                assert!(violations[2].starts_with("entry 2:"));
            }
            other => panic!("expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_one_bad_entry_rejects_whole_batch() {
        let entries = [entry("100.00"), entry("0.00"), entry("50.00")];
        assert!(check_entries(&entries).is_err());
    }
}
