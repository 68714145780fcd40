//! Wire-format property tests for the NACHA file builder.
//!
//! These exercise the library directly and pin down the contract a banking
//! partner relies on: line width, blocking, rounding, determinism, and
//! batch atomicity.

use chrono::{NaiveDate, NaiveDateTime};
use nacha_generator::{
    build_nacha_file, Amount, BatchContext, GeneratorError, PaymentEntry, RECORD_SIZE,
};
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

fn entry(routing: &str, account: &str, code: &str, amount: &str, name: &str) -> PaymentEntry {
    PaymentEntry {
        routing_number: routing.to_string(),
        account_number: account.to_string(),
        transaction_code: code.to_string(),
        amount: Amount::from_str(amount).unwrap(),
        payee_id: "EMP001".to_string(),
        payee_name: name.to_string(),
    }
}

fn creation() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 30)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

// ==================== LINE WIDTH AND BLOCKING ====================

#[test]
fn test_every_line_is_exactly_94_chars() {
    for count in [1, 5, 6, 13] {
        let entries: Vec<PaymentEntry> = (0..count)
            .map(|_| entry("987654321", "1111", "22", "10.00", "Jane Doe"))
            .collect();
        let file = build_nacha_file(&context(), &entries, creation()).unwrap();

        for line in file.lines() {
            assert_eq!(line.len(), RECORD_SIZE, "bad width in: {:?}", line);
        }
    }
}

#[test]
fn test_line_count_is_always_a_multiple_of_ten() {
    for count in 1..=25 {
        let entries: Vec<PaymentEntry> = (0..count)
            .map(|_| entry("987654321", "1111", "22", "10.00", "Jane Doe"))
            .collect();
        let file = build_nacha_file(&context(), &entries, creation()).unwrap();

        assert_eq!(file.lines().count() % 10, 0, "with {} entries", count);
    }
}

#[test]
fn test_exact_block_needs_no_filler() {
    // 6 entries + 4 structural records fill one block exactly
    let entries: Vec<PaymentEntry> = (0..6)
        .map(|_| entry("987654321", "1111", "22", "10.00", "Jane Doe"))
        .collect();
    let file = build_nacha_file(&context(), &entries, creation()).unwrap();

    assert_eq!(file.lines().count(), 10);
    assert!(!file.lines().last().unwrap().starts_with("99999"));
}

// ==================== AMOUNT ENCODING ====================

#[test]
fn test_cents_field_has_no_float_drift() {
    let cases = [
        ("100.00", "0000010000"),
        ("0.01", "0000000001"),
        ("19.99", "0000001999"),
        ("1234.565", "0000123457"), // half rounds away from zero
    ];

    for (amount, expected_field) in cases {
        let e = entry("987654321", "1111", "22", amount, "Jane Doe");
        let file = build_nacha_file(&context(), &[e], creation()).unwrap();
        let detail = file.lines().nth(2).unwrap();
        assert_eq!(&detail[29..39], expected_field, "for amount {}", amount);
    }
}

// ==================== DETERMINISM ====================

#[test]
fn test_same_ordered_input_is_byte_identical() {
    let entries = [
        entry("987654321", "1111", "22", "100.00", "Jane Doe"),
        entry("123456789", "2222", "27", "42.42", "John Roe"),
    ];

    let first = build_nacha_file(&context(), &entries, creation()).unwrap();
    let second = build_nacha_file(&context(), &entries, creation()).unwrap();
    assert_eq!(first.content, second.content);
}

// ==================== ATOMICITY ====================

#[test]
fn test_zero_amount_entry_rejects_whole_batch() {
    let entries = [
        entry("987654321", "1111", "22", "100.00", "Jane Doe"),
        entry("987654321", "2222", "22", "0.00", "John Roe"),
    ];

    let result = build_nacha_file(&context(), &entries, creation());
    assert!(matches!(result, Err(GeneratorError::Validation { .. })));
}

#[test]
fn test_negative_amount_entry_rejects_whole_batch() {
    let entries = [entry("987654321", "1111", "22", "-5.00", "Jane Doe")];
    assert!(build_nacha_file(&context(), &entries, creation()).is_err());
}

// ==================== WORKED EXAMPLE ====================

#[test]
fn test_worked_example_record_sequence() {
    let e = entry("987654321", "1111", "22", "100.00", "Jane Doe");
    let file = build_nacha_file(&context(), &[e], creation()).unwrap();

    let lines: Vec<&str> = file.lines().collect();
    assert_eq!(lines.len() % 10, 0);

    assert!(lines[0].starts_with('1'));
    assert!(lines[1].starts_with('5'));
    assert!(lines[1].contains("200"));
    assert!(lines[2].starts_with('6'));
    assert_eq!(&lines[2][29..39], "0000010000");
    assert!(lines[3].starts_with('8'));
    assert_eq!(&lines[3][4..10], "000001");
    assert!(lines[4].starts_with('9'));
    for filler in &lines[5..] {
        assert_eq!(*filler, "9".repeat(94));
    }

    assert_eq!(file.file_name, "ACH_1_20240601.txt");
}

#[test]
fn test_debit_code_moves_amount_between_summary_totals() {
    let credit = entry("987654321", "1111", "22", "100.00", "Jane Doe");
    let mut debit = credit.clone();
    debit.transaction_code = "27".to_string();

    let credit_file = build_nacha_file(&context(), &[credit], creation()).unwrap();
    let debit_file = build_nacha_file(&context(), &[debit], creation()).unwrap();

    assert_eq!(credit_file.summary.total_credit_amount.to_string(), "100.00");
    assert_eq!(credit_file.summary.total_debit_amount.to_string(), "0.00");
    assert_eq!(debit_file.summary.total_credit_amount.to_string(), "0.00");
    assert_eq!(debit_file.summary.total_debit_amount.to_string(), "100.00");

    assert_eq!(credit_file.summary.entry_hash, debit_file.summary.entry_hash);
    assert_eq!(credit_file.summary.total_entries, debit_file.summary.total_entries);
    assert_eq!(
        credit_file.summary.effective_date,
        debit_file.summary.effective_date
    );
}

// ==================== CONTROL RECORD ARITHMETIC ====================

#[test]
fn test_entry_hash_matches_in_batch_and_file_control() {
    let entries = [
        entry("987654321", "1111", "22", "1.00", "Jane Doe"),
        entry("123456789", "2222", "27", "2.00", "John Roe"),
    ];
    let file = build_nacha_file(&context(), &entries, creation()).unwrap();

    let expected = format!("{:0>10}", 98765432u64 + 12345678);
    let lines: Vec<&str> = file.lines().collect();
    assert_eq!(&lines[4][10..20], expected); // batch control
    assert_eq!(&lines[5][21..31], expected); // file control
    assert_eq!(file.summary.entry_hash, 98765432 + 12345678);
}

#[test]
fn test_block_count_reported_before_padding() {
    // 17 entries: 21 unpadded records, so block count is 3 while the padded
    // file has 30 lines
    let entries: Vec<PaymentEntry> = (0..17)
        .map(|_| entry("987654321", "1111", "22", "10.00", "Jane Doe"))
        .collect();
    let file = build_nacha_file(&context(), &entries, creation()).unwrap();

    let lines: Vec<&str> = file.lines().collect();
    assert_eq!(lines.len(), 30);
    let file_control = lines[20];
    assert!(file_control.starts_with('9'));
    assert_eq!(&file_control[7..13], "000003");
}

#[test]
fn test_large_batch_entry_hash_truncates_on_the_wire_only() {
    // enough identical routing prefixes to overflow the 10-digit field:
    // 101 * 99999999 = 10099999899, rendered as its rightmost 10 digits
    let entries: Vec<PaymentEntry> = (0..101)
        .map(|_| entry("999999991", "1111", "22", "1.00", "Jane Doe"))
        .collect();
    let file = build_nacha_file(&context(), &entries, creation()).unwrap();

    assert_eq!(file.summary.entry_hash, 101 * 99999999);
    let batch_control = file
        .lines()
        .find(|l| l.starts_with('8'))
        .unwrap()
        .to_string();
    assert_eq!(&batch_control[10..20], "0099999899");
}
