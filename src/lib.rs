//! # NACHA Generator
//!
//! Builds fixed-width NACHA ACH files from batches of payment entries.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: dollar amounts use `rust_decimal`, never floats
//! - **Atomic batches**: any invalid entry rejects the whole batch with zero output
//! - **Strict layout**: every record line is exactly 94 characters, files are
//!   padded to blocks of 10 lines
//! - **Deterministic output**: the same context, entries, and creation stamp
//!   always produce byte-identical files
//!
//! ## Example
//!
//! ```no_run
//! use nacha_generator::{build_nacha_file, BatchContext, PaymentEntry};
//!
//! let context: BatchContext = serde_json::from_str(r#"{
//!     "origin_routing_number": "123456789",
//!     "origin_account_number": "987654",
//!     "company_id": "CMP0000001",
//!     "company_name": "Acme Co",
//!     "batch_number": 1,
//!     "effective_date": "2024-06-01"
//! }"#).unwrap();
//!
//! let entries: Vec<PaymentEntry> = vec![];
//! let creation = chrono::Local::now().naive_local();
//! let file = build_nacha_file(&context, &entries, creation);
//! ```

pub mod amount;
pub mod builder;
pub mod context;
pub mod entry;
pub mod error;
pub mod generator;
pub mod record;
pub mod store;
pub mod totals;
pub mod validate;

pub use amount::Amount;
pub use builder::{build_nacha_file, FileSummary, NachaFile};
pub use context::BatchContext;
pub use entry::{EntryRecord, PaymentEntry};
pub use error::{GeneratorError, Result};
pub use generator::{GenerationRun, RunState};
pub use record::{BLOCKING_FACTOR, RECORD_SIZE};
pub use store::{BatchStore, FsStore};
pub use totals::RunningTotals;
