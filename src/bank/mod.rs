//! Spanish bank account numbers: BBAN (CCC) and IBAN.
//!
//! Generates checksum-correct synthetic account numbers for masking and
//! validates externally supplied ones against the bank registry and both
//! check digit schemes.
//!
//! # Example
//!
//! ```
//! use enmascara::bank::*;
//!
//! let iban = Iban::generate("1465", "0000", Some("0000000001")).unwrap();
//! assert_eq!(iban.to_string(), "ES8114650000550000000001");
//! assert_eq!(iban.bic(), Some("INGDESMMXXX"));
//!
//! assert!(Bban::validate("21000418450200051332").is_ok());
//! assert!(Iban::validate("ES9021000418450200051332").is_err());
//! ```

mod bban;
pub mod checksum;
mod iban;
pub mod registry;

pub use bban::{
    ACCOUNT_LENGTH, BBAN_LENGTH, BRANCH_LENGTH, Bban, DEFAULT_BANK_CODE, DEFAULT_BRANCH_CODE,
};
pub use iban::{COUNTRY_CODE, IBAN_LENGTH, Iban};
pub use registry::{BankEntry, banks, is_known_bank_code, lookup, random_bank};
