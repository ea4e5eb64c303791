//! Spanish national identity numbers: DNI and NIE.
//!
//! Both end in a control letter picked from a fixed 23-letter table by
//! `number mod 23`. A NIE replaces the DNI's leading digit with a prefix
//! letter (X=0, Y=1, Z=2).
//!
//! # Example
//!
//! ```
//! use enmascara::national_id::*;
//!
//! assert!(NationalId::validate("12345678Z"));
//! assert!(NationalId::validate("X1234567L"));
//! assert!(!NationalId::validate("12345678A"));
//!
//! let nie = NationalId::generate(Some(NationalIdKind::Foreign));
//! assert!(NationalId::validate(nie.as_str()));
//! ```

mod code;

pub use code::{
    CHECK_LETTERS, FOREIGN_PREFIXES, NATIONAL_ID_LENGTH, NationalId, NationalIdKind,
    check_letter_for,
};
