//! # enmascara
//!
//! Synthetic, checksum-correct Spanish identifiers for masking personal
//! data in test and staging environments: bank account numbers (BBAN/IBAN)
//! and identity numbers (DNI/NIE).
//!
//! Every generated value passes the same validation that real-world
//! systems apply, and every validator reports precisely which rule failed.
//!
//! ## Quick Start
//!
//! ```rust
//! use enmascara::*;
//!
//! let iban = Iban::generate("1465", "0000", None).unwrap();
//! assert_eq!(iban.country_code(), "ES");
//! assert!(Iban::validate(&iban.to_string()).is_ok());
//!
//! let bban = Bban::generate("2100", "0418", Some("0200051332")).unwrap();
//! assert_eq!(bban.to_string(), "21000418450200051332");
//!
//! let id = NationalId::generate(None);
//! assert!(NationalId::validate(id.as_str()));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `bank` (default) | Bank registry, BBAN and IBAN |
//! | `national-id` (default) | DNI and NIE |
//! | `cli` | `enmascara` command-line binary |
//! | `all` | Everything |

pub mod core;

#[cfg(feature = "bank")]
pub mod bank;

#[cfg(feature = "national-id")]
pub mod national_id;

// Re-export the main types at crate root for convenience
pub use crate::core::*;

#[cfg(feature = "bank")]
pub use crate::bank::{BankEntry, Bban, Iban};

#[cfg(feature = "national-id")]
pub use crate::national_id::{NationalId, NationalIdKind};
