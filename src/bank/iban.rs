//! Spanish International Bank Account Number (IBAN).
//!
//! `ES` + 2 mod-97 check digits + 20-digit [`Bban`], 24 characters in total.
//! Only Spanish IBANs are supported.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bban::Bban;
use super::checksum::iban_check_digits;
use super::registry::BankEntry;
use crate::core::IbanError;

/// Total length of a Spanish IBAN.
pub const IBAN_LENGTH: usize = 24;

/// The only supported country code.
pub const COUNTRY_CODE: &str = "ES";

/// A validated Spanish IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban {
    check_digits: String,
    bban: Bban,
}

impl Iban {
    /// Generate an IBAN for `bank`/`branch` using the thread-local RNG.
    pub fn generate(bank: &str, branch: &str, account: Option<&str>) -> Result<Self, IbanError> {
        Self::generate_with_rng(&mut rand::thread_rng(), bank, branch, account)
    }

    /// Generate an IBAN drawing the account number (if needed) from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        bank: &str,
        branch: &str,
        account: Option<&str>,
    ) -> Result<Self, IbanError> {
        let bban = Bban::generate_with_rng(rng, bank, branch, account)?;
        let check_digits = iban_check_digits(COUNTRY_CODE, bban.as_str())
            .map_err(|(pos, found)| IbanError::InvalidCharacter {
                position: pos + 4,
                found,
            })?;

        let iban = Self { check_digits, bban };
        trace!(iban = %iban, "generated IBAN");
        Ok(iban)
    }

    /// Parse and validate a 24-character IBAN.
    ///
    /// Checks run in order: length, country, character set, check digits,
    /// then the embedded BBAN. The first failure is reported.
    pub fn validate(code: &str) -> Result<Self, IbanError> {
        parse(code).inspect_err(|err| debug!(iban = code, error = %err, "IBAN validation failed"))
    }

    /// Validate paper-format input such as `es91 2100 0418 4502 0005 1332`.
    ///
    /// Whitespace is removed and letters are upper-cased first.
    pub fn validate_lenient(input: &str) -> Result<Self, IbanError> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::validate(&compact)
    }

    /// Always `"ES"`.
    pub fn country_code(&self) -> &str {
        COUNTRY_CODE
    }

    /// The two international check digits.
    pub fn check_digits(&self) -> &str {
        &self.check_digits
    }

    /// The embedded domestic account number.
    pub fn bban(&self) -> &Bban {
        &self.bban
    }

    /// Registry entry for the bank code.
    pub fn bank(&self) -> Option<&'static BankEntry> {
        self.bban.bank()
    }

    /// BIC of the issuing bank, when the registry has one.
    pub fn bic(&self) -> Option<&'static str> {
        self.bank().and_then(BankEntry::bic)
    }

    /// Print format in groups of four, e.g. `ES91 2100 0418 4502 0005 1332`.
    pub fn formatted(&self) -> String {
        let compact = self.to_string();
        let mut out = String::with_capacity(IBAN_LENGTH + IBAN_LENGTH / 4);
        for (i, c) in compact.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

fn parse(code: &str) -> Result<Iban, IbanError> {
    let found = code.chars().count();
    if found != IBAN_LENGTH {
        return Err(IbanError::Length { found });
    }

    let country: String = code.chars().take(2).collect();
    if country != COUNTRY_CODE {
        return Err(IbanError::Country { found: country });
    }

    // Check digits must be numeric; the BBAN part only needs to be
    // alphanumeric for mod-97, the BBAN check rejects letters afterwards.
    for (position, found) in code.chars().enumerate().skip(2) {
        let allowed = if position < 4 {
            found.is_ascii_digit()
        } else {
            found.is_ascii_digit() || found.is_ascii_uppercase()
        };
        if !allowed {
            return Err(IbanError::InvalidCharacter { position, found });
        }
    }

    let found = &code[2..4];
    let bban = &code[4..];
    let expected = iban_check_digits(COUNTRY_CODE, bban).map_err(|(pos, found)| {
        IbanError::InvalidCharacter {
            position: pos + 4,
            found,
        }
    })?;
    if found != expected {
        return Err(IbanError::CheckDigit {
            found: found.to_owned(),
            expected,
        });
    }

    let bban = Bban::validate(bban)?;
    Ok(Iban {
        check_digits: found.to_owned(),
        bban,
    })
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COUNTRY_CODE}{}{}", self.check_digits, self.bban)
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.to_string()
    }
}
