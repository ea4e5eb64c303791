//! Spanish Basic Bank Account Number (BBAN, a.k.a. CCC).
//!
//! Layout (20 digits):
//!
//! | Field | Width | Example |
//! |-------|-------|---------|
//! | Bank code | 4 | `2100` |
//! | Branch code | 4 | `0418` |
//! | Bank/branch check digit | 1 | `4` |
//! | Account check digit | 1 | `5` |
//! | Account number | 10 | `0200051332` |

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::checksum::{account_digit, bank_branch_digit, digit_char};
use super::registry::{self, BankEntry};
use crate::core::{BbanError, random_digits};

/// Total length of a Spanish BBAN.
pub const BBAN_LENGTH: usize = 20;

/// Length of the branch code field.
pub const BRANCH_LENGTH: usize = 4;

/// Length of the account number field.
pub const ACCOUNT_LENGTH: usize = 10;

/// Bank code used when the caller does not pick one (ING-DIRECT).
pub const DEFAULT_BANK_CODE: &str = "1465";

/// Branch code used when the caller does not pick one.
pub const DEFAULT_BRANCH_CODE: &str = "0000";

/// A validated Spanish BBAN.
///
/// Instances only come out of [`Bban::generate`] or [`Bban::validate`],
/// so the bank code is always registered and both check digits are correct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bban {
    code: String,
}

impl Bban {
    /// Generate a BBAN for `bank`/`branch` using the thread-local RNG.
    ///
    /// When `account` is `None` a uniformly random 10-digit account number
    /// is drawn.
    pub fn generate(bank: &str, branch: &str, account: Option<&str>) -> Result<Self, BbanError> {
        Self::generate_with_rng(&mut rand::thread_rng(), bank, branch, account)
    }

    /// Generate a BBAN drawing the account number (if needed) from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        bank: &str,
        branch: &str,
        account: Option<&str>,
    ) -> Result<Self, BbanError> {
        if !registry::is_known_bank_code(bank) {
            return Err(BbanError::UnknownBank { code: bank.into() });
        }
        check_field_width("branch", branch, BRANCH_LENGTH)?;
        let account = match account {
            Some(account) => {
                check_field_width("account", account, ACCOUNT_LENGTH)?;
                account.to_owned()
            }
            None => random_digits(rng, ACCOUNT_LENGTH),
        };

        // Placeholder check digits; the structure check only looks at digits.
        let candidate = format!("{bank}{branch}00{account}");
        let digits = parse_structure(&candidate)?;
        let (first, second) = expected_check_digits(&digits);

        let code = format!("{bank}{branch}{first}{second}{account}");
        check(&code)?;
        trace!(bban = %code, "generated BBAN");
        Ok(Self { code })
    }

    /// Parse and validate a 20-character BBAN.
    ///
    /// Checks run in order: length, bank code, digits only, bank/branch
    /// check digit, account check digit. The first failure is reported.
    pub fn validate(code: &str) -> Result<Self, BbanError> {
        check(code)
            .map(|()| Self {
                code: code.to_owned(),
            })
            .inspect_err(|err| debug!(bban = code, error = %err, "BBAN validation failed"))
    }

    /// The full 20-digit BBAN.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// 4-digit bank code ("entidad").
    pub fn bank_code(&self) -> &str {
        &self.code[0..4]
    }

    /// 4-digit branch code ("oficina").
    pub fn branch_code(&self) -> &str {
        &self.code[4..8]
    }

    /// Check digit over bank and branch codes.
    pub fn first_check_digit(&self) -> char {
        char::from(self.code.as_bytes()[8])
    }

    /// Check digit over the account number.
    pub fn second_check_digit(&self) -> char {
        char::from(self.code.as_bytes()[9])
    }

    /// Both check digits ("DC") as a 2-character string.
    pub fn check_digits(&self) -> &str {
        &self.code[8..10]
    }

    /// 10-digit account number.
    pub fn account_number(&self) -> &str {
        &self.code[10..]
    }

    /// Registry entry for the bank code.
    pub fn bank(&self) -> Option<&'static BankEntry> {
        registry::lookup(self.bank_code())
    }

    /// Spaced rendering: `bank branch dc account`, e.g. `2100 0418 45 0200051332`.
    pub fn formatted(&self) -> String {
        format!(
            "{} {} {} {}",
            self.bank_code(),
            self.branch_code(),
            self.check_digits(),
            self.account_number()
        )
    }
}

fn check_field_width(field: &'static str, value: &str, expected: usize) -> Result<(), BbanError> {
    let found = value.chars().count();
    if found != expected {
        return Err(BbanError::FieldLength {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

/// Length, bank code, and all-digits checks shared by generation and validation.
fn parse_structure(code: &str) -> Result<[u32; BBAN_LENGTH], BbanError> {
    let found = code.chars().count();
    if found != BBAN_LENGTH {
        return Err(BbanError::Length { found });
    }

    let bank: String = code.chars().take(4).collect();
    if !registry::is_known_bank_code(&bank) {
        return Err(BbanError::UnknownBank { code: bank });
    }

    let mut digits = [0u32; BBAN_LENGTH];
    for ((position, found), slot) in code.chars().enumerate().zip(digits.iter_mut()) {
        *slot = found
            .to_digit(10)
            .ok_or(BbanError::InvalidCharacter { position, found })?;
    }
    Ok(digits)
}

fn expected_check_digits(digits: &[u32; BBAN_LENGTH]) -> (char, char) {
    let bank_branch: [u32; 8] = std::array::from_fn(|i| digits[i]);
    let account: [u32; ACCOUNT_LENGTH] = std::array::from_fn(|i| digits[10 + i]);
    (bank_branch_digit(&bank_branch), account_digit(&account))
}

fn check(code: &str) -> Result<(), BbanError> {
    let digits = parse_structure(code)?;
    let (first, second) = expected_check_digits(&digits);

    let found = digit_char(digits[8]);
    if found != first {
        return Err(BbanError::BranchCheckDigit {
            found,
            expected: first,
        });
    }

    let found = digit_char(digits[9]);
    if found != second {
        return Err(BbanError::AccountCheckDigit {
            found,
            expected: second,
        });
    }
    Ok(())
}

impl fmt::Display for Bban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Bban {
    type Err = BbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl TryFrom<String> for Bban {
    type Error = BbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check(&value)?;
        Ok(Self { code: value })
    }
}

impl From<Bban> for String {
    fn from(bban: Bban) -> Self {
        bban.code
    }
}

impl AsRef<str> for Bban {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_with_fixed_account() {
        let bban = Bban::generate("1465", "0000", Some("0000000001")).unwrap();
        assert_eq!(bban.as_str(), "14650000550000000001");
        assert_eq!(bban.bank_code(), "1465");
        assert_eq!(bban.branch_code(), "0000");
        assert_eq!(bban.first_check_digit(), '5');
        assert_eq!(bban.second_check_digit(), '5');
        assert_eq!(bban.check_digits(), "55");
        assert_eq!(bban.account_number(), "0000000001");
    }

    #[test]
    fn generate_random_account() {
        let mut rng = StdRng::seed_from_u64(11);
        let bban = Bban::generate_with_rng(&mut rng, "0049", "1500", None).unwrap();
        assert_eq!(bban.as_str().len(), BBAN_LENGTH);
        assert_eq!(bban.bank_code(), "0049");
        assert_eq!(Bban::validate(bban.as_str()).unwrap(), bban);
    }

    #[test]
    fn generate_rejects_unknown_bank() {
        assert_eq!(
            Bban::generate("9999", "0000", None),
            Err(BbanError::UnknownBank {
                code: "9999".into()
            })
        );
    }

    #[test]
    fn generate_rejects_malformed_fields() {
        assert_eq!(
            Bban::generate("1465", "000", Some("0000000001")),
            Err(BbanError::FieldLength {
                field: "branch",
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Bban::generate("1465", "00A0", Some("0000000001")),
            Err(BbanError::InvalidCharacter {
                position: 6,
                found: 'A'
            })
        );
    }

    #[test]
    fn generate_rejects_misaligned_fields() {
        // 4 + 3 + 11 digits add up to a full-length BBAN but split wrongly.
        assert_eq!(
            Bban::generate("1465", "000", Some("00000000001")),
            Err(BbanError::FieldLength {
                field: "branch",
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Bban::generate("1465", "00000", Some("000000001")),
            Err(BbanError::FieldLength {
                field: "branch",
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            Bban::generate("1465", "0000", Some("00000000001")),
            Err(BbanError::FieldLength {
                field: "account",
                expected: 10,
                found: 11
            })
        );
    }

    #[test]
    fn generate_looks_up_the_bank_argument() {
        assert_eq!(
            Bban::generate("146", "50000", Some("0000000001")),
            Err(BbanError::UnknownBank {
                code: "146".into()
            })
        );
        assert_eq!(
            Bban::generate("14650", "000", Some("0000000001")),
            Err(BbanError::UnknownBank {
                code: "14650".into()
            })
        );
    }

    #[test]
    fn validate_real_world_bban() {
        let bban = Bban::validate("21000418450200051332").unwrap();
        assert_eq!(bban.bank().unwrap().name(), "CAIXABANK");
        assert_eq!(bban.formatted(), "2100 0418 45 0200051332");
    }

    #[test]
    fn validate_reports_first_failing_digit() {
        // Both digits wrong: the bank/branch digit is reported.
        assert_eq!(
            Bban::validate("14650000000000000001"),
            Err(BbanError::BranchCheckDigit {
                found: '0',
                expected: '5'
            })
        );
        assert_eq!(
            Bban::validate("14650000500000000001"),
            Err(BbanError::AccountCheckDigit {
                found: '0',
                expected: '5'
            })
        );
    }

    #[test]
    fn validate_rejects_non_digits_after_bank() {
        assert_eq!(
            Bban::validate("1465000055000000000X"),
            Err(BbanError::InvalidCharacter {
                position: 19,
                found: 'X'
            })
        );
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert_eq!(
            Bban::validate("1465000055000000000é"),
            Err(BbanError::InvalidCharacter {
                position: 19,
                found: 'é'
            })
        );
        assert!(Bban::validate("ñññññññññññññññññññññ").is_err());
    }

    #[test]
    fn parse_via_from_str() {
        let bban: Bban = "14650000550000000001".parse().unwrap();
        assert_eq!(bban.to_string(), "14650000550000000001");
    }
}
