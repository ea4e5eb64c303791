use thiserror::Error;

/// Errors raised while generating or validating a Spanish BBAN (CCC).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BbanError {
    /// The input is not exactly 20 characters long.
    #[error("Spanish BBAN always contains exactly 20 chars, current: {found}")]
    Length {
        /// Number of characters actually supplied.
        found: usize,
    },

    /// A caller-supplied field has the wrong width.
    #[error("{field} must be exactly {expected} digits, current: {found}")]
    FieldLength {
        /// Field name ("branch" or "account").
        field: &'static str,
        /// Required width.
        expected: usize,
        /// Number of characters actually supplied.
        found: usize,
    },

    /// The 4-digit bank code is not in the bank registry.
    #[error("unknown bank code: {code}")]
    UnknownBank {
        /// The bank code as it appeared in the input.
        code: String,
    },

    /// A position that must hold a decimal digit holds something else.
    #[error("expected a digit at position {position}, found '{found}'")]
    InvalidCharacter {
        /// Zero-based character position within the BBAN.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The bank/branch check digit (position 9) does not match.
    #[error("the bank/branch check digit is incorrect: {found} (expected: {expected})")]
    BranchCheckDigit {
        /// Digit present in the input.
        found: char,
        /// Digit recomputed from bank and branch codes.
        expected: char,
    },

    /// The account check digit (position 10) does not match.
    #[error("the account check digit is incorrect: {found} (expected: {expected})")]
    AccountCheckDigit {
        /// Digit present in the input.
        found: char,
        /// Digit recomputed from the account number.
        expected: char,
    },
}

/// Errors raised while generating or validating a Spanish IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// The input is not exactly 24 characters long.
    #[error("Spanish IBAN always contains exactly 24 chars, current: {found}")]
    Length {
        /// Number of characters actually supplied.
        found: usize,
    },

    /// The country prefix is not "ES".
    #[error("this IBAN should be only for ES (Spain) accounts, found: {found}")]
    Country {
        /// The two-character prefix found in the input.
        found: String,
    },

    /// A character outside `[0-9A-Z]` where the mod-97 algorithm needs one.
    #[error("unexpected character at position {position}: '{found}'")]
    InvalidCharacter {
        /// Zero-based character position within the IBAN.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The international check digits do not match.
    #[error("the check digit is incorrect: {found} (expected: {expected})")]
    CheckDigit {
        /// Check digits present in the input.
        found: String,
        /// Check digits recomputed with mod-97.
        expected: String,
    },

    /// The embedded BBAN failed its own validation.
    #[error("invalid BBAN: {0}")]
    Bban(#[from] BbanError),
}

/// Errors raised while parsing a DNI or NIE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NationalIdError {
    /// The input is not exactly 9 characters long.
    #[error("must be 9 characters long, current: {found}")]
    Length {
        /// Number of characters actually supplied.
        found: usize,
    },

    /// A body position holds something other than a digit (or X/Y/Z prefix).
    #[error("unexpected character at position {position}: '{found}'")]
    InvalidCharacter {
        /// Zero-based character position within the code.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// The trailing control letter does not match the modulus-23 lookup.
    #[error("the check letter is incorrect: {found} (expected: {expected})")]
    CheckLetter {
        /// Letter present in the input.
        found: char,
        /// Letter recomputed from the numeric body.
        expected: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_found_and_expected() {
        let err = BbanError::BranchCheckDigit {
            found: '3',
            expected: '5',
        };
        assert_eq!(
            err.to_string(),
            "the bank/branch check digit is incorrect: 3 (expected: 5)"
        );

        let err = IbanError::CheckDigit {
            found: "00".into(),
            expected: "81".into(),
        };
        assert_eq!(
            err.to_string(),
            "the check digit is incorrect: 00 (expected: 81)"
        );
    }

    #[test]
    fn bban_error_converts_into_iban_error() {
        let err: IbanError = BbanError::UnknownBank {
            code: "9999".into(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid BBAN: unknown bank code: 9999");
    }
}
