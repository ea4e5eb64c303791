//! DNI and NIE codes: random generation and control-letter validation.
//!
//! The control letter is `CHECK_LETTERS[n % 23]`, where `n` is the 8-digit
//! DNI body or the NIE body with its `X`/`Y`/`Z` prefix replaced by 0/1/2.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::NationalIdError;

/// Total length of a DNI or NIE, control letter included.
pub const NATIONAL_ID_LENGTH: usize = 9;

/// Control letters indexed by `number mod 23`.
pub const CHECK_LETTERS: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

/// NIE prefix letters; each stands for its index (0, 1, 2) as leading digit.
pub const FOREIGN_PREFIXES: [char; 3] = ['X', 'Y', 'Z'];

const DNI_MAX: u32 = 99_999_999;
const NIE_BODY_MAX: u32 = 9_999_999;
const NIE_PREFIX_WEIGHT: u32 = 10_000_000;

/// Which identity document a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NationalIdKind {
    /// DNI: 8 digits + control letter (residents).
    National,
    /// NIE: X/Y/Z + 7 digits + control letter (foreign residents).
    Foreign,
}

/// A DNI or NIE with a correct control letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalId {
    code: String,
    kind: NationalIdKind,
}

impl NationalId {
    /// Generate a DNI or NIE using the thread-local RNG.
    ///
    /// With `kind: None` both variants are equally likely.
    pub fn generate(kind: Option<NationalIdKind>) -> Self {
        Self::generate_with_rng(&mut rand::thread_rng(), kind)
    }

    /// Generate a DNI or NIE drawing from `rng`.
    ///
    /// Every candidate is re-validated before it is returned.
    pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, kind: Option<NationalIdKind>) -> Self {
        let kind = kind.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                NationalIdKind::National
            } else {
                NationalIdKind::Foreign
            }
        });

        loop {
            let code = match kind {
                NationalIdKind::National => {
                    let number = rng.gen_range(0..=DNI_MAX);
                    format!("{number:08}{}", check_letter_for(number))
                }
                NationalIdKind::Foreign => {
                    let prefix = rng.gen_range(0..FOREIGN_PREFIXES.len());
                    let body = rng.gen_range(0..=NIE_BODY_MAX);
                    let number = prefix as u32 * NIE_PREFIX_WEIGHT + body;
                    format!(
                        "{}{body:07}{}",
                        FOREIGN_PREFIXES[prefix],
                        check_letter_for(number)
                    )
                }
            };

            match parse(&code) {
                Ok(id) if id.kind == kind => {
                    trace!(national_id = %id, "generated national ID");
                    return id;
                }
                Ok(_) | Err(_) => warn!(code = %code, "generated national ID failed self-check"),
            }
        }
    }

    /// Parse a DNI/NIE, reporting why it is invalid.
    pub fn parse(code: &str) -> Result<Self, NationalIdError> {
        parse(code).inspect_err(|err| debug!(code, error = %err, "national ID validation failed"))
    }

    /// `true` when `code` is a DNI/NIE with the right control letter.
    pub fn validate(code: &str) -> bool {
        Self::parse(code).is_ok()
    }

    /// DNI or NIE.
    pub fn kind(&self) -> NationalIdKind {
        self.kind
    }

    /// The 9-character code.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The trailing control letter.
    pub fn check_letter(&self) -> char {
        char::from(self.code.as_bytes()[NATIONAL_ID_LENGTH - 1])
    }
}

/// Control letter for the numeric value of a DNI, or of a NIE with its
/// prefix already replaced by 0/1/2.
pub fn check_letter_for(number: u32) -> char {
    CHECK_LETTERS[(number % 23) as usize]
}

fn parse(code: &str) -> Result<NationalId, NationalIdError> {
    let found = code.chars().count();
    if found != NATIONAL_ID_LENGTH {
        return Err(NationalIdError::Length { found });
    }

    let mut kind = NationalIdKind::National;
    let mut number = 0u32;
    let mut letter = ' ';
    for (position, c) in code.chars().enumerate() {
        if position == NATIONAL_ID_LENGTH - 1 {
            letter = c;
            break;
        }
        let digit = match (position, FOREIGN_PREFIXES.iter().position(|&p| p == c)) {
            (0, Some(prefix)) => {
                kind = NationalIdKind::Foreign;
                prefix as u32
            }
            _ => c.to_digit(10).ok_or(NationalIdError::InvalidCharacter {
                position,
                found: c,
            })?,
        };
        number = number * 10 + digit;
    }

    let expected = check_letter_for(number);
    if letter != expected {
        return Err(NationalIdError::CheckLetter {
            found: letter,
            expected,
        });
    }

    Ok(NationalId {
        code: code.to_owned(),
        kind,
    })
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for NationalId {
    type Err = NationalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NationalId {
    type Error = NationalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> Self {
        id.code
    }
}

impl fmt::Display for NationalIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NationalIdKind::National => f.write_str("DNI"),
            NationalIdKind::Foreign => f.write_str("NIE"),
        }
    }
}
