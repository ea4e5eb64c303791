//! Check digit arithmetic shared by the BBAN and IBAN formats.
//!
//! Spanish BBANs carry two modulus-11 check digits ("dígitos de control"),
//! one over bank+branch and one over the account number. The IBAN adds a
//! pair of ISO 7064 mod-97 check digits in front.

/// Weights applied to the 8 digits of bank code + branch code.
pub const BANK_BRANCH_WEIGHTS: [u32; 8] = [4, 8, 5, 10, 9, 7, 3, 6];

/// Weights applied to the 10 digits of the account number.
pub const ACCOUNT_WEIGHTS: [u32; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

/// `sum(digits[i] * weights[i]) mod 11`.
///
/// Both arrays share the length `N`, so mismatched inputs do not compile.
pub fn weighted_modulus<const N: usize>(digits: &[u32; N], weights: &[u32; N]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    sum % 11
}

/// Map a modulus-11 remainder to its check digit: `11 - remainder`,
/// except that 10 becomes 1 and 11 becomes 0.
pub fn eleven_complement(remainder: u32) -> u32 {
    match 11 - remainder % 11 {
        10 => 1,
        11 => 0,
        digit => digit,
    }
}

/// Parse exactly `N` decimal digits. `None` on any other length or character.
pub fn digits_of<const N: usize>(s: &str) -> Option<[u32; N]> {
    let mut digits = [0u32; N];
    let mut chars = s.chars();
    for slot in digits.iter_mut() {
        *slot = chars.next()?.to_digit(10)?;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(digits)
}

/// ASCII character for a single decimal digit (`0..=9`).
pub(crate) fn digit_char(digit: u32) -> char {
    char::from(b'0' + (digit % 10) as u8)
}

/// First BBAN check digit over already-parsed bank+branch digits.
pub fn bank_branch_digit(digits: &[u32; 8]) -> char {
    digit_char(eleven_complement(weighted_modulus(
        digits,
        &BANK_BRANCH_WEIGHTS,
    )))
}

/// Second BBAN check digit over already-parsed account digits.
pub fn account_digit(digits: &[u32; 10]) -> char {
    digit_char(eleven_complement(weighted_modulus(digits, &ACCOUNT_WEIGHTS)))
}

/// First BBAN check digit, computed over `bank` followed by `branch`.
///
/// Returns `None` unless both are 4 decimal digits.
pub fn bank_branch_check_digit(bank: &str, branch: &str) -> Option<char> {
    let bank: [u32; 4] = digits_of(bank)?;
    let branch: [u32; 4] = digits_of(branch)?;
    let digits: [u32; 8] = std::array::from_fn(|i| if i < 4 { bank[i] } else { branch[i - 4] });
    Some(bank_branch_digit(&digits))
}

/// Second BBAN check digit, computed over the 10-digit account number.
pub fn account_check_digit(account: &str) -> Option<char> {
    digits_of(account).map(|digits| account_digit(&digits))
}

/// Remainder of the alphanumeric string `s`, read as a decimal number
/// after replacing each letter with its value (A=10 … Z=35), modulo 97.
///
/// Runs digit by digit, so the length of `s` is unbounded. Returns the
/// position and value of the first character outside `[0-9A-Z]` on failure.
pub fn mod97(s: &str) -> Result<u32, (usize, char)> {
    let mut remainder = 0u32;
    for (pos, c) in s.chars().enumerate() {
        let value = match c {
            '0'..='9' | 'A'..='Z' => c.to_digit(36).ok_or((pos, c))?,
            _ => return Err((pos, c)),
        };
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }
    Ok(remainder)
}

/// ISO 13616 check digits for `country` + `bban`.
///
/// The country code and a `00` placeholder are moved behind the BBAN,
/// and the result is `98 - (n mod 97)`, zero-padded to two digits.
/// Error positions are relative to the BBAN.
pub fn iban_check_digits(country: &str, bban: &str) -> Result<String, (usize, char)> {
    let rearranged = format!("{bban}{country}00");
    let remainder = mod97(&rearranged)?;
    Ok(format!("{:02}", 98 - remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_modulus_of_ing_bank_branch() {
        // 1*4 + 4*8 + 6*5 + 5*10 = 116, 116 mod 11 = 6
        assert_eq!(
            weighted_modulus(&[1, 4, 6, 5, 0, 0, 0, 0], &BANK_BRANCH_WEIGHTS),
            6
        );
        assert_eq!(weighted_modulus(&[0; 10], &ACCOUNT_WEIGHTS), 0);
    }

    #[test]
    fn eleven_complement_edge_cases() {
        assert_eq!(eleven_complement(0), 0);
        assert_eq!(eleven_complement(1), 1);
        assert_eq!(eleven_complement(2), 9);
        assert_eq!(eleven_complement(6), 5);
        assert_eq!(eleven_complement(10), 1);
    }

    #[test]
    fn digits_of_requires_exact_length() {
        assert_eq!(digits_of::<4>("1465"), Some([1, 4, 6, 5]));
        assert_eq!(digits_of::<4>("146"), None);
        assert_eq!(digits_of::<4>("14650"), None);
        assert_eq!(digits_of::<4>("14a5"), None);
    }

    #[test]
    fn fixed_check_digits() {
        assert_eq!(bank_branch_check_digit("1465", "0000"), Some('5'));
        assert_eq!(account_check_digit("0000000000"), Some('0'));
        assert_eq!(account_check_digit("0000000001"), Some('5'));
        assert_eq!(bank_branch_check_digit("2100", "0418"), Some('4'));
        assert_eq!(account_check_digit("0200051332"), Some('5'));
    }

    #[test]
    fn remainder_zero_gives_zero_and_one_gives_one() {
        // weighted sum 0 -> "0", not "11"
        assert_eq!(account_check_digit("0000000000"), Some('0'));
        // weighted sum 1 (1 * weight 1) -> "1", not "10"
        assert_eq!(account_check_digit("1000000000"), Some('1'));
        // weighted sum 12 -> remainder 1 -> "1"
        assert_eq!(account_check_digit("0000000002"), Some('1'));
    }

    #[test]
    fn check_digits_reject_bad_input() {
        assert_eq!(bank_branch_check_digit("14A5", "0000"), None);
        assert_eq!(bank_branch_check_digit("146", "0000"), None);
        assert_eq!(account_check_digit("000000000"), None);
        assert_eq!(account_check_digit("00000 0000"), None);
    }

    #[test]
    fn mod97_letters_expand_to_two_digits() {
        // "ES00" -> 142800
        assert_eq!(mod97("ES00"), Ok(142800 % 97));
        assert_eq!(mod97("A"), Ok(10));
        assert_eq!(mod97("es00"), Err((0, 'e')));
        assert_eq!(mod97("12-3"), Err((2, '-')));
    }

    #[test]
    fn mod97_of_valid_iban_is_one() {
        // Rearranged ES91 2100 0418 4502 0005 1332
        assert_eq!(mod97("21000418450200051332ES91"), Ok(1));
    }

    #[test]
    fn known_iban_check_digits() {
        assert_eq!(
            iban_check_digits("ES", "21000418450200051332").as_deref(),
            Ok("91")
        );
        assert_eq!(
            iban_check_digits("ES", "14650000550000000001").as_deref(),
            Ok("81")
        );
        assert_eq!(
            iban_check_digits("ES", "14650000500000000000").as_deref(),
            Ok("30")
        );
    }
}
