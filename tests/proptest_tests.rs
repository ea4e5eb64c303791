//! Property-based tests for the generators and validators.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "bank", feature = "national-id"))]

use enmascara::bank::*;
use enmascara::national_id::*;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Any registered bank code.
fn arb_bank() -> impl Strategy<Value = &'static str> {
    let codes: Vec<&'static str> = banks().map(BankEntry::code).collect();
    prop::sample::select(codes)
}

/// Any 4-digit branch code.
fn arb_branch() -> impl Strategy<Value = String> {
    (0u32..10_000).prop_map(|n| format!("{n:04}"))
}

/// Any 10-digit account number, including the extremes.
fn arb_account() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(0u64),
        Just(9_999_999_999u64),
        0u64..10_000_000_000u64,
    ]
    .prop_map(|n| format!("{n:010}"))
}

/// Arbitrary digit-string splits, mostly misaligned with the 4/4/10 layout.
fn arb_split() -> impl Strategy<Value = (String, String, String)> {
    (
        prop_oneof![arb_bank().prop_map(str::to_owned), "[0-9]{0,6}"],
        "[0-9]{0,6}",
        "[0-9]{8,12}",
    )
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// generate() → validate() preserves every BBAN field.
    #[test]
    fn bban_roundtrip(bank in arb_bank(), branch in arb_branch(), account in arb_account()) {
        let bban = Bban::generate(bank, &branch, Some(&account)).unwrap();
        let parsed = Bban::validate(bban.as_str()).unwrap();

        prop_assert_eq!(parsed.bank_code(), bank);
        prop_assert_eq!(parsed.branch_code(), branch.as_str());
        prop_assert_eq!(parsed.account_number(), account.as_str());
        prop_assert_eq!(parsed.check_digits(), bban.check_digits());
    }

    /// generate() → validate() preserves every IBAN field.
    #[test]
    fn iban_roundtrip(bank in arb_bank(), branch in arb_branch(), account in arb_account()) {
        let iban = Iban::generate(bank, &branch, Some(&account)).unwrap();
        let text = iban.to_string();
        prop_assert_eq!(text.len(), IBAN_LENGTH);

        let parsed = Iban::validate(&text).unwrap();
        prop_assert_eq!(&parsed, &iban);
        prop_assert_eq!(parsed.bban().account_number(), account.as_str());
    }

    /// generate() only succeeds with values validate() accepts unchanged.
    #[test]
    fn generate_accepts_only_valid_splits((bank, branch, account) in arb_split()) {
        let aligned = bank.len() == 4 && branch.len() == 4 && account.len() == 10;
        match Bban::generate(&bank, &branch, Some(&account)) {
            Ok(bban) => {
                prop_assert!(aligned);
                prop_assert_eq!(Bban::validate(bban.as_str()), Ok(bban.clone()));
                prop_assert_eq!(bban.bank_code(), bank.as_str());
                prop_assert_eq!(bban.branch_code(), branch.as_str());
                prop_assert_eq!(bban.account_number(), account.as_str());
            }
            Err(_) => prop_assert!(!aligned || !is_known_bank_code(&bank)),
        }
        match Iban::generate(&bank, &branch, Some(&account)) {
            Ok(iban) => {
                prop_assert!(aligned);
                prop_assert_eq!(Iban::validate(&iban.to_string()), Ok(iban.clone()));
            }
            Err(_) => prop_assert!(!aligned || !is_known_bank_code(&bank)),
        }
    }

    /// A valid IBAN rearranged per ISO 13616 is congruent to 1 mod 97.
    #[test]
    fn iban_mod97_is_one(bank in arb_bank(), branch in arb_branch(), account in arb_account()) {
        let iban = Iban::generate(bank, &branch, Some(&account)).unwrap().to_string();
        let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
        prop_assert_eq!(checksum::mod97(&rearranged), Ok(1));
    }

    /// Changing one account digit breaks the account check digit.
    ///
    /// Remainders 1 and 10 both map to digit 1, so that digit is excluded.
    #[test]
    fn bban_account_mutation_detected(
        bank in arb_bank(),
        account in arb_account(),
        pos in 0usize..10,
        delta in 1u32..10,
    ) {
        let bban = Bban::generate(bank, "0000", Some(&account)).unwrap();
        prop_assume!(bban.second_check_digit() != '1');
        let mut chars: Vec<char> = bban.as_str().chars().collect();
        let digit = chars[10 + pos].to_digit(10).unwrap();
        chars[10 + pos] = char::from_digit((digit + delta) % 10, 10).unwrap();
        let mutated: String = chars.into_iter().collect();
        prop_assert!(Bban::validate(&mutated).is_err());
    }

    /// Validators never panic on arbitrary input.
    #[test]
    fn validators_total(input in ".{0,30}") {
        let _ = Bban::validate(&input);
        let _ = Iban::validate(&input);
        let _ = Iban::validate_lenient(&input);
        let _ = NationalId::validate(&input);
    }

    /// DNI control letter agrees with the lookup table for any body.
    #[test]
    fn dni_letter_matches_table(number in 0u32..100_000_000) {
        let code = format!("{number:08}{}", check_letter_for(number));
        prop_assert!(NationalId::validate(&code));
        prop_assert_eq!(check_letter_for(number), CHECK_LETTERS[(number % 23) as usize]);
    }
}
