#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(iban) = enmascara::Iban::validate(s) {
            // Anything accepted must survive a second pass unchanged.
            assert_eq!(enmascara::Iban::validate(&iban.to_string()).ok(), Some(iban));
        }
        let _ = enmascara::Iban::validate_lenient(s);
    }
});
