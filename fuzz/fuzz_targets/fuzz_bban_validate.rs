#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(bban) = enmascara::Bban::validate(s) {
            let _ = bban.formatted();
            let _ = bban.bank();
        }
    }
});
