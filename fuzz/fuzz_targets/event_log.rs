#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for line in input.lines().take(256) {
            if let Ok(Some(row)) = svctime::fuzzing::parse_event_line_input(line) {
                if row.cn == 0 {
                    debug_assert!(row.mean_rn().is_none());
                }
            }
        }
        let derived = svctime::fuzzing::derive_records_input(input);
        debug_assert!(derived <= input.lines().count());
    }
});
