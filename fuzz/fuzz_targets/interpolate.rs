#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let values: Vec<Option<f64>> = data
        .iter()
        .take(4096)
        .map(|byte| (byte % 4 != 0).then(|| f64::from(*byte)))
        .collect();
    let filled = svctime::fuzzing::interpolate_input(&values);
    debug_assert_eq!(filled.len(), values.len());

    let first_defined = values.iter().position(Option::is_some);
    for (idx, value) in filled.iter().enumerate() {
        match first_defined {
            Some(first) if idx >= first => debug_assert!(value.is_some()),
            _ => debug_assert!(value.is_none()),
        }
    }
});
