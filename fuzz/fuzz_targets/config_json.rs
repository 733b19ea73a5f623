#![no_main]

use libfuzzer_sys::fuzz_target;
use svctime::config::types::ConfigFile;

fuzz_target!(|data: &[u8]| {
    let parsed: Option<ConfigFile> = serde_json::from_slice(data).ok();
    let applied = svctime::fuzzing::apply_config_from_json(data);
    if applied.is_ok() {
        if let Some(config) = parsed {
            debug_assert!(config.chart_width.is_none_or(|width| width >= 1));
            debug_assert!(config.chart_height.is_none_or(|height| height >= 1));
        }
    }
});
