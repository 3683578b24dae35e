#![no_main]

use libfuzzer_sys::fuzz_target;

use repwatch_core::FinishReport;

fuzz_target!(|data: &[u8]| {
    // Should not panic
    let _ = FinishReport::from_json(data);
});
