#![no_main]

use libfuzzer_sys::fuzz_target;

use repwatch_core::StatusSnapshot;

fuzz_target!(|data: &[u8]| {
    // Should not panic; a decoded snapshot always yields a well-formed class
    if let Ok(snapshot) = StatusSnapshot::from_json(data) {
        let class = snapshot.feedback_class();
        assert!(class.starts_with("feedback-main status-"));
        assert_eq!(snapshot.reps_text(), snapshot.reps.to_string());
    }
});
