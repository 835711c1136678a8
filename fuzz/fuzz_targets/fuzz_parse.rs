#![no_main]

use libfuzzer_sys::fuzz_target;

// Any accepted input must round-trip: canonical text reparses to an equal
// tree, and a second render is byte-identical.
fn roundtrip(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = jsondom::parse(text) else {
        return;
    };
    let canonical = jsondom::to_string(&value);
    let reparsed = jsondom::parse(&canonical).expect("canonical text must reparse");
    assert_eq!(reparsed, value);
    assert_eq!(jsondom::to_string(&reparsed), canonical);
}

fuzz_target!(|data: &[u8]| roundtrip(data));
