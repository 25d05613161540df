#![no_main]

use libfuzzer_sys::fuzz_target;
use recordcursor::{Iterable, Iterator, RecordCollection};

// Fuzz target for JSON-built collections.
// Whatever decodes must iterate every record exactly once, in stored order.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(collection) = RecordCollection::from_json(text) else {
        return;
    };

    let mut iter = collection.create_iterator();
    let mut seen = 0usize;
    while iter.has_next() {
        let record = iter.get_next().expect("has_next promised a record");
        assert_eq!(Some(record), collection.get(seen).ok(),
            "Record {} out of order", seen);
        seen += 1;
    }

    assert_eq!(seen, collection.len(), "Cursor skipped records");
    assert!(iter.get_next().is_none(), "Exhausted cursor yielded a record");
    assert!(!iter.has_next());
});
