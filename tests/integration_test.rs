use recordcursor::{
    FilterIterator, Iterable, Iterator, IteratorExt, Record, RecordCollection, driver,
};

#[test]
fn test_end_to_end_driver_output() {
    let collection = driver::sample_collection();
    let mut iter = collection.create_iterator();
    let mut out = Vec::new();

    let count = driver::print_records(&mut *iter, &mut out).unwrap();
    assert_eq!(count, 4);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Record is &{Field:field1 Value:value1}",
            "Record is &{Field:field2 Value:value2}",
            "Record is &{Field:field3 Value:value3}",
            "Record is &{Field:field4 Value:value4}",
        ]
    );
}

#[test]
fn test_exhaustion_sentinel() {
    let collection = driver::sample_collection();
    let mut iter = collection.create_iterator();

    for i in 1..=4 {
        let record = iter.get_next().unwrap();
        assert_eq!(record.field(), format!("field{i}"));
    }

    assert!(!iter.has_next());
    for _ in 0..3 {
        assert!(iter.get_next().is_none());
        assert!(!iter.has_next());
    }
}

#[test]
fn test_independent_iterators() {
    let collection = driver::sample_collection();
    let mut first = collection.create_iterator();
    let mut second = collection.create_iterator();

    assert_eq!(first.get_next().unwrap().field(), "field1");
    assert_eq!(first.get_next().unwrap().field(), "field2");

    // second cursor is still at the start
    assert_eq!(second.get_next().unwrap().field(), "field1");
    assert_eq!(first.get_next().unwrap().field(), "field3");
    assert_eq!(collection.len(), 4);
}

#[test]
fn test_empty_collection() {
    let collection = RecordCollection::new(Vec::new());
    let mut iter = collection.create_iterator();
    assert!(!iter.has_next());
    assert!(iter.get_next().is_none());
}

#[test]
fn test_has_next_idempotent() {
    let collection = driver::sample_collection();
    let mut iter = collection.create_iterator();
    iter.get_next();

    for _ in 0..10 {
        assert!(iter.has_next());
    }
    assert_eq!(iter.get_next().unwrap().field(), "field2");
}

#[test]
fn test_filter_variant_through_iterable() {
    let collection: RecordCollection = (1..=6)
        .map(|i| Record::new(format!("field{i}"), format!("value{i}")))
        .collect();

    let mut odd = FilterIterator::new(collection.create_iterator(), |r| {
        r.field().ends_with(['1', '3', '5'])
    });

    let mut out = Vec::new();
    let count = driver::print_records(&mut odd, &mut out).unwrap();
    assert_eq!(count, 3);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Record is &{Field:field1 Value:value1}\n\
         Record is &{Field:field3 Value:value3}\n\
         Record is &{Field:field5 Value:value5}\n"
    );
}

#[test]
fn test_records_adapter_for_loop() {
    let collection = driver::sample_collection();
    let mut values = Vec::new();
    for record in collection.create_iterator().records() {
        values.push(record.value().to_string());
    }
    assert_eq!(values, vec!["value1", "value2", "value3", "value4"]);
}

#[test]
fn test_json_collection_keeps_order() {
    let json = r#"[
        {"field": "z", "value": ""},
        {"field": "", "value": "empty field"},
        {"field": "a", "value": "1"}
    ]"#;
    let collection = RecordCollection::from_json(json).unwrap();

    let fields: Vec<&str> = collection
        .create_iterator()
        .records()
        .map(|r| r.field())
        .collect();
    assert_eq!(fields, vec!["z", "", "a"]);
}
