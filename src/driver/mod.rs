use std::io::Write;

use crate::{
    collection::RecordCollection,
    iterator::Iterator,
    record::Record,
    util::Result,
};

/// The four fixed records printed by the demo binary
pub fn sample_collection() -> RecordCollection {
    RecordCollection::new(vec![
        Record::new("field1", "value1"),
        Record::new("field2", "value2"),
        Record::new("field3", "value3"),
        Record::new("field4", "value4"),
    ])
}

/// Drain `iter`, writing one `Record is &{Field:<f> Value:<v>}` line per
/// record. Returns the number of lines written.
pub fn print_records<'a, I, W>(iter: &mut I, out: &mut W) -> Result<usize>
where
    I: Iterator<'a> + ?Sized,
    W: Write,
{
    let mut count = 0;
    while iter.has_next() {
        if let Some(record) = iter.get_next() {
            writeln!(out, "Record is &{record}")?;
            count += 1;
        }
    }
    out.flush()?;
    Ok(count)
}
