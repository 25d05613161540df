use crate::{iterator::Iterator, record::Record};

/// Iterator over a borrowed slice of records
///
/// Holds a view into the owning collection's storage plus its own cursor.
/// The invariant `index <= records.len()` holds at all times; once
/// `index == records.len()` the iterator is permanently exhausted.
#[derive(Debug, Clone)]
pub struct RecordIterator<'a> {
    records: &'a [Record],
    index: usize,
}

impl<'a> RecordIterator<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        tracing::debug!(len = records.len(), "record iterator created");
        RecordIterator { records, index: 0 }
    }

    /// Number of records already returned
    pub fn position(&self) -> usize {
        self.index
    }

    /// Number of records still to be returned
    pub fn remaining(&self) -> usize {
        self.records.len() - self.index
    }
}

impl<'a> Iterator<'a> for RecordIterator<'a> {
    fn has_next(&self) -> bool {
        self.index < self.records.len()
    }

    fn get_next(&mut self) -> Option<&'a Record> {
        if !self.has_next() {
            return None;
        }

        let record = &self.records[self.index];
        self.index += 1;

        if self.index == self.records.len() {
            tracing::trace!(len = self.records.len(), "record iterator exhausted");
        }

        Some(record)
    }
}
