use crate::{
    collection::Iterable,
    iterator::{Iterator, RecordIterator},
    record::Record,
    util::{Result, Status},
};

/// Ordered, immutable collection of records
///
/// Insertion order is preserved exactly; records are never reordered or
/// deduplicated. No mutation is exposed after construction, so any number
/// of outstanding cursors can share the storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        RecordCollection { records }
    }

    /// Build a collection from a JSON array of `{"field": .., "value": ..}`
    /// objects, keeping array order
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        tracing::debug!(len = records.len(), "collection decoded from json");
        Ok(RecordCollection { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bounds-checked positional access
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or_else(|| {
            Status::invalid_argument(format!(
                "index {} out of range for collection of {}",
                index,
                self.records.len()
            ))
        })
    }

    /// Concrete cursor, for callers that do not need dynamic dispatch
    pub fn iter(&self) -> RecordIterator<'_> {
        RecordIterator::new(&self.records)
    }
}

impl Iterable for RecordCollection {
    fn create_iterator(&self) -> Box<dyn Iterator<'_> + '_> {
        Box::new(self.iter())
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        RecordCollection::new(iter.into_iter().collect())
    }
}
