/// Collection module for RecordCursor
///
/// A collection owns its records and hands out cursors over them. The
/// `Iterable` capability is the only seam consumers need: they ask for a
/// cursor and drive it without knowing how the records are stored.
use crate::iterator::Iterator;

/// Capability of producing fresh cursors
///
/// Each call returns a new, independent cursor positioned before the first
/// record. Creating a cursor never mutates the collection.
pub trait Iterable {
    fn create_iterator(&self) -> Box<dyn Iterator<'_> + '_>;
}

mod record_collection;

pub use record_collection::RecordCollection;
