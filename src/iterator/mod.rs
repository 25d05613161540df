/// Iterator module for RecordCursor
///
/// Provides a pull-based cursor interface for walking the records of a
/// collection front to back:
///
/// ```text
/// RecordCollection::create_iterator()
///     ↓
/// Box<dyn Iterator>
///     ├─→ RecordIterator (borrowed slice + index)
///     └─→ FilterIterator (wraps any cursor, keeps matches only)
/// ```
///
/// ## Key Design Principles
///
/// 1. **Forward Only**: The cursor moves one step per successful fetch and
///    never rewinds
/// 2. **Borrowed Storage**: Cursors view the collection's records in place;
///    nothing is copied
/// 3. **Sentinel Exhaustion**: Fetching past the end yields `None` and leaves
///    the cursor untouched
/// 4. **Independent Cursors**: Every `create_iterator()` call starts a fresh
///    position at 0
use crate::record::Record;

/// Cursor over a sequence of records
///
/// # Lifecycle
///
/// A freshly created iterator points at the first record (or is already
/// exhausted when the source is empty):
///
/// ```ignore
/// let mut iter = collection.create_iterator();
/// while iter.has_next() {
///     let record = iter.get_next();
///     println!("{:?}", record);
/// }
/// ```
///
/// Records are borrowed for `'a`, the lifetime of the underlying storage,
/// so they may outlive the cursor that produced them.
pub trait Iterator<'a> {
    /// Check if another record is available
    ///
    /// Pure query: repeated calls without an intervening `get_next()`
    /// always agree.
    fn has_next(&self) -> bool;

    /// Return the current record and advance by one position
    ///
    /// Returns None once exhausted; the cursor does not move in that case
    fn get_next(&mut self) -> Option<&'a Record>;
}

mod filter_iterator;
mod record_iterator;

pub use filter_iterator::FilterIterator;
pub use record_iterator::RecordIterator;

/// Adapter exposing any cursor as a `std::iter::Iterator`
///
/// Lets consumers use `for` loops and the standard combinators without
/// knowing which cursor variant sits underneath.
pub struct Records<'a> {
    inner: Box<dyn Iterator<'a> + 'a>,
}

impl<'a> std::iter::Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.get_next()
    }
}

// Exhaustion is sticky, so `None` is returned forever after the first one.
impl std::iter::FusedIterator for Records<'_> {}

/// Combinators available on boxed cursors
pub trait IteratorExt<'a> {
    /// Bridge into `std::iter::Iterator`
    fn records(self) -> Records<'a>;

    /// Keep only the records accepted by `predicate`
    fn filter_records<P>(self, predicate: P) -> FilterIterator<'a, P>
    where
        P: FnMut(&Record) -> bool;
}

impl<'a> IteratorExt<'a> for Box<dyn Iterator<'a> + 'a> {
    fn records(self) -> Records<'a> {
        Records { inner: self }
    }

    fn filter_records<P>(self, predicate: P) -> FilterIterator<'a, P>
    where
        P: FnMut(&Record) -> bool,
    {
        FilterIterator::new(self, predicate)
    }
}
