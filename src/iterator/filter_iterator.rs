use crate::{iterator::Iterator, record::Record};

/// Iterator yielding only the records of an inner cursor that satisfy a
/// predicate
///
/// # Implementation Notes
///
/// `has_next()` takes `&self`, so the next match is looked up eagerly and
/// held in `pending`. The inner cursor therefore runs one match ahead of
/// what the caller has consumed. Relative order is preserved.
pub struct FilterIterator<'a, P> {
    inner: Box<dyn Iterator<'a> + 'a>,
    predicate: P,
    pending: Option<&'a Record>,
}

impl<'a, P> FilterIterator<'a, P>
where
    P: FnMut(&Record) -> bool,
{
    pub fn new(inner: Box<dyn Iterator<'a> + 'a>, predicate: P) -> Self {
        let mut iter = FilterIterator {
            inner,
            predicate,
            pending: None,
        };
        iter.advance();
        iter
    }

    /// Pull from the inner cursor until a match is found or it runs dry
    fn advance(&mut self) {
        self.pending = None;
        while let Some(record) = self.inner.get_next() {
            if (self.predicate)(record) {
                self.pending = Some(record);
                return;
            }
        }
    }
}

impl<'a, P> Iterator<'a> for FilterIterator<'a, P>
where
    P: FnMut(&Record) -> bool,
{
    fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    fn get_next(&mut self) -> Option<&'a Record> {
        let record = self.pending.take()?;
        self.advance();
        Some(record)
    }
}
