pub mod collection;
pub mod driver;
pub mod iterator;
pub mod record;
pub mod util;

pub use collection::{Iterable, RecordCollection};
pub use iterator::{FilterIterator, Iterator, IteratorExt, RecordIterator, Records};
pub use record::Record;
pub use util::{Result, Status};
