//! Source abstraction for item retrieval and persistence

use crate::Result;
use crate::app::models::{Item, RawRecord};

/// External collaborator supplying raw records and accepting finished items
///
/// Implementations must preserve record order on load and must not mutate
/// the items they are given on save. Records delivered by `load_raw` may be
/// incomplete; filtering them out is the pipeline's responsibility, not the
/// source's.
pub trait ItemSource {
    /// Produce the ordered sequence of raw records from the source
    fn load_raw(&self) -> Result<Vec<RawRecord>>;

    /// Persist the full ordered sequence of (possibly mutated) items
    fn save_all(&self, items: &[Item]) -> Result<()>;
}

// A borrowed source is itself a source, so callers can keep ownership while
// a pipeline runs against it.
impl<S: ItemSource + ?Sized> ItemSource for &S {
    fn load_raw(&self) -> Result<Vec<RawRecord>> {
        (**self).load_raw()
    }

    fn save_all(&self, items: &[Item]) -> Result<()> {
        (**self).save_all(items)
    }
}
