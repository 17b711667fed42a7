use crate::collections_ext::{
    counter::Counter,
    inserter::{back_inserter, copy},
};

use super::Entry;

/// snapshot the counter into an independent Vec, ascending key order.
/// the counter is left untouched and can be dropped afterwards
pub fn extract<K>(counter: &Counter<K>) -> Vec<Entry<K>>
where
    K: Ord + Clone,
{
    let mut entries = Vec::new();
    copy(counter.iter(), back_inserter(&mut entries));
    debug_assert_eq!(entries.len(), counter.len());
    entries
}
