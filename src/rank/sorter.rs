use std::cmp::Ordering;

use super::Entry;

/// comparison rule for ranking. `precedes(a, b)` behaves like "a < b":
/// it must be a strict total order over the entries being sorted.
/// an inconsistent rule is a caller bug; debug builds assert on it after sorting
pub trait RankCompare<K> {
    fn precedes(&self, a: &Entry<K>, b: &Entry<K>) -> bool;
}

impl<K, F> RankCompare<K> for F
where
    F: Fn(&Entry<K>, &Entry<K>) -> bool,
{
    fn precedes(&self, a: &Entry<K>, b: &Entry<K>) -> bool {
        self(a, b)
    }
}

/// higher count first, equal counts by ascending key
#[derive(Debug, Default, Clone, Copy)]
pub struct ByCountDesc;

impl<K: Ord> RankCompare<K> for ByCountDesc {
    fn precedes(&self, a: &Entry<K>, b: &Entry<K>) -> bool {
        a.count() > b.count() || (a.count() == b.count() && a.key() < b.key())
    }
}

/// lower count first, equal counts by ascending key
#[derive(Debug, Default, Clone, Copy)]
pub struct ByCountAsc;

impl<K: Ord> RankCompare<K> for ByCountAsc {
    fn precedes(&self, a: &Entry<K>, b: &Entry<K>) -> bool {
        a.count() < b.count() || (a.count() == b.count() && a.key() < b.key())
    }
}

fn ordering<K, C>(compare: &C, a: &Entry<K>, b: &Entry<K>) -> Ordering
where
    C: RankCompare<K> + ?Sized,
{
    if compare.precedes(a, b) {
        Ordering::Less
    } else if compare.precedes(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// stable, in place
pub fn sort<K, C>(entries: &mut [Entry<K>], compare: &C)
where
    C: RankCompare<K> + ?Sized,
{
    entries.sort_by(|a, b| ordering(compare, a, b));

    if cfg!(debug_assertions) {
        for pair in entries.windows(2) {
            assert!(
                compare.precedes(&pair[0], &pair[1]) && !compare.precedes(&pair[1], &pair[0]),
                "rank comparator is not a strict total order over the entries (tie without tie-break, or duplicated key)"
            );
        }
    }
}

pub fn sorted<K, C>(mut entries: Vec<Entry<K>>, compare: &C) -> Vec<Entry<K>>
where
    C: RankCompare<K> + ?Sized,
{
    sort(&mut entries, compare);
    entries
}

#[cfg(test)]
mod test {
    use super::{sort, sorted, ByCountAsc, ByCountDesc, RankCompare};
    use crate::rank::Entry;

    fn entries(pairs: &[(&'static str, usize)]) -> Vec<Entry<&'static str>> {
        pairs.iter().map(|&(k, c)| Entry::new(k, c)).collect()
    }

    #[test]
    fn test_default_rule() {
        let mut v = entries(&[("c", 1), ("a", 3), ("b", 2)]);
        sort(&mut v, &ByCountDesc);
        assert_eq!(v, entries(&[("a", 3), ("b", 2), ("c", 1)]));
    }

    #[test]
    fn test_tie_break() {
        let v = sorted(entries(&[("y", 1), ("x", 1)]), &ByCountDesc);
        assert_eq!(v, entries(&[("x", 1), ("y", 1)]));

        let v = sorted(entries(&[("b", 2), ("c", 1), ("a", 2), ("d", 1)]), &ByCountAsc);
        assert_eq!(v, entries(&[("c", 1), ("d", 1), ("a", 2), ("b", 2)]));
    }

    #[test]
    fn test_totality() {
        let v = entries(&[("a", 2), ("b", 2), ("c", 1), ("d", 5)]);
        for a in &v {
            for b in &v {
                if a != b {
                    assert!(ByCountDesc.precedes(a, b) ^ ByCountDesc.precedes(b, a));
                } else {
                    assert!(!ByCountDesc.precedes(a, b));
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let once = sorted(entries(&[("q", 4), ("p", 4), ("r", 9), ("s", 0)]), &ByCountDesc);
        let twice = sorted(once.clone(), &ByCountDesc);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_closure_rule() {
        // longest key first, then ascending key
        let by_len = |a: &Entry<&str>, b: &Entry<&str>| {
            a.key().len() > b.key().len() || (a.key().len() == b.key().len() && a.key() < b.key())
        };
        let v = sorted(entries(&[("aa", 1), ("b", 7), ("ccc", 2), ("a", 3)]), &by_len);
        assert_eq!(v, entries(&[("ccc", 2), ("aa", 1), ("a", 3), ("b", 7)]));
    }

    #[test]
    fn test_empty() {
        let v: Vec<Entry<&str>> = sorted(vec![], &ByCountDesc);
        assert!(v.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a strict total order")]
    fn test_count_only_rule_panics_on_tie() {
        let count_only = |a: &Entry<&str>, b: &Entry<&str>| a.count() > b.count();
        sorted(entries(&[("x", 1), ("y", 1)]), &count_only);
    }
}
