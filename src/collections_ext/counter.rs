use std::collections::BTreeMap;

use crate::rank::{
    extractor::extract,
    sorter::{sort, ByCountDesc},
    Entry,
};

/// Ordered counter. keys are kept in ascending order, not insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K> {
    counts: BTreeMap<K, usize>,
}

impl<K> Default for Counter<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Counter<K>
where
    K: Ord,
{
    /// 创建一个新的 Counter。
    pub fn new() -> Self {
        Counter {
            counts: BTreeMap::new(),
        }
    }

    /// lookup-or-insert. an absent key is inserted with count 0 and stays present
    /// afterwards, so this must not be used as an existence probe. see `contains_key`
    pub fn touch(&mut self, key: K) -> &mut usize {
        self.counts.entry(key).or_insert(0)
    }

    /// 将指定的键的计数器加 1。
    pub fn increment(&mut self, key: K) {
        *self.touch(key) += 1;
    }

    pub fn increment_by(&mut self, key: K, n: usize) {
        *self.touch(key) += n;
    }

    /// 获取某个键的计数值。absent key -> 0, the counter is not modified
    pub fn get(&self, key: &K) -> usize {
        *self.counts.get(key).unwrap_or(&0)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 重置某个键的计数器为 0。the key stays present
    pub fn reset(&mut self, key: K) {
        self.counts.insert(key, 0);
    }

    /// 清空所有计数。
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// 获取所有计数的总和。
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// ascending key order
    pub fn iter(&self) -> impl Iterator<Item = Entry<K>> + '_
    where
        K: Clone,
    {
        self.counts
            .iter()
            .map(|(key, &count)| Entry::new(key.clone(), count))
    }

    /// 获取出现次数最多的 n 个键值对。ties are broken by ascending key
    pub fn most_common(&self, n: usize) -> Vec<Entry<K>>
    where
        K: Clone,
    {
        let mut entries = extract(self);
        sort(&mut entries, &ByCountDesc);
        entries.truncate(n);
        entries
    }
}

impl<K> Extend<K> for Counter<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, tokens: I) {
        tokens.into_iter().for_each(|token| self.increment(token));
    }
}

impl<K> FromIterator<K> for Counter<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(tokens: I) -> Self {
        let mut counter = Counter::new();
        counter.extend(tokens);
        counter
    }
}

#[cfg(test)]
mod test {
    use super::Counter;
    use crate::rank::Entry;

    #[test]
    fn test_increment() {
        let counter: Counter<&str> = ["a", "b", "a", "c", "b", "a"].into_iter().collect();
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.get(&"a"), 3);
        assert_eq!(counter.get(&"b"), 2);
        assert_eq!(counter.get(&"c"), 1);
        assert_eq!(counter.get(&"d"), 0);
        assert!(!counter.contains_key(&"d"));
        assert_eq!(counter.total(), 6);
    }

    #[test]
    fn test_iter_ascending() {
        let counter: Counter<String> = ["pear", "apple", "fig", "apple", "banana"]
            .into_iter()
            .map(String::from)
            .collect();

        let keys = counter.iter().map(|e| e.key().clone()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["apple", "banana", "fig", "pear"]);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_touch_inserts_zero() {
        let mut counter = Counter::new();
        counter.increment("b");

        // probe only, never incremented
        assert_eq!(*counter.touch("a"), 0);
        assert!(counter.contains_key(&"a"));
        assert_eq!(counter.len(), 2);
        assert_eq!(
            counter.iter().collect::<Vec<_>>(),
            vec![Entry::new("a", 0), Entry::new("b", 1)]
        );

        *counter.touch("a") += 5;
        assert_eq!(counter.get(&"a"), 5);
    }

    #[test]
    fn test_reset_and_clear() {
        let mut counter: Counter<u32> = [3, 3, 1].into_iter().collect();
        counter.reset(3);
        assert!(counter.contains_key(&3));
        assert_eq!(counter.get(&3), 0);
        counter.increment_by(7, 4);
        assert_eq!(counter.total(), 5);

        counter.clear();
        assert!(counter.is_empty());
        assert_eq!(counter.total(), 0);
    }

    #[test]
    fn test_most_common() {
        let counter: Counter<&str> = ["x", "y", "z", "z"].into_iter().collect();
        assert_eq!(
            counter.most_common(2),
            vec![Entry::new("z", 2), Entry::new("x", 1)]
        );
        assert_eq!(counter.most_common(10).len(), 3);
        assert!(counter.most_common(0).is_empty());
    }
}
