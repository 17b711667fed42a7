use anyhow::anyhow;

use crate::{
    collections_ext::{counter::Counter, shared_counter::count_parallel},
    pbar::get_spin_pb,
};

use self::{
    extractor::extract,
    options::{RankOptions, RankOrder},
    sorter::{sort, ByCountAsc, ByCountDesc},
};

pub mod extractor;
pub mod options;
pub mod sorter;

/// immutable (key, count) snapshot, detached from the counter it was taken from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<K> {
    key: K,
    count: usize,
}

impl<K> Entry<K> {
    pub fn new(key: K, count: usize) -> Self {
        Self { key, count }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_parts(self) -> (K, usize) {
        (self.key, self.count)
    }
}

impl<K> From<(K, usize)> for Entry<K> {
    fn from(value: (K, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// tokens -> counter -> snapshot -> sort -> (top n), single thread.
/// keys need not be Send. threads > 1 is rejected, see `rank_tokens_parallel`
pub fn rank_tokens<K>(tokens: &[K], opts: &RankOptions) -> anyhow::Result<Vec<Entry<K>>>
where
    K: Ord + Clone,
{
    if opts.parallel() {
        return Err(anyhow!(
            "rank_tokens is single threaded, got threads: {:?}. use rank_tokens_parallel",
            opts.threads
        ));
    }
    tracing::debug!("rank_tokens ::> num_tokens: {}, opts: {:?}", tokens.len(), opts);

    let counter = count_tokens(tokens.iter().cloned(), opts.show_progress)?;
    Ok(rank_counter(counter, tokens.len(), opts))
}

/// same pipeline, ingestion spread over `opts.threads` workers
pub fn rank_tokens_parallel<K>(
    tokens: &[K],
    opts: &RankOptions,
) -> anyhow::Result<Vec<Entry<K>>>
where
    K: Ord + Clone + Send + Sync,
{
    tracing::debug!(
        "rank_tokens_parallel ::> num_tokens: {}, opts: {:?}",
        tokens.len(),
        opts
    );

    let counter = if opts.parallel() {
        count_parallel(tokens, opts.threads, opts.show_progress)?
    } else {
        count_tokens(tokens.iter().cloned(), opts.show_progress)?
    };
    Ok(rank_counter(counter, tokens.len(), opts))
}

fn rank_counter<K>(counter: Counter<K>, num_tokens: usize, opts: &RankOptions) -> Vec<Entry<K>>
where
    K: Ord + Clone,
{
    let mut ranked = extract(&counter);
    // counter is no longer needed once the snapshot is taken
    drop(counter);

    match opts.order {
        RankOrder::Desc => sort(&mut ranked, &ByCountDesc),
        RankOrder::Asc => sort(&mut ranked, &ByCountAsc),
    }

    if let Some(top_n) = opts.top_n {
        if top_n < ranked.len() {
            tracing::debug!("rank_counter ::> keep top {} of {} entries", top_n, ranked.len());
            ranked.truncate(top_n);
        }
    }

    tracing::info!(
        "rank_counter ::> num_tokens: {}, ranked entries: {}, order: {}",
        num_tokens,
        ranked.len(),
        opts.order
    );
    ranked
}

/// sequential ingestion, one increment per token in arrival order
pub fn count_tokens<K, I>(tokens: I, show_progress: bool) -> anyhow::Result<Counter<K>>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let pb = get_spin_pb("counting tokens".to_string(), show_progress)?;
    let mut counter = Counter::new();
    for token in tokens {
        counter.increment(token);
        pb.inc(1);
    }
    pb.finish_and_clear();

    tracing::debug!(
        "count_tokens ::> distinct: {}, total: {}",
        counter.len(),
        counter.total()
    );
    Ok(counter)
}
