use std::{
    any::Any,
    sync::{Mutex, PoisonError},
    thread,
};

use anyhow::anyhow;

use crate::{
    pbar::get_spin_pb,
    rank::{extractor::extract, Entry},
};

use super::counter::Counter;

/// Counter shared between threads. one lock guards the whole map,
/// held for the full read-modify-write of each increment
#[derive(Debug)]
pub struct SharedCounter<K> {
    inner: Mutex<Counter<K>>,
}

impl<K> Default for SharedCounter<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SharedCounter<K>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counter::new()),
        }
    }

    pub fn increment(&self, key: K) -> anyhow::Result<()> {
        let mut counter = self.inner.lock().map_err(poisoned)?;
        counter.increment(key);
        Ok(())
    }

    /// consistent snapshot, taken under the same lock the writers use
    pub fn snapshot(&self) -> anyhow::Result<Vec<Entry<K>>>
    where
        K: Clone,
    {
        let counter = self.inner.lock().map_err(poisoned)?;
        Ok(extract(&counter))
    }

    /// call after every writer has joined
    pub fn into_inner(self) -> anyhow::Result<Counter<K>> {
        self.inner.into_inner().map_err(poisoned)
    }
}

fn poisoned<T>(e: PoisonError<T>) -> anyhow::Error {
    anyhow!("SharedCounter lock poisoned. msg: {}", e)
}

fn panic_msg(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// threads: None -> num_cpus::get(). clamped to [1, tokens.len()]
pub fn count_parallel<K>(
    tokens: &[K],
    threads: Option<usize>,
    show_progress: bool,
) -> anyhow::Result<Counter<K>>
where
    K: Ord + Clone + Send + Sync,
{
    if tokens.is_empty() {
        return Ok(Counter::new());
    }
    let threads = threads
        .unwrap_or(num_cpus::get())
        .clamp(1, tokens.len());

    let chunk_size = tokens.len().div_ceil(threads);
    tracing::info!(
        "count_parallel ::> num_tokens: {}, threads: {}, chunk_size: {}",
        tokens.len(),
        threads,
        chunk_size
    );

    let pb = get_spin_pb("counting tokens".to_string(), show_progress)?;
    let shared = SharedCounter::new();
    thread::scope(|s| -> anyhow::Result<()> {
        let handles = tokens
            .chunks(chunk_size)
            .map(|chunk| {
                let shared = &shared;
                let pb = &pb;
                s.spawn(move || -> anyhow::Result<()> {
                    for token in chunk {
                        shared.increment(token.clone())?;
                        pb.inc(1);
                    }
                    Ok(())
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().map_err(|e| {
                anyhow!("count_parallel worker panicked. msg: {}", panic_msg(&*e))
            })??;
        }
        Ok(())
    })?;
    pb.finish_and_clear();

    shared.into_inner()
}
