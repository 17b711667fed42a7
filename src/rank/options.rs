use std::{fmt, str::FromStr};

use anyhow::anyhow;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// most frequent first
    #[default]
    Desc,
    Asc,
}

impl FromStr for RankOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desc" => Ok(RankOrder::Desc),
            "asc" => Ok(RankOrder::Asc),
            other => Err(anyhow!(
                "invalid rank order: '{}', expected one of 'desc', 'asc'",
                other
            )),
        }
    }
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self {
            RankOrder::Desc => "desc",
            RankOrder::Asc => "asc",
        };
        f.write_str(order)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    pub order: RankOrder,
    /// keep only the first n ranked entries. None: keep all
    pub top_n: Option<usize>,
    /// None or Some(1): single thread ingestion
    pub threads: Option<usize>,
    /// spinner on stderr while ingesting tokens
    pub show_progress: bool,
}

impl RankOptions {
    pub fn with_order(mut self, order: RankOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// 0 is treated as 1, same as `count_parallel`
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn parallel(&self) -> bool {
        self.threads.map(|n| n > 1).unwrap_or(false)
    }
}
