
pub mod collections_ext;
pub mod pbar;
pub mod rank;

pub use collections_ext::counter::Counter;
pub use rank::{options::RankOptions, rank_tokens, rank_tokens_parallel, Entry};
