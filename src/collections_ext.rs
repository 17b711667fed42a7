pub mod counter;
pub mod inserter;
pub mod shared_counter;
