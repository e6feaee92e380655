mod concurrent_table;

pub use concurrent_table::ConcurrentTable;
