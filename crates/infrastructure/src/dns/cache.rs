pub mod key;
pub mod metrics;
pub mod storage;

pub use key::fingerprint;
pub use metrics::CacheMetrics;
pub use storage::ResponseCache;
