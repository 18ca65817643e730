pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;
pub mod worker;

pub use store::StudentStore;
pub use worker::{Pending, StoreWorker};
