pub mod http;
mod store;
mod timer;

pub use http::{router, serve};
pub use store::{InMemoryTimerStore, StoreError, TimerStore};
pub use timer::TimerRecord;
