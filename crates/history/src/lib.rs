mod error;
mod store;

pub use error::{HistoryError, Result};
pub use store::{FileHistoryStore, HistoryStore, MemoryHistoryStore, MAX_HISTORY_ENTRIES};
