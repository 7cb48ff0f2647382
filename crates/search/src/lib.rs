mod engine;
mod suggest;

pub use engine::{search, SearchResult};
pub use suggest::suggest;
