//! Abstract storage traits for quizd.
//!
//! Storage backends implement these traits; the rest of the workspace
//! depends only on them. The store is an explicit value injected into the
//! engine, so tests get isolation by constructing a fresh store instead of
//! clearing shared state.

pub mod catalog;
pub mod error;
pub mod memory;
pub mod results;

pub use catalog::CatalogStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use results::ResultStore;
