//! Collection persistence
//!
//! JSON export/import of a whole collection, over strings, readers and
//! writers, or files (sync and tokio).

pub mod file;
pub mod file_async;
pub mod format;
pub mod options;

pub use file::CollectionStore;
pub use file_async::AsyncCollectionStore;
pub use options::StoreOptions;
