// Adapters layer: concrete implementations of the domain ports (storage, document, navigation).

pub mod document;
pub mod storage;

pub use document::{LoggingNavigator, MemoryDocument};
pub use storage::{LocalStorage, MemoryStorage};
