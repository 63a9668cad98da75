//! Storage module for file management
//!
//! Provides the local filesystem store holding uploaded binary content
//! under generated names.

mod local_store;

pub use local_store::LocalFileStore;
