//! MongoDB backend for the Quill blog store.
//!
//! Wraps the async [`mongodb`] driver. The driver owns connection pooling,
//! so [`MongoStore`] is cheap to clone and safe to share across requests
//! without any additional discipline.

mod document;
mod store;

pub use store::MongoStore;
