// Adapters layer: concrete document sources (remote store, saved files).

pub mod file;
pub mod http;

pub use file::FileDocumentStore;
pub use http::HttpDocumentStore;
