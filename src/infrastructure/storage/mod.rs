pub mod http_storage;

pub use http_storage::HttpObjectStorage;
