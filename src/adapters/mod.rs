// Adapters layer: concrete implementations for external systems (storage, http, files).

pub mod file;
pub mod http;
pub mod storage;
