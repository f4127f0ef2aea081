pub mod content_store;
pub mod domain;
pub mod ports;
pub mod saved_notice;

pub use content_store::{ContentSnapshot, ContentStore, FetchReport};
pub use saved_notice::SavedNotice;
