pub mod credential_store_file;
pub mod credential_store_memory;

pub use credential_store_file::FileCredentialStore;
pub use credential_store_memory::InMemoryCredentialStore;
