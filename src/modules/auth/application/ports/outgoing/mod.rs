pub mod credential_store;

pub use credential_store::{
    CredentialBlob, CredentialStore, CredentialStoreError, TOKEN_STORAGE_KEY, USER_STORAGE_KEY,
};
