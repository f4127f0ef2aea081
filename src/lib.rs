pub mod modules;
pub mod shared;

pub use modules::{api, auth, contact, content};

use std::sync::Arc;

use crate::auth::adapter::outgoing::FileCredentialStore;
use crate::auth::application::ports::outgoing::credential_store::CredentialStore;
use crate::auth::application::AuthSession;
use crate::contact::application::{ContactFormService, ContactInbox};
use crate::content::application::{ContentStore, SavedNotice};
use crate::modules::api::adapter::outgoing::ReqwestApiClient;
use crate::modules::api::application::ports::outgoing::{ApiClient, ApiClientError};
use crate::modules::api::application::PortfolioApi;
use crate::shared::config::ClientConfig;

#[cfg(test)]
mod tests;

/// Everything the presentation layer needs, wired once and handed down.
pub struct PortfolioContext {
    pub config: ClientConfig,
    pub session: Arc<AuthSession>,
    pub content: Arc<ContentStore>,
    pub contact_form: Arc<ContactFormService>,
    pub inbox: Arc<ContactInbox>,
}

impl PortfolioContext {
    /// HTTP client and file-backed credentials as configured.
    pub fn from_config(config: ClientConfig) -> Result<Self, ApiClientError> {
        let client = Arc::new(ReqwestApiClient::from_config(&config)?);
        let store = Arc::new(FileCredentialStore::new(config.credentials_path.clone()));
        Ok(Self::with_parts(config, client, store))
    }

    pub fn with_parts(
        config: ClientConfig,
        client: Arc<dyn ApiClient>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        let api = PortfolioApi::new(client);
        let session = Arc::new(AuthSession::new(
            api.clone(),
            store,
            config.demo_login.clone(),
        ));
        let content = Arc::new(ContentStore::new(
            api.clone(),
            session.clone(),
            SavedNotice::new(config.saved_notice_delay),
        ));

        Self {
            config,
            session,
            content,
            contact_form: Arc::new(ContactFormService::new(api)),
            inbox: Arc::new(ContactInbox::new()),
        }
    }
}
