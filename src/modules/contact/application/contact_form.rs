use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use crate::contact::application::domain::entities::ContactSubmission;
use crate::modules::api::application::PortfolioApi;
use crate::shared::loading::LoadingGuard;

pub const SUBMIT_FAILED: &str = "Failed to send message";

/// Public contact form. Needs no session and keeps nothing locally.
pub struct ContactFormService {
    api: PortfolioApi,
    error: RwLock<Option<String>>,
    in_flight: AtomicUsize,
}

impl ContactFormService {
    pub fn new(api: PortfolioApi) -> Self {
        Self {
            api,
            error: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub async fn submit_contact_form(&self, submission: &ContactSubmission) -> bool {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = None;
        let response = {
            let _loading = LoadingGuard::new(&self.in_flight);
            self.api.submit_contact_form(submission).await
        };

        if response.success {
            info!("Contact form sent by {}", submission.email());
            return true;
        }

        let message = response.error_or(SUBMIT_FAILED);
        warn!("Contact form submission failed: {}", message);
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = Some(message);
        false
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }
}
