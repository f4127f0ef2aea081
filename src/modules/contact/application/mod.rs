pub mod contact_form;
pub mod domain;
pub mod inbox;

pub use contact_form::ContactFormService;
pub use inbox::ContactInbox;
