pub mod entities;

pub use entities::{ContactMessage, ContactSubmission, ContactSubmissionError, NewContactMessage};
