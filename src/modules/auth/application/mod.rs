pub mod domain;
pub mod ports;
pub mod session;

pub use session::AuthSession;
