pub mod demo;
pub mod entities;

pub use demo::DemoCredentials;
pub use entities::{AuthPhase, LoginPayload, LoginRequest, LoginRequestError, User, VerifyPayload};
