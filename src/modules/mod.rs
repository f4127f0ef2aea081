pub mod api;
pub mod auth;
pub mod contact;
pub mod content;
