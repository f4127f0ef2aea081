pub mod api;
pub mod config;
pub(crate) mod loading;
