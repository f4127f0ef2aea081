pub mod portfolio_api;
pub mod ports;

pub use portfolio_api::PortfolioApi;
