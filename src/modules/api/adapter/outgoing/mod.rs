pub mod reqwest_api_client;

pub use reqwest_api_client::ReqwestApiClient;
