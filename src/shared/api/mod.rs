pub mod response;

pub use response::{ApiResponse, GENERIC_FAILURE};
