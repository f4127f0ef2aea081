pub mod fake_backend;
pub mod fixtures;
pub mod stubs;
